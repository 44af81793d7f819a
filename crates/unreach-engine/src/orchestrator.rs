//! Orchestration (C8, §4.7): the single public entry point tying entry
//! collection, the worklist engine, and declaration reconciliation
//! into one call.
//!
//! Reconciliation bridges two views of "the same function": the
//! engine's `FuncId`-keyed reachable set (SSA view) and the
//! declaration table's `DeclId`-keyed `used` bit (type-system view).
//! Most declarations carry their own SSA id and resolve by identity;
//! generic instantiations are separate SSA objects from their
//! template's declaration, so those fall back to a canonical-name
//! lookup built once over the reachable set.

use crate::config::AnalysisConfig;
use crate::engine::Engine;
use crate::entry::collect_entry_points;
use crate::error::{AnalysisError, AnalysisResult};
use crate::name::NameCache;
use crate::report::{build_report, Report};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use unreach_ir::{Program, SuppressionOracle};

/// Runs the full analysis over an already-loaded program and returns
/// the report of unused functions.
///
/// Fails fast on a program that cannot support sound analysis (§7);
/// once past that check the fixed point itself is total and this
/// cannot fail.
pub fn analyze(
    program: &Program,
    config: &AnalysisConfig,
    suppression: &dyn SuppressionOracle,
) -> AnalysisResult<Report> {
    validate(program)?;

    let names = NameCache::new();
    let entries = collect_entry_points(program, config);
    let output = Engine::new(program).run(&entries);

    let reachable_names: FxHashSet<Arc<str>> =
        output.reachable.iter().map(|&f| names.function_name(program, f)).collect();

    for decl in &program.declarations {
        let by_identity = decl.ssa.map(|f| output.reachable.contains(&f)).unwrap_or(false)
            || output.reachable_objects.contains(&decl.id);
        let used = by_identity || reachable_names.contains(&names.declaration_name(program, decl));
        if used {
            decl.mark_used();
        }
    }

    Ok(build_report(program, &names, config, suppression))
}

/// §7: the only conditions that stop analysis before it starts. Once
/// a program passes this, the engine runs to completion unconditionally.
fn validate(program: &Program) -> AnalysisResult<()> {
    if program.is_empty() {
        return Err(AnalysisError::InputInvalid {
            reason: "program has no packages".to_string(),
        });
    }

    let degraded: Vec<String> = program
        .packages
        .iter()
        .filter(|pkg| pkg.load_error.is_some())
        .map(|pkg| pkg.path.clone())
        .collect();
    if !degraded.is_empty() {
        return Err(AnalysisError::InputDegraded { packages: degraded });
    }

    Ok(())
}
