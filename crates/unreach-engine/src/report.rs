//! Reporting Policy (C7, §4.6).
//!
//! Turns the reconciled `used` flags on the declaration table into the
//! caller-facing report. A declaration's reachability has already been
//! settled by the time this runs (C8); this module only applies the
//! export/package/strict-mode predicate and assigns a reason string.

use crate::config::AnalysisConfig;
use crate::name::NameCache;
use std::sync::Arc;
use unreach_ir::{Declaration, Package, PackageId, Position, Program, SuppressionOracle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    UnexportedAndUnused,
    ExportedInInternalAndUnused,
    ExportedInMainAndUnused,
    ExportedAndUnusedStrict,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::UnexportedAndUnused => "unexported and unused",
            Reason::ExportedInInternalAndUnused => "exported in internal and unused",
            Reason::ExportedInMainAndUnused => "exported in main and unused",
            Reason::ExportedAndUnusedStrict => "exported and unused (strict mode)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnusedFunction {
    pub name: Arc<str>,
    pub position: Position,
    pub reason: Reason,
    pub suppressed: bool,
    pub package: PackageId,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<UnusedFunction>,
}

fn reason_for(decl: &Declaration, package: &Package, strict: bool) -> Option<Reason> {
    if !decl.exported {
        return Some(Reason::UnexportedAndUnused);
    }
    if package.is_internal_path() {
        return Some(Reason::ExportedInInternalAndUnused);
    }
    if decl.is_in_main_package(package) {
        return Some(Reason::ExportedInMainAndUnused);
    }
    if strict {
        return Some(Reason::ExportedAndUnusedStrict);
    }
    None
}

/// P7: a function is reported iff unreached, unsuppressed, carries no
/// directive flags, and (unexported OR in-internal-path OR
/// in-main-package OR strict mode).
///
/// Suppression is the OR of whatever the loader already baked into the
/// declaration and a live consultation of `suppression` by position —
/// a host may supply either or both without this crate caring which.
pub fn build_report(
    program: &Program,
    names: &NameCache,
    config: &AnalysisConfig,
    suppression: &dyn SuppressionOracle,
) -> Report {
    let mut results = Vec::new();

    for decl in &program.declarations {
        if decl.is_used() || decl.flags.any_set() {
            continue;
        }
        let (oracle_suppressed, _reason) = suppression.is_suppressed(&decl.position);
        let suppressed = decl.is_suppressed || oracle_suppressed;
        if suppressed {
            continue;
        }
        let Some(package) = program.get_package(decl.package) else { continue };
        let Some(reason) = reason_for(decl, package, config.strict) else { continue };

        results.push(UnusedFunction {
            name: names.declaration_name(program, decl),
            position: decl.position.clone(),
            reason,
            suppressed,
            package: decl.package,
        });
    }

    results.sort_by(|a, b| {
        let path_of = |pkg: PackageId| program.get_package(pkg).map(|p| p.path.as_str()).unwrap_or("");
        (path_of(a.package), a.name.as_ref()).cmp(&(path_of(b.package), b.name.as_ref()))
    });

    Report { results }
}
