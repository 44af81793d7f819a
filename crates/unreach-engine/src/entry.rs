//! Entry-Point Collector (C4, §4.4).
//!
//! Scans every declaration in every target package (main module, not
//! stdlib) and decides which ones seed the worklist: program entry,
//! initializers, test/benchmark/example functions, the exported
//! surface of library packages, reflection-pattern names, and anything
//! an external collaborator flagged as directive- or assembly-bound.
//! Uninstantiated generic templates never enter the SSA worklist; a
//! template reached only through the exported-method bullet is
//! recorded separately so the reconciliation pass can still see it.

use crate::config::AnalysisConfig;
use log::debug;
use unreach_ir::{DeclId, DeclKind, Declaration, FuncId, Program};

/// Function names whose mere presence hints at reflection-driven
/// dispatch (`fmt.Stringer`, `json.Marshaler`, and friends all collapse
/// to one of these method names).
const REFLECTION_TARGET_NAMES: &[&str] = &[
    "String",
    "GoString",
    "Error",
    "Marshal",
    "Unmarshal",
    "Validate",
    "Decode",
    "Encode",
];

#[derive(Debug, Clone, Default)]
pub struct EntryPoints {
    pub functions: Vec<FuncId>,
    /// Exported methods of library types with no SSA body: uninstantiated
    /// generic templates, carried by declaration id for C8 to reconcile.
    pub exported_template_objects: Vec<DeclId>,
}

fn is_test_like_name(name: &str) -> bool {
    name.starts_with("Test") || name.starts_with("Benchmark") || name.starts_with("Example")
}

fn is_reflection_target(name: &str) -> bool {
    REFLECTION_TARGET_NAMES.contains(&name)
}

fn push_callable(decl: &Declaration, entries: &mut EntryPoints) {
    match decl.ssa {
        Some(ssa) => entries.functions.push(ssa),
        None => debug!("entry candidate {} has no SSA body, dropped (uncallable template)", decl.name),
    }
}

pub fn collect_entry_points(program: &Program, config: &AnalysisConfig) -> EntryPoints {
    let mut entries = EntryPoints::default();

    for decl in &program.declarations {
        let Some(package) = program.get_package(decl.package) else {
            continue;
        };
        if !package.is_target() {
            continue;
        }
        if decl.is_uncallable_template() && !matches!(decl.kind, DeclKind::Method { .. }) {
            // Filtered outright unless the exported-method bullet below
            // wants to record it as a template object instead.
            continue;
        }

        let is_plain_function = matches!(decl.kind, DeclKind::Function);

        if is_plain_function && decl.name == "main" && decl.is_in_main_package(package) {
            push_callable(decl, &mut entries);
            continue;
        }
        if is_plain_function && decl.name == "init" {
            push_callable(decl, &mut entries);
            continue;
        }
        if is_plain_function && config.include_tests && is_test_like_name(&decl.name) {
            push_callable(decl, &mut entries);
            continue;
        }
        if is_plain_function
            && decl.exported
            && !config.strict
            && !decl.is_in_main_package(package)
            && !decl.in_internal_package
        {
            push_callable(decl, &mut entries);
            continue;
        }
        if matches!(decl.kind, DeclKind::Method { .. })
            && decl.exported
            && !config.strict
            && !decl.is_in_main_package(package)
            && !decl.in_internal_package
        {
            match decl.ssa {
                Some(ssa) => entries.functions.push(ssa),
                None => entries.exported_template_objects.push(decl.id),
            }
            continue;
        }
        if is_reflection_target(&decl.name) {
            push_callable(decl, &mut entries);
            continue;
        }
        if decl.flags.has_runtime_directive || decl.flags.has_cgo_export || decl.flags.called_from_assembly {
            push_callable(decl, &mut entries);
            continue;
        }
        if decl.flags.has_assembly_impl
            && decl.exported
            && !decl.is_in_main_package(package)
            && !decl.in_internal_package
        {
            push_callable(decl, &mut entries);
        }
    }

    debug!(
        "collected {} entry functions, {} exported template objects",
        entries.functions.len(),
        entries.exported_template_objects.len()
    );
    entries
}
