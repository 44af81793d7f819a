//! Boundary behaviors (§7): the conditions that stop analysis before
//! the fixed point ever runs.

use super::harness::*;
use unreach_engine::{analyze, AnalysisConfig};
use unreach_ir::{Function, FuncId, NoSuppression, Package, PackageId, ProgramBuilder, Signature};

/// An empty program is rejected before any reachability work begins.
#[test]
fn empty_program_is_rejected() {
    init_logging();
    let program = ProgramBuilder::new().build();
    assert!(analyze(&program, &AnalysisConfig::default(), &NoSuppression).is_err());
}

/// A single root with no calls is the only reachable function.
#[test]
fn single_root_with_no_calls() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "main");
    let main_fn = b.add_function(Function::new(FuncId::new(0), "main", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "main", main_fn, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();
    assert!(report.results.is_empty());
}

/// A package that loaded with errors fails the analysis outright
/// rather than risk false positives from partial type information.
#[test]
fn degraded_package_is_rejected() {
    init_logging();
    let mut b = ProgramBuilder::new();
    b.add_package(Package {
        id: PackageId::new(0),
        path: "example.com/app/broken".into(),
        name: "broken".into(),
        in_main_module: true,
        is_stdlib: false,
        load_error: Some("syntax error: unexpected EOF".into()),
    });
    let program = b.build();

    assert!(analyze(&program, &AnalysisConfig::default(), &NoSuppression).is_err());
}
