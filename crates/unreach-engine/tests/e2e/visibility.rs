//! Exported/unexported/internal-package visibility and strict mode.

use super::harness::*;
use unreach_engine::{analyze, AnalysisConfig};
use unreach_ir::{
    BasicBlock, CallInstr, CallTarget, ConcreteType, ConcreteTypeId, Declaration, DeclKind,
    Function, FuncId, Instr, Method, MethodImpl, NoSuppression, Position, ProgramBuilder,
    Signature,
};

/// An unexported unreached helper in a library package is reported.
#[test]
fn unexported_unreached_helper() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app/lib", "lib");

    let used = b.add_function(Function::new(FuncId::new(0), "used", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "used", used, false);

    let mut public_api = Function::new(FuncId::new(0), "PublicAPI", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::Call(CallInstr { dest: None, target: CallTarget::Static(used), args: vec![] }));
    public_api.add_block(block);
    let public_api = b.add_function(public_api);
    func_decl(&mut b, pkg, "PublicAPI", public_api, true);

    let unused_helper = b.add_function(Function::new(FuncId::new(0), "unusedHelper", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "unusedHelper", unused_helper, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert_eq!(reported_names(&report), vec!["example.com/app/lib.unusedHelper"]);
}

/// An exported method in an internal package, called only from inside
/// the module, is reported anyway — `internal` carves out no
/// exemption of its own.
#[test]
fn exported_method_in_internal_package() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let svc_pkg = package(&mut b, "example.com/app/internal/svc", "svc");
    let main_pkg = package(&mut b, "example.com/app", "main");

    let used_fn = b.add_function({
        let mut f = Function::new(FuncId::new(0), "Used", svc_pkg, Signature::new(vec![], vec![]));
        f.receiver_is_pointer = true;
        f
    });
    let unused_fn = b.add_function({
        let mut f = Function::new(FuncId::new(0), "UnusedExported", svc_pkg, Signature::new(vec![], vec![]));
        f.receiver_is_pointer = true;
        f
    });

    let s_ty = b.add_concrete_type(ConcreteType {
        id: ConcreteTypeId::new(0),
        name: "S".into(),
        package: svc_pkg,
        type_params: vec![],
        methods: vec![
            MethodImpl { method: Method::new("Used", 0, 0), func: used_fn, by_pointer: true },
            MethodImpl { method: Method::new("UnusedExported", 0, 0), func: unused_fn, by_pointer: true },
        ],
    });

    let mut used_decl = Declaration::new(
        unreach_ir::DeclId::new(0),
        DeclKind::Method { receiver: s_ty, by_pointer: true },
        "Used",
        svc_pkg,
        Position::new("svc.go", 5, 1),
    );
    used_decl.ssa = Some(used_fn);
    used_decl.exported = true;
    used_decl.in_internal_package = true;
    b.add_declaration(used_decl);

    let mut unused_decl = Declaration::new(
        unreach_ir::DeclId::new(0),
        DeclKind::Method { receiver: s_ty, by_pointer: true },
        "UnusedExported",
        svc_pkg,
        Position::new("svc.go", 8, 1),
    );
    unused_decl.ssa = Some(unused_fn);
    unused_decl.exported = true;
    unused_decl.in_internal_package = true;
    b.add_declaration(unused_decl);

    let mut main_fn = Function::new(FuncId::new(0), "main", main_pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::Call(CallInstr { dest: None, target: CallTarget::Static(used_fn), args: vec![] }));
    main_fn.add_block(block);
    let main_fn = b.add_function(main_fn);
    func_decl(&mut b, main_pkg, "main", main_fn, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert_eq!(
        reported_names(&report),
        vec!["example.com/app/internal/svc.*S.UnusedExported"]
    );
}

/// Strict mode flips the exported-library default: an exported
/// function with no observed caller is reportable only under strict.
#[test]
fn strict_mode_flips_exported_default() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app/lib", "lib");
    let do_thing = b.add_function(Function::new(FuncId::new(0), "DoThing", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "DoThing", do_thing, true);
    let program = b.build();

    let normal = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();
    assert!(normal.results.is_empty());

    let strict_config = AnalysisConfig { strict: true, ..AnalysisConfig::default() };
    let strict = analyze(&program, &strict_config, &NoSuppression).unwrap();
    assert_eq!(reported_names(&strict), vec!["example.com/app/lib.DoThing"]);
}
