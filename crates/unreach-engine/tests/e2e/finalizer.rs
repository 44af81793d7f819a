//! Finalizer-callback detection (extension g): a callback passed to
//! the runtime's registration routine is kept reachable even with no
//! direct call site, whether passed as a bare function value, boxed
//! through `MakeInterface`, or a closure boxed the same way.

use super::harness::*;
use unreach_engine::{analyze, AnalysisConfig};
use unreach_ir::{
    BasicBlock, CallInstr, CallTarget, Function, FuncId, Instr, MakeInterfaceInstr, NoSuppression,
    Operand, PrimitiveKind, ProgramBuilder, Signature, TypeRef, ValueId,
};

/// A bare function value passed directly as the callback argument is
/// kept reachable.
#[test]
fn finalizer_callback_kept_reachable() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "app");

    let on_finalize = b.add_function(Function::new(FuncId::new(0), "onFinalize", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "onFinalize", on_finalize, false);

    let set_finalizer = b.add_function(Function::new(FuncId::new(0), "SetFinalizer", pkg, Signature::new(vec![], vec![])));
    b.set_finalizer_register(set_finalizer);

    let mut setup = Function::new(FuncId::new(0), "init", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::Call(CallInstr {
        dest: None,
        target: CallTarget::Static(set_finalizer),
        args: vec![Operand::Value(ValueId::new(0)), Operand::Func(on_finalize)],
    }));
    setup.add_block(block);
    let setup = b.add_function(setup);
    func_decl(&mut b, pkg, "init", setup, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert!(report.results.is_empty());
}

/// The realistic shape: the callback is boxed into `interface{}` by a
/// `MakeInterface` before the call, so the call's second argument is
/// an `Operand::Value` naming that conversion's result rather than
/// `Operand::Func` directly.
#[test]
fn finalizer_callback_boxed_through_make_interface_is_kept_reachable() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "app");

    let on_finalize = b.add_function(Function::new(FuncId::new(0), "onFinalize", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "onFinalize", on_finalize, false);

    let set_finalizer = b.add_function(Function::new(FuncId::new(0), "SetFinalizer", pkg, Signature::new(vec![], vec![])));
    b.set_finalizer_register(set_finalizer);

    let boxed = ValueId::new(1);
    let mut setup = Function::new(FuncId::new(0), "init", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: boxed,
        target_interface: None,
        operand: Operand::Func(on_finalize),
        operand_type: TypeRef::Primitive(PrimitiveKind::Other),
        pointer_to_interface: None,
    }));
    block.push(Instr::Call(CallInstr {
        dest: None,
        target: CallTarget::Static(set_finalizer),
        args: vec![Operand::Value(ValueId::new(0)), Operand::Value(boxed)],
    }));
    setup.add_block(block);
    let setup = b.add_function(setup);
    func_decl(&mut b, pkg, "init", setup, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert!(report.results.is_empty());
}

/// A closure boxed the same way unwraps one level further, to the
/// function the closure wraps.
#[test]
fn finalizer_closure_callback_marks_inner_function_reachable() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "app");

    let cleanup_body = b.add_function(Function::new(FuncId::new(0), "cleanupBody", pkg, Signature::new(vec![], vec![])));
    func_decl(&mut b, pkg, "cleanupBody", cleanup_body, false);

    let set_finalizer = b.add_function(Function::new(FuncId::new(0), "SetFinalizer", pkg, Signature::new(vec![], vec![])));
    b.set_finalizer_register(set_finalizer);

    let boxed = ValueId::new(1);
    let mut setup = Function::new(FuncId::new(0), "init", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: boxed,
        target_interface: None,
        operand: Operand::Closure(cleanup_body),
        operand_type: TypeRef::Primitive(PrimitiveKind::Other),
        pointer_to_interface: None,
    }));
    block.push(Instr::Call(CallInstr {
        dest: None,
        target: CallTarget::Static(set_finalizer),
        args: vec![Operand::Value(ValueId::new(0)), Operand::Value(boxed)],
    }));
    setup.add_block(block);
    let setup = b.add_function(setup);
    func_decl(&mut b, pkg, "init", setup, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert!(report.results.is_empty());
}
