//! Finalizer-callback detection (extension g).
//!
//! A call to the runtime's finalizer-registration routine with at
//! least two arguments registers its second argument as a callback the
//! garbage collector invokes directly, with no ordinary call edge to
//! show for it. If that argument names a function value, that function
//! must be treated as reachable and address-taken even though nothing
//! in the visible call graph ever calls it.
//!
//! The callback argument is declared `interface{}`, so a compiled
//! program never passes a bare function value there: it boxes the
//! function through a `MakeInterface` first and passes the boxed
//! result, which shows up here as `Operand::Value` naming that
//! instruction's `dest` rather than `Operand::Func` directly (§4.6(g)
//! "unwrap MakeInterface wrapper"). A closure literal unwraps the same
//! way, one level further, to the function it wraps.

use unreach_ir::{CallInstr, CallTarget, FuncId, Instr, Operand, Program, ValueId};

pub fn finalizer_target(program: &Program, instrs: &[Instr], call: &CallInstr) -> Option<FuncId> {
    let finalizer_register = program.finalizer_register?;
    if call.target != CallTarget::Static(finalizer_register) {
        return None;
    }
    operand_target(instrs, call.args.get(1)?)
}

/// Resolves an operand to the function it ultimately names, unwrapping
/// at most one `MakeInterface` boxing and one closure layer.
fn operand_target(instrs: &[Instr], operand: &Operand) -> Option<FuncId> {
    match operand {
        Operand::Func(f) => Some(*f),
        Operand::Closure(f) => Some(*f),
        Operand::Value(v) => make_interface_operand(instrs, *v).and_then(|inner| match inner {
            Operand::Func(f) => Some(*f),
            Operand::Closure(f) => Some(*f),
            Operand::Value(_) => None,
        }),
    }
}

/// The boxed operand of the `MakeInterface` instruction whose `dest`
/// is `value`, if this function's body contains one.
fn make_interface_operand(instrs: &[Instr], value: ValueId) -> Option<&Operand> {
    instrs.iter().find_map(|instr| match instr {
        Instr::MakeInterface(m) if m.dest == value => Some(&m.operand),
        _ => None,
    })
}
