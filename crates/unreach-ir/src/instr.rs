//! SSA instruction kinds consumed by the reachability engine (§3, §4.5).
//!
//! This is a closed, tagged variant — not an open trait hierarchy —
//! since the instruction set the engine cares about is fixed (§9
//! Design Notes: "best modeled as a tagged variant").

use crate::ids::{FuncId, InterfaceId, ValueId};
use crate::ty::{Method, Signature, TypeRef};

/// An operand that may or may not be a function value.
///
/// Most operands just name an SSA value; an operand is `Func` when it
/// directly references a function as a value (address-taken use) —
/// passing a function as an argument, storing it into a field, closing
/// over it, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Value(ValueId),
    Func(FuncId),
    /// A closure literal, carrying the id of the function body it
    /// wraps. Reachability never models captured variables; only the
    /// inner function itself is an address-taken candidate.
    Closure(FuncId),
}

/// The callee side of a `Call` instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallTarget {
    /// Direct call to a known function.
    Static(FuncId),
    /// Call through a function value of unknown target at this site.
    Dynamic(Signature),
    /// Call dispatched through an interface-typed value.
    Invoke { interface: InterfaceId, method: Method },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallInstr {
    pub dest: Option<ValueId>,
    pub target: CallTarget,
    pub args: Vec<Operand>,
}

/// `MakeInterface`: a value of type `T` is boxed into an interface
/// value of type `I` (§3, §4.5).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MakeInterfaceInstr {
    pub dest: ValueId,
    /// `I`. `None` for the pointer-to-interface-to-any pattern, where
    /// the destination's static type is a non-empty `any`-like
    /// interface but the operand is itself `*SomeInterface` — tracked
    /// via `pointer_to_interface` instead.
    pub target_interface: Option<InterfaceId>,
    pub operand: Operand,
    /// The static type of `operand`, used by the precision extensions
    /// to tell a concrete-value conversion from the
    /// pointer-to-interface pattern (`&customErr` bound to `any`).
    pub operand_type: TypeRef,
    /// Set when `operand_type` is `*J` for some interface `J`: the
    /// pointer-to-interface-to-any pattern in §4.5/§4.6(d)'s sibling.
    pub pointer_to_interface: Option<InterfaceId>,
}

/// `TypeAssert x.(T)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAssertInstr {
    pub dest: ValueId,
    pub operand: Operand,
    /// The interface `x` is statically typed as, if any. `None` means
    /// the source is not interface-typed and the assertion is inert
    /// for reachability purposes.
    pub source_interface: Option<InterfaceId>,
    pub target: TypeRef,
}

/// `ChangeInterface`: coercion from one interface type to another
/// (always interface→interface, never narrowing).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeInterfaceInstr {
    pub dest: ValueId,
    pub source_interface: InterfaceId,
    pub target_interface: InterfaceId,
    pub operand: Operand,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instr {
    Call(CallInstr),
    MakeInterface(MakeInterfaceInstr),
    TypeAssert(TypeAssertInstr),
    ChangeInterface(ChangeInterfaceInstr),
    /// Anything else: still scanned for address-taken operands.
    Other { operands: Vec<Operand> },
}

impl Instr {
    /// Operands eligible for address-taken detection: every operand
    /// except a `Call`'s own target position (§4.5 "Operand scan").
    pub fn address_taken_candidates(&self) -> Vec<FuncId> {
        let mut out = Vec::new();
        let scan = |ops: &[Operand], out: &mut Vec<FuncId>| {
            for op in ops {
                match op {
                    Operand::Func(f) | Operand::Closure(f) => out.push(*f),
                    Operand::Value(_) => {}
                }
            }
        };
        match self {
            Instr::Call(c) => scan(&c.args, &mut out),
            Instr::MakeInterface(m) => scan(std::slice::from_ref(&m.operand), &mut out),
            Instr::TypeAssert(t) => scan(std::slice::from_ref(&t.operand), &mut out),
            Instr::ChangeInterface(c) => scan(std::slice::from_ref(&c.operand), &mut out),
            Instr::Other { operands } => scan(operands, &mut out),
        }
        out
    }
}

/// A straight-line sequence of instructions. Control flow between
/// blocks carries no information the engine needs (RTA is flow- and
/// path-insensitive), so blocks are not linked into a CFG here.
#[derive(Debug, Clone, Default)]
pub struct BasicBlock {
    pub instrs: Vec<Instr>,
}

impl BasicBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instr: Instr) -> &mut Self {
        self.instrs.push(instr);
        self
    }
}
