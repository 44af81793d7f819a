//! The SSA function (§3): opaque input, carries a basic-block body.

use crate::ids::{ConcreteTypeId, DeclId, FuncId, PackageId};
use crate::instr::BasicBlock;
use crate::origin::Origin;
use crate::ty::Signature;

#[derive(Debug, Clone)]
pub struct Function {
    pub id: FuncId,
    pub name: String,
    pub package: PackageId,
    pub signature: Signature,
    pub origin: Origin,
    pub receiver: Option<ConcreteTypeId>,
    pub receiver_is_pointer: bool,
    pub blocks: Vec<BasicBlock>,
    /// Back-reference to the type-system declaration this SSA function
    /// implements, used by the orchestrator's reconciliation pass
    /// (§4.7) and left unset by loaders that don't need it.
    pub declaration: Option<DeclId>,
}

impl Function {
    pub fn new(id: FuncId, name: impl Into<String>, package: PackageId, signature: Signature) -> Self {
        Self {
            id,
            name: name.into(),
            package,
            signature,
            origin: Origin::NotGeneric,
            receiver: None,
            receiver_is_pointer: false,
            blocks: Vec::new(),
            declaration: None,
        }
    }

    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn add_block(&mut self, block: BasicBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn instrs(&self) -> impl Iterator<Item = &crate::instr::Instr> {
        self.blocks.iter().flat_map(|b| b.instrs.iter())
    }
}
