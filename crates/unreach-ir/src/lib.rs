//! Host-facing data model for a whole-program reachability analysis.
//!
//! This crate defines the shape of what a loader/SSA builder hands to
//! the reachability engine (`unreach-engine`): packages, SSA functions
//! and their instructions, the concrete/interface type universe, and
//! the declaration-level function records the engine's output mutates.
//! It implements no analysis itself.

pub mod assembly;
pub mod concrete_type;
pub mod declaration;
pub mod directive;
pub mod function;
pub mod ids;
pub mod instr;
pub mod interface_type;
pub mod origin;
pub mod package;
pub mod position;
pub mod program;
pub mod suppression;
pub mod ty;

pub use assembly::{AssemblyInfo, AssemblyMap};
pub use concrete_type::{ConcreteType, MethodImpl};
pub use declaration::{DeclKind, Declaration};
pub use directive::DirectiveFlags;
pub use function::Function;
pub use ids::{ConcreteTypeId, DeclId, FuncId, InterfaceId, PackageId, ValueId};
pub use instr::{
    BasicBlock, CallInstr, CallTarget, ChangeInterfaceInstr, Instr, MakeInterfaceInstr, Operand,
    TypeAssertInstr,
};
pub use interface_type::InterfaceType;
pub use origin::Origin;
pub use package::Package;
pub use position::Position;
pub use program::{Program, ProgramBuilder};
pub use suppression::{NoSuppression, SuppressionOracle};
pub use ty::{Method, PrimitiveKind, Signature, TypeRef};
