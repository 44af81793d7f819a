//! Types, method descriptors, and signatures.

use crate::ids::{ConcreteTypeId, InterfaceId};
use std::fmt;

/// Built-in scalar types, distinct from any named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    /// `error`-shaped builtins, byte, rune, and the rest collapse here;
    /// the engine never branches on the specific primitive.
    Other,
}

/// A reference to a type as it appears in a signature or operand.
///
/// Unaliasing (I7) happens before a `TypeRef` is constructed: the
/// loader is responsible for resolving `type Foo = Bar` to `Bar`'s
/// `ConcreteTypeId`/`InterfaceId` before handing instructions to this
/// crate, so two aliases of the same type always compare equal here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Concrete(ConcreteTypeId),
    Interface(InterfaceId),
    Pointer(Box<TypeRef>),
    Primitive(PrimitiveKind),
    /// An unsubstituted generic type parameter, seen only inside a
    /// template's own signature.
    TypeParam(u32),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Concrete(id) => write!(f, "{}", id),
            TypeRef::Interface(id) => write!(f, "{}", id),
            TypeRef::Pointer(inner) => write!(f, "*{}", inner),
            TypeRef::Primitive(p) => write!(f, "{:?}", p),
            TypeRef::TypeParam(n) => write!(f, "T{}", n),
        }
    }
}

/// A method identifier plus the arity used to disambiguate overloads
/// in the fingerprint (`method_id, param_count, result_count`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub param_count: u16,
    pub result_count: u16,
}

impl Method {
    pub fn new(name: impl Into<String>, param_count: u16, result_count: u16) -> Self {
        Self {
            name: name.into(),
            param_count,
            result_count,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} -> {})", self.name, self.param_count, self.result_count)
    }
}

/// A call/function signature, used to group address-taken functions
/// and dynamic call sites for the cross-product closure (§4.5).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub params: Vec<TypeRef>,
    pub results: Vec<TypeRef>,
}

impl Signature {
    pub fn new(params: Vec<TypeRef>, results: Vec<TypeRef>) -> Self {
        Self { params, results }
    }
}
