//! Concrete (non-interface) named types and their method sets.

use crate::ids::{ConcreteTypeId, FuncId, PackageId};
use crate::ty::Method;

/// A method implementation on a concrete type: the abstract
/// `(name, arity)` descriptor used for fingerprinting, paired with the
/// SSA function that actually implements it and which receiver form it
/// was declared with.
///
/// The receiver form matters for the pointer-swap rule (§9 Design
/// Notes, last bullet): a value `C` may lack a method that only exists
/// on `*C`, and an interface-invoke edge resolved against `C` must
/// retarget to the `*C` implementation in that case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodImpl {
    pub method: Method,
    pub func: FuncId,
    pub by_pointer: bool,
}

/// A named concrete type as the loader's type-system sees it.
#[derive(Debug, Clone)]
pub struct ConcreteType {
    pub id: ConcreteTypeId,
    pub name: String,
    pub package: PackageId,
    /// Bracketed type parameter/argument names to print after `name`
    /// (e.g. `["T"]` for a template receiver, `["int"]` for a
    /// monomorphized instantiation). Empty for non-generic types.
    pub type_params: Vec<String>,
    /// The full method set, both value- and pointer-receiver methods,
    /// per §4.5(f) ("pre-compute concrete-type info (both value and
    /// pointer receivers)").
    pub methods: Vec<MethodImpl>,
}

impl ConcreteType {
    /// The method set as abstract descriptors only, for fingerprinting
    /// (C2) — arity-qualified name, receiver form erased.
    pub fn method_set(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().map(|m| &m.method)
    }

    /// Resolve a required method by name+arity, preferring the
    /// value-receiver implementation and falling back to the
    /// pointer-receiver one (the pointer-swap rule).
    pub fn resolve(&self, wanted: &Method) -> Option<&MethodImpl> {
        self.methods
            .iter()
            .find(|m| &m.method == wanted && !m.by_pointer)
            .or_else(|| self.methods.iter().find(|m| &m.method == wanted))
    }
}
