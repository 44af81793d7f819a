//! Interface types and their method requirements.

use crate::ids::{InterfaceId, PackageId};
use crate::ty::Method;

/// A named interface type as the loader's type-system sees it.
#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub id: InterfaceId,
    pub name: String,
    pub package: PackageId,
    pub methods: Vec<Method>,
}

impl InterfaceType {
    /// The empty interface (`any`) has no method requirements and is
    /// the trigger for the MakeInterface precision extensions (§4.5).
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
