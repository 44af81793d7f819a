//! Assembly metadata (§1 external collaborator, §6 Inputs).
//!
//! The textual assembly scanner itself is out of scope; this crate
//! only defines the shape of what it hands back: per-package sets of
//! implemented and called symbol names.

use crate::ids::PackageId;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct AssemblyInfo {
    pub implemented_symbols: FxHashSet<String>,
    pub called_symbols: FxHashSet<String>,
}

/// Per-package assembly metadata. A package absent from the map has no
/// assembly files; a package present with an empty `AssemblyInfo`
/// reflects a soft scan failure recovered per §7 (treated identically
/// to "no assembly information").
#[derive(Debug, Clone, Default)]
pub struct AssemblyMap(pub FxHashMap<PackageId, AssemblyInfo>);

impl AssemblyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_package(&self, package: PackageId) -> Option<&AssemblyInfo> {
        self.0.get(&package)
    }
}
