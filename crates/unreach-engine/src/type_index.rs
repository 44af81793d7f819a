//! Type/Interface Index (C3, §4.3) and the user-types index (§4.5(f)).
//!
//! Two keyed caches, created lazily: concrete-type info and
//! interface-type info, each carrying a fingerprint and a growing
//! "implements" relation. `implementations(I)` is satisfied either
//! from the one-shot global user-types scan (§4.5(f), once it has
//! run) or, failing that, from whatever concrete types have been
//! observed as runtime types so far — both paths funnel through the
//! same fingerprint fast path before ever running the structural
//! check (C2).

use crate::fingerprint::{fast_path_rejects, fingerprint};
use rustc_hash::{FxHashMap, FxHashSet};
use unreach_ir::{ConcreteTypeId, InterfaceId, Program};

#[derive(Default)]
pub struct TypeIndex {
    concrete_fp: FxHashMap<ConcreteTypeId, u64>,
    interface_fp: FxHashMap<InterfaceId, u64>,
    implementers: FxHashMap<InterfaceId, FxHashSet<ConcreteTypeId>>,
    implements_of: FxHashMap<ConcreteTypeId, FxHashSet<InterfaceId>>,
    /// Interfaces whose `implementations()` set is authoritative,
    /// i.e. already checked against the full user-types index rather
    /// than only the types observed as runtime so far.
    computed: FxHashSet<InterfaceId>,
    /// Every named, non-interface type in a non-stdlib package, filled
    /// in by [`TypeIndex::build_user_types_index`].
    all_named_types: Vec<ConcreteTypeId>,
    user_types_index_built: bool,
    /// Concrete types actually observed becoming runtime-accessible
    /// (boxed into an interface), used by the partial fallback path.
    known_runtime_types: FxHashSet<ConcreteTypeId>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn concrete_fingerprint(&mut self, program: &Program, id: ConcreteTypeId) -> u64 {
        if let Some(fp) = self.concrete_fp.get(&id) {
            return *fp;
        }
        let fp = match program.get_concrete_type(id) {
            Some(ty) => fingerprint(ty.method_set()),
            None => 0,
        };
        self.concrete_fp.insert(id, fp);
        fp
    }

    fn interface_fingerprint(&mut self, program: &Program, id: InterfaceId) -> u64 {
        if let Some(fp) = self.interface_fp.get(&id) {
            return *fp;
        }
        let fp = match program.get_interface(id) {
            Some(iface) => fingerprint(&iface.methods),
            None => 0,
        };
        self.interface_fp.insert(id, fp);
        // If the comprehensive scan already ran, a freshly-seen
        // interface still needs to be cross-checked against it (§4.5(f)
        // "Later additions update both indices incrementally").
        if self.user_types_index_built && !self.computed.contains(&id) {
            self.compute_against(program, id, &self.all_named_types.clone());
        }
        fp
    }

    /// The fast-path-then-structural `implements(C, I)` test (§4.2).
    /// Records the relationship into both directions of the index on
    /// success so later lookups are O(1).
    pub fn implements(&mut self, program: &Program, concrete: ConcreteTypeId, interface: InterfaceId) -> bool {
        if let Some(set) = self.implements_of.get(&concrete) {
            if set.contains(&interface) {
                return true;
            }
        }
        let concrete_fp = self.concrete_fingerprint(program, concrete);
        let interface_fp = self.interface_fingerprint(program, interface);
        if fast_path_rejects(interface_fp, concrete_fp) {
            return false;
        }
        let structural = match (program.get_concrete_type(concrete), program.get_interface(interface)) {
            (Some(ty), Some(iface)) => iface.methods.iter().all(|m| ty.method_set().any(|tm| tm == m)),
            _ => false,
        };
        if structural {
            self.implementers.entry(interface).or_default().insert(concrete);
            self.implements_of.entry(concrete).or_default().insert(interface);
        }
        structural
    }

    /// A concrete type has just become runtime-accessible (boxed into
    /// an interface). Cross-check it against every interface observed
    /// so far and return the newly-discovered implementations, for the
    /// engine to close the interface-invoke cross-product against
    /// (§4.3 "When a new runtime type is added...", §4.5 "Interface-invoke
    /// closure").
    pub fn record_runtime_type(&mut self, program: &Program, concrete: ConcreteTypeId) -> Vec<InterfaceId> {
        self.known_runtime_types.insert(concrete);
        let already: FxHashSet<InterfaceId> = self.implements_of.get(&concrete).cloned().unwrap_or_default();
        let interfaces: Vec<InterfaceId> = self.interface_fp.keys().copied().collect();
        let mut newly = Vec::new();
        for iface in interfaces {
            if already.contains(&iface) {
                continue;
            }
            if self.implements(program, concrete, iface) {
                newly.push(iface);
            }
        }
        newly
    }

    /// `implementations(I)` (§4.3): the full set of concrete types
    /// known to implement `I`.
    pub fn implementations(&mut self, program: &Program, interface: InterfaceId) -> FxHashSet<ConcreteTypeId> {
        if self.computed.contains(&interface) {
            return self.implementers.get(&interface).cloned().unwrap_or_default();
        }
        let candidates = if self.user_types_index_built {
            self.all_named_types.clone()
        } else {
            self.known_runtime_types.iter().copied().collect()
        };
        self.compute_against(program, interface, &candidates)
    }

    fn compute_against(&mut self, program: &Program, interface: InterfaceId, candidates: &[ConcreteTypeId]) -> FxHashSet<ConcreteTypeId> {
        for &concrete in candidates {
            self.implements(program, concrete, interface);
        }
        self.computed.insert(interface);
        self.implementers.get(&interface).cloned().unwrap_or_default()
    }

    /// §4.5(f): enumerate every named, non-interface type in a
    /// non-stdlib package once, pre-computing `interface -> types` and
    /// `type -> interfaces` against every interface known so far. This
    /// is the comprehensive scan that the interface-to-interface
    /// TypeAssert/ChangeInterface extensions need, since they must
    /// reason about every program type that *could* implement the
    /// target, not only types already proven runtime-accessible.
    pub fn build_user_types_index(&mut self, program: &Program) {
        if self.user_types_index_built {
            return;
        }
        self.all_named_types = program
            .concrete_types
            .iter()
            .filter(|ty| !program.get_package(ty.package).map(|p| p.is_stdlib).unwrap_or(false))
            .map(|ty| ty.id)
            .collect();
        let interfaces: Vec<InterfaceId> = self.interface_fp.keys().copied().collect();
        let candidates = self.all_named_types.clone();
        for iface in interfaces {
            self.compute_against(program, iface, &candidates);
        }
        self.user_types_index_built = true;
    }

    pub fn is_user_types_index_built(&self) -> bool {
        self.user_types_index_built
    }

    /// Implementers discovered so far for `interface`, without
    /// triggering any further computation — used by the invoke-site
    /// cross-product, which must only close edges against types
    /// already proven to implement the interface.
    pub fn known_implementers(&self, interface: InterfaceId) -> Option<&FxHashSet<ConcreteTypeId>> {
        self.implementers.get(&interface)
    }

    /// Every concrete type observed becoming runtime-accessible so far.
    pub fn runtime_types(&self) -> &FxHashSet<ConcreteTypeId> {
        &self.known_runtime_types
    }
}
