//! The type-system-level "function record" (§3).
//!
//! Distinct from [`crate::function::Function`]: a `Declaration` exists
//! for every declared function or method, including uninstantiated
//! generic templates that have no SSA body at all. The orchestrator
//! owns this table exclusively; the engine only ever grows the
//! reachable set (a parallel structure) and never mutates a
//! `Declaration` directly (§3 Ownership).

use crate::directive::DirectiveFlags;
use crate::ids::{ConcreteTypeId, DeclId, FuncId, PackageId};
use crate::position::Position;
use std::cell::Cell;

/// Whether a declaration is a free function or a method, and on what
/// receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Function,
    Method {
        receiver: ConcreteTypeId,
        by_pointer: bool,
    },
}

/// A declared function or method, at the type-system level.
///
/// The `used` flag uses interior mutability: the engine is
/// single-threaded and the orchestrator is the sole owner of the
/// table, so a `Cell` suffices in place of sharing/locking machinery
/// (§9 Design Notes).
#[derive(Debug)]
pub struct Declaration {
    pub id: DeclId,
    pub kind: DeclKind,
    pub name: String,
    pub package: PackageId,
    /// Generic type parameter names; empty for non-generic
    /// declarations. A non-empty list together with `ssa` pointing at
    /// itself (i.e. `ssa.is_none()` for a pure template) identifies an
    /// uninstantiated template (§4.4 filtering).
    pub type_params: Vec<String>,
    /// The SSA function implementing this declaration, if one exists.
    /// `None` for uninstantiated generic templates, which are recorded
    /// into the exported-template-objects list instead (§4.4).
    pub ssa: Option<FuncId>,
    pub exported: bool,
    pub in_internal_package: bool,
    pub in_main_package: bool,
    pub flags: DirectiveFlags,
    pub is_suppressed: bool,
    pub position: Position,
    used: Cell<bool>,
}

impl Declaration {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DeclId,
        kind: DeclKind,
        name: impl Into<String>,
        package: PackageId,
        position: Position,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            package,
            type_params: Vec::new(),
            ssa: None,
            exported: false,
            in_internal_package: false,
            in_main_package: false,
            flags: DirectiveFlags::default(),
            is_suppressed: false,
            position,
            used: Cell::new(false),
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// An uninstantiated generic template: has type parameters and no
    /// SSA body of its own (§4.4 filtering, I6).
    pub fn is_uncallable_template(&self) -> bool {
        self.is_generic() && self.ssa.is_none()
    }

    /// Whether this declaration belongs to the main package (§3, §4.4,
    /// §4.6). A loader that tracks main-package membership at the
    /// declaration level (e.g. a declaration merged in from a build
    /// variant whose own `Package` record doesn't carry the name
    /// `"main"`) sets `in_main_package` directly; otherwise this falls
    /// back to the owning `Package`'s name.
    pub fn is_in_main_package(&self, package: &crate::package::Package) -> bool {
        self.in_main_package || package.is_main_package()
    }

    pub fn is_used(&self) -> bool {
        self.used.get()
    }

    /// The only mutation the engine's output performs on a
    /// `Declaration` (§6 Outputs): flip its used bit. Monotonic by
    /// construction — never cleared before teardown (I1).
    pub fn mark_used(&self) {
        self.used.set(true);
    }
}
