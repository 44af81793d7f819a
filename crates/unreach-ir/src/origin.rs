//! The generic-instantiation/template relationship (§3, §4.5(h), I6).

use crate::ids::FuncId;

/// Where a function sits relative to generic instantiation.
///
/// The distilled spec models this as a single "origin" pointer that is
/// nil for non-generics, points to itself for templates, and points to
/// the template for instantiations. Spelling the three states out as
/// a tagged enum avoids ever comparing a `FuncId` against "its own id"
/// to detect the template case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Not a generic function at all.
    NotGeneric,
    /// The uninstantiated template itself.
    Template,
    /// An instantiation, carrying the template's id.
    Instantiated(FuncId),
}

impl Origin {
    /// The template to mark reachable via origin-linking, if any.
    pub fn template(&self) -> Option<FuncId> {
        match self {
            Origin::Instantiated(template) => Some(*template),
            _ => None,
        }
    }
}
