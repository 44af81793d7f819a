//! Per-function directive flags supplied by the doc-comment/directive
//! scanner collaborator (out of scope for this crate; see spec §1).

/// Boolean flags set by an external collaborator that parses doc
/// comments and compiler directives. This crate never inspects source
/// text — it only consumes the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectiveFlags {
    pub has_linkname: bool,
    pub has_runtime_directive: bool,
    pub has_cgo_export: bool,
    pub has_assembly_impl: bool,
    pub called_from_assembly: bool,
}

impl DirectiveFlags {
    /// True when any flag makes the function reachable/exempt
    /// regardless of the RTA fixed point (§4.4 entry points, §4.6
    /// reporting condition (iii)).
    pub fn any_set(&self) -> bool {
        self.has_linkname
            || self.has_runtime_directive
            || self.has_cgo_export
            || self.has_assembly_impl
            || self.called_from_assembly
    }
}
