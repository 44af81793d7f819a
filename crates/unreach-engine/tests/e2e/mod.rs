//! End-to-end scenarios built directly on `unreach_ir::ProgramBuilder`,
//! one per documented behavior: the six literal-input sketches plus
//! the boundary behaviors and the properties recovered from ecosystem
//! convention for a dead-code tool of this kind.

mod visibility;
mod interfaces;
mod finalizer;
mod boundaries;

pub use harness::*;
