//! Precision extensions (C6): context-aware refinements layered onto
//! the worklist's instruction dispatch in [`crate::engine`].
//!
//! Extensions (b), (c), (d), (e), (f), and (h) are small enough and
//! tied closely enough to the engine's mutable state (the reachable
//! set, the type index) that they live inline in `engine.rs`'s
//! dispatch match arms rather than as free functions here. The two
//! that stand alone as pure lookups — the known-safe-callee table and
//! the finalizer-callback pattern — get their own modules.

pub mod finalizer;
pub mod known_safe;
