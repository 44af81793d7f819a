//! Reachability engine over the `unreach-ir` data model: a modified
//! Rapid Type Analysis that starts from a program's entry points and
//! closes address-taken/dynamic-call, interface-invoke, and
//! reflection-driven edges to a fixed point, then reports every
//! declared function or method that the fixed point never reached.
//!
//! [`orchestrator::analyze`] is the one call most hosts need; the
//! other modules are exposed for callers who want to drive the
//! pipeline's stages themselves (a language server re-running only
//! entry collection after an edit, for instance).

pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod name;
pub mod orchestrator;
pub mod precision;
pub mod report;
pub mod type_index;

pub use config::AnalysisConfig;
pub use engine::{Engine, EngineOutput};
pub use entry::{collect_entry_points, EntryPoints};
pub use error::{AnalysisError, AnalysisResult};
pub use name::NameCache;
pub use orchestrator::analyze;
pub use report::{Reason, Report, UnusedFunction};
pub use type_index::TypeIndex;
