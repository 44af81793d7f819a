//! Analysis configuration knobs (§6).
//!
//! Exactly the knobs the spec enumerates — no engine behavior reads
//! the environment directly; that is the loader's concern.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The caller has already filtered generated source files out of
    /// the declaration table before handing it to this crate; this
    /// flag only documents that expectation, the engine does not act
    /// on it directly.
    pub skip_generated: bool,
    /// Strict mode (§4.4, §4.6): exported library functions/methods
    /// are not assumed to be externally consumed, so they must prove
    /// reachability like everything else.
    pub strict: bool,
    /// Build tags forwarded to the loader; opaque to this crate.
    pub build_tags: Vec<String>,
    /// Whether test/benchmark/example functions were included when
    /// the program was loaded; informs how the entry collector reads
    /// `_test.go`-equivalent names (§4.4).
    pub include_tests: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            skip_generated: true,
            strict: false,
            build_tags: Vec::new(),
            include_tests: true,
        }
    }
}
