//! Error taxonomy (§7).
//!
//! Everything that can stop the analysis before it starts. Once the
//! fixed point begins, it cannot fail (§7 "Inside-engine: unreachable,
//! engine is pure and total by construction") — per-symbol surprises
//! are logged and skipped, never surfaced as an `Err`.

use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The package set itself cannot support analysis: empty, all
    /// packages nil, or the SSA program failed to construct.
    #[error("analysis input is invalid: {reason}")]
    InputInvalid { reason: String },

    /// One or more packages loaded with errors but were included
    /// anyway. Sound behavior is to refuse rather than risk false
    /// positives from partial type information.
    #[error("{} package(s) loaded with errors: {}", .packages.len(), .packages.join(", "))]
    InputDegraded { packages: Vec<String> },
}
