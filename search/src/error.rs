//! Typed search errors.
//!
//! `SearchError` covers pre-flight policy failures and broken frontier
//! invariants. An unreachable target is NOT an error: it is a normal
//! [`crate::transcript::TerminationReason::FrontierExhausted`] outcome with an
//! empty path.

use thiserror::Error;
use wikiracer_kernel::error::QueueError;

/// Typed failure of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The supplied policy failed validation; no search steps were taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The frontier queue reported an error the loop had ruled out.
    #[error("frontier invariant violated: {0}")]
    FrontierInvariant(#[from] QueueError),

    /// The transcript could not be serialized for digesting.
    #[error("transcript serialization failed: {detail}")]
    TranscriptSerialization { detail: String },
}
