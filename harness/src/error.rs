//! Harness errors.

use thiserror::Error;
use wikiracer_search::error::SearchError;

/// Failure to set up or complete a race.
///
/// Per-topic fetch failures never show up here: the resolver degrades them to
/// dead ends inside the search.
#[derive(Debug, Error)]
pub enum RunError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {detail}")]
    Config { detail: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {detail}")]
    HttpClient { detail: String },

    /// The link pattern for the configured topic prefix did not compile.
    #[error("invalid link pattern: {detail}")]
    LinkPattern { detail: String },

    /// The search itself failed (invalid policy or broken frontier invariant).
    #[error(transparent)]
    Search(#[from] SearchError),
}
