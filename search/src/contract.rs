//! Link resolution contract: the boundary between the search and the network.
//!
//! Two traits split the collaborator in half:
//!
//! - [`LinkFetcher`] performs one uncached fetch + parse and may fail.
//! - [`LinkResolver`] is what the search loop consumes: memoized, infallible,
//!   and safe to call from many threads at once.
//!
//! # Contract
//!
//! - `resolve` must return the same set for the same topic once a successful
//!   resolution has been cached, without fetching again.
//! - Failed fetches are not cached and surface as an empty set (a dead end),
//!   never as a panic or an aborted search.
//! - Link sets contain only same-site topic names: no namespaced (`:`) or
//!   fragment (`#`) links.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

/// A resolved, shared, ordered set of outgoing topic identifiers.
pub type LinkSet = Arc<BTreeSet<String>>;

/// Failure to fetch or parse a topic's page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Transport failure (connect, TLS, timeout, body read).
    #[error("fetch failed for topic {topic:?}: {detail}")]
    Fetch { topic: String, detail: String },

    /// The server answered with a non-success status.
    #[error("unexpected status {status} for topic {topic:?}")]
    Status { topic: String, status: u16 },

    /// The page could not be turned into a link set.
    #[error("malformed page for topic {topic:?}: {detail}")]
    Malformed { topic: String, detail: String },

    /// The topic does not exist in the source graph.
    #[error("unknown topic {topic:?}")]
    UnknownTopic { topic: String },
}

impl ResolutionError {
    /// The topic whose resolution failed.
    #[must_use]
    pub fn topic(&self) -> &str {
        match self {
            Self::Fetch { topic, .. }
            | Self::Status { topic, .. }
            | Self::Malformed { topic, .. }
            | Self::UnknownTopic { topic } => topic,
        }
    }
}

/// One uncached fetch of a topic's outgoing links.
///
/// Implementations must be shareable across prefetch worker threads.
pub trait LinkFetcher: Send + Sync {
    /// Fetch and parse `topic`, returning its outgoing topic links.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] when the page cannot be fetched or parsed.
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError>;
}

impl<F: LinkFetcher + ?Sized> LinkFetcher for &F {
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError> {
        (**self).fetch_links(topic)
    }
}

impl<F: LinkFetcher + ?Sized> LinkFetcher for Arc<F> {
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError> {
        (**self).fetch_links(topic)
    }
}

/// Memoized, infallible link lookup consumed by the search loop.
pub trait LinkResolver: Send + Sync {
    /// Outgoing links of `topic`; empty if resolution failed.
    fn resolve(&self, topic: &str) -> LinkSet;

    /// Whether `topic` is already resolved and cached.
    ///
    /// Used only to skip redundant prefetch work; `false` is always a safe answer.
    fn is_cached(&self, _topic: &str) -> bool {
        false
    }
}

impl<R: LinkResolver + ?Sized> LinkResolver for &R {
    fn resolve(&self, topic: &str) -> LinkSet {
        (**self).resolve(topic)
    }

    fn is_cached(&self, topic: &str) -> bool {
        (**self).is_cached(topic)
    }
}

impl<R: LinkResolver + ?Sized> LinkResolver for Arc<R> {
    fn resolve(&self, topic: &str) -> LinkSet {
        (**self).resolve(topic)
    }

    fn is_cached(&self, topic: &str) -> bool {
        (**self).is_cached(topic)
    }
}
