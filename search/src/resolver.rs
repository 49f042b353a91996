//! Memoizing resolver: [`LinkFetcher`] + [`LinkCache`] = [`LinkResolver`].

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheStats, LinkCache};
use crate::contract::{LinkFetcher, LinkResolver, LinkSet, ResolutionError};

/// Counters for one resolver's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    /// Underlying fetches issued (successful or not).
    pub fetches: u64,
    /// Fetches that returned a [`ResolutionError`].
    pub failures: u64,
    pub cache: CacheStats,
}

/// Resolver that consults its own [`LinkCache`] before calling the fetcher.
///
/// Create one per search run; the cache lives and dies with it.
#[derive(Debug)]
pub struct CachedResolver<F> {
    fetcher: F,
    cache: LinkCache,
    fetches: AtomicU64,
    failures: AtomicU64,
}

impl<F: LinkFetcher> CachedResolver<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: LinkCache::new(),
            fetches: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Resolve `topic`, surfacing fetch failures instead of degrading them.
    ///
    /// Successful fetches are cached; failures are not, so a later call
    /// retries the fetch.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's [`ResolutionError`] on a cache miss that fails.
    pub fn try_resolve(&self, topic: &str) -> Result<LinkSet, ResolutionError> {
        if let Some(links) = self.cache.get(topic) {
            return Ok(links);
        }
        self.fetches.fetch_add(1, Ordering::Relaxed);
        match self.fetcher.fetch_links(topic) {
            Ok(links) => {
                debug!(topic, links = links.len(), "resolved topic");
                Ok(self.cache.insert(topic, links))
            }
            Err(err) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn cache(&self) -> &LinkCache {
        &self.cache
    }

    #[must_use]
    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            fetches: self.fetches.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            cache: self.cache.stats(),
        }
    }
}

impl<F: LinkFetcher> LinkResolver for CachedResolver<F> {
    fn resolve(&self, topic: &str) -> LinkSet {
        self.try_resolve(topic).unwrap_or_else(|err| {
            warn!(topic, error = %err, "link resolution failed; treating topic as a dead end");
            Arc::new(BTreeSet::new())
        })
    }

    fn is_cached(&self, topic: &str) -> bool {
        self.cache.contains(topic)
    }
}
