//! Thread-safe memoization store for resolved link sets.
//!
//! Entries are created on first successful resolution and never invalidated
//! for the lifetime of the cache. A cache is owned by one resolver, which is
//! created per search run, so growth is bounded by a single run.
//!
//! Concurrent misses on the same topic are NOT coalesced: two threads may both
//! fetch it. [`LinkCache::insert`] keeps the first stored set and hands it to
//! every later writer, so racing fetches converge on one shared value.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::contract::LinkSet;

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Topic → resolved outgoing links.
#[derive(Debug, Default)]
pub struct LinkCache {
    entries: RwLock<HashMap<String, LinkSet>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LinkCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `topic`, counting the hit or miss.
    #[must_use]
    pub fn get(&self, topic: &str) -> Option<LinkSet> {
        // Writers store whole values, so a poisoned map is still consistent.
        let found = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Whether `topic` has a cached entry. Does not touch the counters.
    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(topic)
    }

    /// Store `links` for `topic` unless an entry already exists.
    ///
    /// Returns the stored set, which is the earlier one if another writer won.
    pub(crate) fn insert(&self, topic: &str, links: BTreeSet<String>) -> LinkSet {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            entries
                .entry(topic.to_string())
                .or_insert_with(|| Arc::new(links)),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
