//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use wikiracer_kernel::heap::DEFAULT_CAPACITY;

/// Priority given to the one-hop seed path so it is always expanded first.
pub const DEFAULT_START_PRIORITY: i64 = 1000;

/// Default prefetch pool width.
pub const DEFAULT_PREFETCH_WORKERS: usize = 8;

/// Upper bound on the prefetch pool width.
pub const MAX_PREFETCH_WORKERS: usize = 256;

/// Tunables for one search run.
///
/// Carries no expansion or depth budget: a search runs until it
/// reaches the target or exhausts the frontier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Priority of the seed path `[start]`.
    pub start_priority: i64,
    /// Worker threads used to warm the cache for each frontier (0 disables).
    pub prefetch_workers: usize,
    /// Skip any popped path whose frontier was already expanded by another
    /// path. Off by default: only per-path revisits are excluded.
    pub expand_once: bool,
    /// Initial frontier queue capacity.
    pub queue_capacity: usize,
    /// Keep one [`ExpandEvent`](crate::transcript::ExpandEvent) per popped
    /// path, including the full path. Off by default: only the aggregate
    /// counters are kept, so memory stays bounded by the queue and the cache.
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the prefetch width exceeds
    /// [`MAX_PREFETCH_WORKERS`] or the queue capacity is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.prefetch_workers > MAX_PREFETCH_WORKERS {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "prefetch_workers = {} exceeds the maximum of {MAX_PREFETCH_WORKERS}",
                    self.prefetch_workers
                ),
            });
        }
        if self.queue_capacity == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "queue_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            start_priority: DEFAULT_START_PRIORITY,
            prefetch_workers: DEFAULT_PREFETCH_WORKERS,
            expand_once: false,
            queue_capacity: DEFAULT_CAPACITY,
            record_expansions: false,
        }
    }
}
