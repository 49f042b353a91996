//! Best-effort concurrent cache warming for a frontier's neighbourhood.
//!
//! The search loop hands every link of the frontier it just expanded to a
//! [`Prefetcher`]. A rayon pool, built once per search and sized by
//! `SearchPolicy::prefetch_workers`, resolves each uncached topic and
//! discards the result; the only effect is a warmer
//! [`LinkCache`](crate::cache::LinkCache) when the loop scores the same links
//! synchronously right after.
//!
//! Nothing here can change which path the loop expands next: queue state is
//! touched only by the loop thread. Resolver panics are contained and logged.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use crate::contract::LinkResolver;

/// What one or more prefetch batches did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrefetchReport {
    /// Topics handed to the prefetcher.
    pub requested: usize,
    /// Topics skipped because the resolver already had them cached.
    pub already_cached: usize,
    /// Topics resolved on the pool.
    pub dispatched: usize,
    /// Resolutions that panicked.
    pub panicked: usize,
}

impl PrefetchReport {
    /// Add `other`'s counts to this one.
    pub fn absorb(&mut self, other: PrefetchReport) {
        self.requested += other.requested;
        self.already_cached += other.already_cached;
        self.dispatched += other.dispatched;
        self.panicked += other.panicked;
    }
}

/// A fixed-width worker pool for cache warming.
#[derive(Debug)]
pub struct Prefetcher {
    pool: ThreadPool,
}

impl Prefetcher {
    /// Build a pool of `workers` threads (at least one).
    ///
    /// # Errors
    ///
    /// Returns the rayon error if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|index| format!("wikiracer-prefetch-{index}"))
            .build()?;
        Ok(Self { pool })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Resolve every uncached topic in `topics` on the pool.
    ///
    /// Blocks until the batch is drained.
    pub fn warm<'a, R, I>(&self, resolver: &R, topics: I) -> PrefetchReport
    where
        R: LinkResolver + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = PrefetchReport::default();
        let mut pending: Vec<&str> = Vec::new();
        for topic in topics {
            report.requested += 1;
            if resolver.is_cached(topic) {
                report.already_cached += 1;
            } else {
                pending.push(topic);
            }
        }
        if pending.is_empty() {
            return report;
        }
        report.dispatched = pending.len();

        report.panicked = self.pool.install(|| {
            pending
                .par_iter()
                .map(|&topic| {
                    let outcome = catch_unwind(AssertUnwindSafe(|| resolver.resolve(topic)));
                    if outcome.is_err() {
                        warn!(topic, "prefetch resolution panicked; continuing");
                        1_usize
                    } else {
                        0
                    }
                })
                .sum()
        });

        debug!(
            requested = report.requested,
            dispatched = report.dispatched,
            already_cached = report.already_cached,
            "prefetch batch drained"
        );
        report
    }
}
