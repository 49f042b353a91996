//! One race: fresh resolver, one search, a report.

use serde::Serialize;
use tracing::info;
use wikiracer_kernel::path::Path;
use wikiracer_search::contract::LinkFetcher;
use wikiracer_search::policy::SearchPolicy;
use wikiracer_search::prefetch::PrefetchReport;
use wikiracer_search::resolver::{CachedResolver, ResolverStats};
use wikiracer_search::search::SearchEngine;
use wikiracer_search::transcript::SearchTranscript;

use crate::config::RaceConfig;
use crate::error::RunError;
use crate::fetch::HttpFetcher;

/// Outcome of a race.
#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    /// `[start, ..., end]`, or empty when no route was found.
    pub path: Path,
    pub transcript: SearchTranscript,
    /// Fetch and cache counters of the race's resolver.
    pub resolver: ResolverStats,
    /// Cache-warming totals; zero when prefetch is disabled.
    pub prefetch: PrefetchReport,
}

/// Race from `start` to `end` over `fetcher` with a cache scoped to this call.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid or the frontier
/// queue breaks its ordering.
pub fn race<F: LinkFetcher>(
    fetcher: F,
    policy: &SearchPolicy,
    start: &str,
    end: &str,
) -> Result<RaceReport, RunError> {
    let engine = SearchEngine::new(CachedResolver::new(fetcher)).with_policy(policy.clone());
    let result = engine.run(start, end)?;
    let stats = engine.resolver().stats();

    info!(
        start,
        end,
        hops = result.path.hops(),
        expansions = result.transcript.total_expansions,
        fetches = stats.fetches,
        fetch_failures = stats.failures,
        cache_hits = stats.cache.hits,
        prefetch_panics = result.prefetch.panicked,
        "race finished"
    );

    Ok(RaceReport {
        path: result.path,
        transcript: result.transcript,
        resolver: stats,
        prefetch: result.prefetch,
    })
}

/// Race against the live site described by `config.http`.
///
/// # Errors
///
/// Returns [`RunError`] if the HTTP client cannot be built or the search
/// fails.
pub fn race_online(config: &RaceConfig, start: &str, end: &str) -> Result<RaceReport, RunError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    race(fetcher, &config.search, start, end)
}
