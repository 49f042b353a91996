//! Search entry point and expansion loop.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use wikiracer_kernel::heap::PriorityQueue;
use wikiracer_kernel::path::Path;

use crate::contract::LinkResolver;
use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::prefetch::{PrefetchReport, Prefetcher};
use crate::scorer::{LinkScorer, SharedLinkScorer};
use crate::transcript::{ExpandEvent, ExpandOutcome, SearchTranscript, TerminationReason};

/// Result of a search execution.
///
/// `path` is `[start, ..., end]` on success and empty when the frontier was
/// exhausted. The transcript counters are complete either way; per-pop events
/// are present only when the policy asked for them.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Path,
    pub transcript: SearchTranscript,
    /// Cache-warming totals for the run. Kept out of the transcript: they
    /// depend on the pool width, the search does not.
    pub prefetch: PrefetchReport,
}

impl SearchResult {
    /// Returns `true` if the search terminated because the target was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.transcript.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }
}

/// Run best-first search from `start` towards `end`.
///
/// 1. Seed the queue with `[start]` at `policy.start_priority`.
/// 2. Resolve `end`'s links once; they are the scoring reference.
/// 3. Pop the best path. If its frontier links to `end`, return it extended
///    by `end`. Otherwise prefetch the frontier's links, then enqueue every
///    link not already on the path, scored by `scorer`.
/// 4. An exhausted queue yields an empty path.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any step if the policy is
/// invalid, and [`SearchError::FrontierInvariant`] if the queue misbehaves.
pub fn search<R, S>(
    start: &str,
    end: &str,
    resolver: &R,
    policy: &SearchPolicy,
    scorer: &S,
) -> Result<SearchResult, SearchError>
where
    R: LinkResolver + ?Sized,
    S: LinkScorer + ?Sized,
{
    policy.validate()?;
    info!(start, end, "starting search");

    let prefetcher = prefetcher_for(policy);
    let mut prefetch_totals = PrefetchReport::default();

    let mut queue = PriorityQueue::with_capacity(policy.queue_capacity);
    queue.enqueue(Path::start(start), policy.start_priority);
    let end_links = resolver.resolve(end);

    let mut expanded: HashSet<String> = HashSet::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut total_expansions: u64 = 0;
    let mut total_enqueued: u64 = 0;
    let mut total_cycle_skips: u64 = 0;
    let mut total_already_expanded: u64 = 0;
    let mut frontier_high_water = queue.len();
    let mut found: Option<Path> = None;

    // Records one event when recording is on; the path is only copied then.
    let mut record = |path: &Path, event: EventCounts| {
        if policy.record_expansions {
            expansions.push(ExpandEvent {
                expansion_order: event.order,
                path: path.topics().to_vec(),
                priority: event.priority,
                frontier_links: event.frontier_links,
                enqueued: event.enqueued,
                cycle_skips: event.cycle_skips,
                outcome: event.outcome,
            });
        }
    };

    while !queue.is_empty() {
        let (mut current, priority) = queue.dequeue_with_priority()?;
        let order = total_expansions;
        total_expansions += 1;
        let Some(frontier) = current.frontier().map(str::to_owned) else {
            continue;
        };
        let mut event = EventCounts {
            order,
            priority,
            frontier_links: 0,
            enqueued: 0,
            cycle_skips: 0,
            outcome: ExpandOutcome::SkippedAlreadyExpanded,
        };

        if policy.expand_once && !expanded.insert(frontier.clone()) {
            total_already_expanded += 1;
            record(&current, event);
            continue;
        }

        let frontier_links = resolver.resolve(&frontier);
        event.frontier_links = frontier_links.len();
        if frontier_links.contains(end) {
            event.outcome = ExpandOutcome::GoalFound;
            record(&current, event);
            current.push(end);
            found = Some(current);
            break;
        }

        if let Some(prefetcher) = &prefetcher {
            let topics = frontier_links.iter().map(String::as_str);
            prefetch_totals.absorb(prefetcher.warm(resolver, topics));
        }

        for link in frontier_links.iter() {
            if current.contains(link) {
                event.cycle_skips += 1;
                continue;
            }
            let score = scorer.score(&resolver.resolve(link), &end_links);
            queue.enqueue(current.extended(link.as_str()), score);
            event.enqueued += 1;
        }
        frontier_high_water = frontier_high_water.max(queue.len());
        total_enqueued += event.enqueued as u64;
        total_cycle_skips += event.cycle_skips as u64;

        debug!(
            expansion_order = order,
            frontier = frontier.as_str(),
            depth = current.hops(),
            priority,
            enqueued = event.enqueued,
            queued = queue.len(),
            "expanded path"
        );
        event.outcome = ExpandOutcome::Expanded;
        record(&current, event);
    }

    let (path, termination_reason) = match found {
        Some(path) => {
            let hops = path.hops();
            (path, TerminationReason::GoalReached { hops })
        }
        None => (Path::empty(), TerminationReason::FrontierExhausted),
    };

    let transcript = SearchTranscript {
        start: start.to_string(),
        end: end.to_string(),
        end_link_count: end_links.len(),
        expansions,
        total_expansions,
        total_enqueued,
        total_cycle_skips,
        total_already_expanded,
        frontier_high_water,
        termination_reason,
    };
    info!(
        expansions = transcript.total_expansions,
        enqueued = transcript.total_enqueued,
        prefetched = prefetch_totals.dispatched,
        prefetch_panics = prefetch_totals.panicked,
        outcome = ?transcript.termination_reason,
        "search finished"
    );

    Ok(SearchResult {
        path,
        transcript,
        prefetch: prefetch_totals,
    })
}

/// Per-pop counters, turned into an [`ExpandEvent`] when recording.
#[derive(Clone, Copy)]
struct EventCounts {
    order: u64,
    priority: i64,
    frontier_links: usize,
    enqueued: usize,
    cycle_skips: usize,
    outcome: ExpandOutcome,
}

/// One pool per search; none when prefetch is disabled or the pool cannot
/// be built (the search is unaffected either way).
fn prefetcher_for(policy: &SearchPolicy) -> Option<Prefetcher> {
    if policy.prefetch_workers == 0 {
        return None;
    }
    Prefetcher::new(policy.prefetch_workers)
        .map_err(|err| warn!(error = %err, "prefetch pool unavailable; continuing without it"))
        .ok()
}

/// A resolver, a scorer and a policy bundled for repeated `find_path` calls.
///
/// The engine owns its resolver, and with it the resolver's cache. Build a
/// fresh engine (or resolver) per race to keep cache growth per-run.
#[derive(Debug)]
pub struct SearchEngine<R, S = SharedLinkScorer> {
    resolver: R,
    scorer: S,
    policy: SearchPolicy,
}

impl<R: LinkResolver> SearchEngine<R> {
    /// Engine with the shared-link heuristic and the default policy.
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            scorer: SharedLinkScorer,
            policy: SearchPolicy::default(),
        }
    }
}

impl<R: LinkResolver, S: LinkScorer> SearchEngine<R, S> {
    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the scoring heuristic.
    #[must_use]
    pub fn with_scorer<T: LinkScorer>(self, scorer: T) -> SearchEngine<R, T> {
        SearchEngine {
            resolver: self.resolver,
            scorer,
            policy: self.policy,
        }
    }

    /// Find a topic chain from `start` to `end`; empty if none was found.
    ///
    /// # Errors
    ///
    /// See [`search`].
    pub fn find_path(&self, start: &str, end: &str) -> Result<Path, SearchError> {
        self.run(start, end).map(|result| result.path)
    }

    /// Like [`SearchEngine::find_path`] but keeps the transcript.
    ///
    /// # Errors
    ///
    /// See [`search`].
    pub fn run(&self, start: &str, end: &str) -> Result<SearchResult, SearchError> {
        search(start, end, &self.resolver, &self.policy, &self.scorer)
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }
}
