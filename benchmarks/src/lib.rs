//! Shared helpers for wikiracer benchmark suites.

use wikiracer_harness::worlds::fixtures::lattice;
use wikiracer_harness::worlds::StaticGraph;
use wikiracer_search::contract::LinkResolver;
use wikiracer_search::policy::SearchPolicy;
use wikiracer_search::resolver::CachedResolver;
use wikiracer_search::search::{search, SearchResult};
use wikiracer_search::scorer::SharedLinkScorer;

/// A lattice race with a fixed shape and policy.
pub struct Regime {
    pub name: &'static str,
    pub width: usize,
    pub depth: usize,
    /// `Goal` for a reachable race, anything else for an exhaustive one.
    pub end: &'static str,
    pub policy: SearchPolicy,
}

impl Regime {
    #[must_use]
    pub fn graph(&self) -> StaticGraph {
        lattice(self.width, self.depth)
    }
}

fn no_prefetch() -> SearchPolicy {
    SearchPolicy {
        prefetch_workers: 0,
        ..SearchPolicy::default()
    }
}

/// Regimes timed by the macro suite.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "wide_shallow",
            width: 32,
            depth: 2,
            end: "Goal",
            policy: no_prefetch(),
        },
        Regime {
            name: "narrow_deep",
            width: 3,
            depth: 6,
            end: "Goal",
            policy: no_prefetch(),
        },
        Regime {
            name: "frontier_pressure",
            width: 6,
            depth: 4,
            end: "Goal",
            policy: SearchPolicy {
                queue_capacity: 1,
                ..no_prefetch()
            },
        },
        Regime {
            name: "exhaustive_dead_end",
            width: 4,
            depth: 4,
            end: "Nowhere",
            policy: no_prefetch(),
        },
        Regime {
            name: "expand_once",
            width: 6,
            depth: 4,
            end: "Goal",
            policy: SearchPolicy {
                expand_once: true,
                ..no_prefetch()
            },
        },
    ]
}

/// A resolver whose cache already holds every page of `graph`, so a search
/// over it times the loop alone.
#[must_use]
pub fn warm_resolver(graph: StaticGraph) -> CachedResolver<StaticGraph> {
    let topics: Vec<String> = graph.topics().map(str::to_string).collect();
    let resolver = CachedResolver::new(graph);
    for topic in &topics {
        resolver.resolve(topic);
    }
    resolver
}

/// Run one search with the default heuristic.
///
/// # Panics
///
/// Panics if the regime's policy is invalid. Benchmark setup failures are fatal.
pub fn run_search_only<R: LinkResolver>(resolver: &R, regime: &Regime) -> SearchResult {
    search("Start", regime.end, resolver, &regime.policy, &SharedLinkScorer).expect("search")
}
