//! `StaticGraph`: a fixed adjacency map behind the fetcher contract.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use wikiracer_search::contract::{LinkFetcher, ResolutionError};

/// Topic graph known up front.
///
/// Topics without a page resolve to [`ResolutionError::UnknownTopic`]; topics
/// marked failing resolve to [`ResolutionError::Fetch`]. Either way the
/// search sees a dead end.
#[derive(Debug, Default)]
pub struct StaticGraph {
    pages: BTreeMap<String, BTreeSet<String>>,
    failing: BTreeSet<String>,
    calls: Mutex<BTreeMap<String, u32>>,
}

impl StaticGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) `topic`'s outgoing links.
    #[must_use]
    pub fn with_page<I, S>(mut self, topic: &str, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages
            .insert(topic.to_string(), links.into_iter().map(Into::into).collect());
        self
    }

    /// Make every fetch of `topic` fail with a transport error.
    #[must_use]
    pub fn with_failing(mut self, topic: &str) -> Self {
        self.failing.insert(topic.to_string());
        self
    }

    /// Build from `(from, to)` pairs. Every `from` gets a page; a `to` that
    /// never appears as a `from` stays unknown.
    #[must_use]
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph
                .pages
                .entry(from.to_string())
                .or_default()
                .insert(to.to_string());
        }
        graph
    }

    /// Topics with a page, in sorted order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Fetches served for `topic` so far.
    #[must_use]
    pub fn calls(&self, topic: &str) -> u32 {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(topic)
            .copied()
            .unwrap_or(0)
    }

    /// Fetches served across all topics.
    #[must_use]
    pub fn total_calls(&self) -> u32 {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .values()
            .sum()
    }

    fn record(&self, topic: &str) {
        let mut calls = self
            .calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *calls.entry(topic.to_string()).or_insert(0) += 1;
    }
}

impl LinkFetcher for StaticGraph {
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError> {
        self.record(topic);
        if self.failing.contains(topic) {
            return Err(ResolutionError::Fetch {
                topic: topic.to_string(),
                detail: "simulated transport failure".into(),
            });
        }
        self.pages
            .get(topic)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownTopic {
                topic: topic.to_string(),
            })
    }
}
