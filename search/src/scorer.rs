//! Candidate scoring: the heuristic that orders the frontier.

use std::collections::BTreeSet;

/// Priority heuristic for a candidate link.
///
/// Scores are plain integers; higher means "explore sooner".
pub trait LinkScorer: Send + Sync {
    /// Score a candidate from its outgoing links and the destination's links.
    fn score(&self, candidate_links: &BTreeSet<String>, end_links: &BTreeSet<String>) -> i64;
}

/// Default heuristic: the number of outgoing links the candidate shares with
/// the destination. Topical proximity proxy; not admissible, not optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedLinkScorer;

impl LinkScorer for SharedLinkScorer {
    fn score(&self, candidate_links: &BTreeSet<String>, end_links: &BTreeSet<String>) -> i64 {
        let (small, large) = if candidate_links.len() <= end_links.len() {
            (candidate_links, end_links)
        } else {
            (end_links, candidate_links)
        };
        let shared = small.iter().filter(|t| large.contains(*t)).count();
        i64::try_from(shared).unwrap_or(i64::MAX)
    }
}

/// Scores every candidate 0. With insertion-order tie-breaking this turns
/// the best-first loop into a breadth-first one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformScorer;

impl LinkScorer for UniformScorer {
    fn score(&self, _candidate_links: &BTreeSet<String>, _end_links: &BTreeSet<String>) -> i64 {
        0
    }
}
