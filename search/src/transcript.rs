//! `SearchTranscript`: ordered expansion log of one search run.
//!
//! Aggregate counters are always kept. The ordered list of [`ExpandEvent`]s,
//! one per popped path, is kept only when `SearchPolicy::record_expansions`
//! is set, since each event holds a full path. Serialization goes through
//! `serde_json` with struct-declared field order, so identical runs produce
//! identical bytes and identical [`SearchTranscript::digest`] values.

use serde::Serialize;
use wikiracer_kernel::digest::{canonical_hash, ContentHash};

use crate::error::SearchError;

/// Domain prefix for transcript content hashing.
pub const DOMAIN_SEARCH_TRANSCRIPT: &[u8] = b"WIKIRACER::SEARCH_TRANSCRIPT::V1\0";

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminationReason {
    /// A popped frontier linked directly to the target.
    GoalReached { hops: usize },
    /// The queue emptied without reaching the target.
    FrontierExhausted,
}

/// What happened to one popped path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandOutcome {
    /// Children were scored and enqueued (possibly zero of them).
    Expanded,
    /// The frontier links to the target; the search ends here.
    GoalFound,
    /// The frontier was already expanded through another path
    /// (only with `SearchPolicy::expand_once`).
    SkippedAlreadyExpanded,
}

/// A single frontier-pop event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandEvent {
    /// Total order of queue pops.
    pub expansion_order: u64,
    /// The popped path.
    pub path: Vec<String>,
    /// Priority the path was enqueued with.
    pub priority: i64,
    /// Number of outgoing links of the frontier (0 when skipped).
    pub frontier_links: usize,
    /// Child paths enqueued.
    pub enqueued: usize,
    /// Links skipped because they already appear in the path.
    pub cycle_skips: usize,
    pub outcome: ExpandOutcome,
}

/// The complete search record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTranscript {
    pub start: String,
    pub end: String,
    /// Size of the destination's link set used for scoring.
    pub end_link_count: usize,
    /// Per-pop events; empty unless expansion recording was requested.
    pub expansions: Vec<ExpandEvent>,
    /// Paths popped from the queue.
    pub total_expansions: u64,
    pub total_enqueued: u64,
    pub total_cycle_skips: u64,
    pub total_already_expanded: u64,
    /// Largest queue length observed.
    pub frontier_high_water: usize,
    pub termination_reason: TerminationReason,
}

impl SearchTranscript {
    /// Serialize to JSON bytes in declared field order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TranscriptSerialization`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        serde_json::to_vec(self).map_err(|e| SearchError::TranscriptSerialization {
            detail: e.to_string(),
        })
    }

    /// Content hash of the serialized transcript.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TranscriptSerialization`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRANSCRIPT, &bytes))
    }
}
