//! Shared fixtures for the lock tests and the `race_fixture` binary.

use wikiracer_harness::runner::RaceReport;
use wikiracer_harness::worlds::fixtures::{lattice, lattice_node, rome_mini};
use wikiracer_harness::worlds::StaticGraph;
use wikiracer_search::error::SearchError;

/// A named graph together with the race it is meant for.
pub struct FixtureRace {
    pub graph: StaticGraph,
    pub start: String,
    pub end: String,
}

/// Look up a fixture race by name: `rome_mini` or `lattice_<width>x<depth>`.
#[must_use]
pub fn fixture_race(name: &str) -> Option<FixtureRace> {
    if name == "rome_mini" {
        return Some(FixtureRace {
            graph: rome_mini(),
            start: "Rome".into(),
            end: "Physics".into(),
        });
    }
    let (width, depth) = name.strip_prefix("lattice_")?.split_once('x')?;
    let (width, depth) = (width.parse().ok()?, depth.parse().ok()?);
    Some(FixtureRace {
        graph: lattice(width, depth),
        start: "Start".into(),
        end: "Goal".into(),
    })
}

/// Deterministic `key=value` summary of a race, one entry per line.
///
/// Resolver counters are left out: they describe the cache, not the search.
///
/// # Errors
///
/// Returns [`SearchError::TranscriptSerialization`] if the transcript cannot
/// be hashed.
pub fn report_lines(report: &RaceReport) -> Result<Vec<String>, SearchError> {
    let transcript = &report.transcript;
    let termination = serde_json::to_value(transcript.termination_reason)
        .ok()
        .and_then(|v| v["kind"].as_str().map(str::to_string))
        .unwrap_or_default();
    Ok(vec![
        format!("path={}", report.path),
        format!("hops={}", report.path.hops()),
        format!("termination_reason={termination}"),
        format!("total_expansions={}", transcript.total_expansions),
        format!("total_enqueued={}", transcript.total_enqueued),
        format!("frontier_high_water={}", transcript.frontier_high_water),
        format!("transcript_digest={}", transcript.digest()?),
    ])
}

/// First node of the last lattice layer, handy for asserting routes.
#[must_use]
pub fn last_layer_node(depth: usize) -> String {
    lattice_node(depth.max(1) - 1, 0)
}
