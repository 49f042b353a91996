//! In-memory link graphs for tests, benchmarks and offline races.
//!
//! Every world implements [`LinkFetcher`](wikiracer_search::contract::LinkFetcher)
//! and counts the fetches it serves, so callers can assert memoization.

pub mod fixtures;
pub mod html_site;
pub mod static_graph;

pub use html_site::HtmlSite;
pub use static_graph::StaticGraph;
