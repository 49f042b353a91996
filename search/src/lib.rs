//! WikiRacer Search: best-first topic-path search over a lazily resolved link graph.
//!
//! This crate provides the search layer. It depends only on
//! `wikiracer_kernel`; it does NOT depend on `wikiracer_harness`, and it
//! never touches the network itself. Link discovery goes through the
//! [`LinkFetcher`](contract::LinkFetcher) seam, memoized by
//! [`CachedResolver`](resolver::CachedResolver).
//!
//! # Crate dependency graph
//!
//! ```text
//! wikiracer_kernel  ←  wikiracer_search  ←  wikiracer_harness
//! (path, heap)         (cache, search)       (config, http, cli)
//! ```
//!
//! # Key types
//!
//! - [`LinkResolver`](contract::LinkResolver): memoized topic → outgoing-link lookup
//! - [`LinkCache`](cache::LinkCache): thread-safe memoization store
//! - [`LinkScorer`](scorer::LinkScorer): candidate priority heuristic
//! - [`SearchPolicy`](policy::SearchPolicy): seed priority, prefetch width, dedup mode
//! - [`SearchEngine`](search::SearchEngine): the best-first loop
//! - [`SearchTranscript`](transcript::SearchTranscript): ordered expansion log

#![forbid(unsafe_code)]

pub mod cache;
pub mod contract;
pub mod error;
pub mod policy;
pub mod prefetch;
pub mod resolver;
pub mod scorer;
pub mod search;
pub mod transcript;
