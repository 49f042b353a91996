//! WikiRacer Harness: runs races against real or fixture link graphs.
//!
//! The harness supplies everything the search core treats as external:
//! configuration, the HTTP page fetcher, link extraction from page markup,
//! in-memory fixture worlds, logging setup and the `wikiracer` binary.
//!
//! The harness does NOT implement search logic; it builds a
//! [`CachedResolver`](wikiracer_search::resolver::CachedResolver) around a
//! fetcher and delegates to [`SearchEngine`](wikiracer_search::search::SearchEngine).

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod runner;
pub mod worlds;
