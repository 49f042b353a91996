//! WikiRacer Kernel: the pure data core of the racer.
//!
//! # API Surface
//!
//! - [`path::Path`] -- an owned, immutable chain of topic identifiers
//! - [`heap::PriorityQueue`] -- a hand-rolled binary max-heap of paths by priority
//! - [`digest::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `path` ← `heap`, `digest` stands alone.
//!
//! The kernel does no I/O and knows nothing about link resolution. Everything
//! that touches the network or the cache lives in `wikiracer_search` and
//! `wikiracer_harness`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod error;
pub mod heap;
pub mod path;
