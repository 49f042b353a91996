//! Topic paths: the unit of work the search frontier orders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered chain of topic identifiers, starting at the search's start topic.
///
/// Topic identifiers are opaque, case-sensitive strings. A `Path` is never
/// mutated once it has been handed to the queue; [`Path::extended`] builds a
/// fresh owned path instead, so no two queue entries share storage.
///
/// The only empty `Path` a search produces is the "no route found" result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    topics: Vec<String>,
}

impl Path {
    /// A one-hop path holding only `start`.
    #[must_use]
    pub fn start(start: impl Into<String>) -> Self {
        Self {
            topics: vec![start.into()],
        }
    }

    /// The empty path, used as the unsuccessful search result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A new path equal to `self` followed by `topic`.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn extended(&self, topic: impl Into<String>) -> Self {
        let mut topics = Vec::with_capacity(self.topics.len() + 1);
        topics.extend(self.topics.iter().cloned());
        topics.push(topic.into());
        Self { topics }
    }

    /// Append `topic` in place. Used only on paths the caller owns outright
    /// (e.g. a path just dequeued and about to be returned).
    pub fn push(&mut self, topic: impl Into<String>) {
        self.topics.push(topic.into());
    }

    /// The last topic of the path (the frontier), or `None` if empty.
    #[must_use]
    pub fn frontier(&self) -> Option<&str> {
        self.topics.last().map(String::as_str)
    }

    /// The first topic of the path, or `None` if empty.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.topics.first().map(String::as_str)
    }

    /// Whether `topic` already appears anywhere in the path.
    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Number of topics in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Number of link hops (`len - 1`, saturating at zero).
    #[must_use]
    pub fn hops(&self) -> usize {
        self.topics.len().saturating_sub(1)
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn into_topics(self) -> Vec<String> {
        self.topics
    }
}

impl From<Vec<String>> for Path {
    fn from(topics: Vec<String>) -> Self {
        Self { topics }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders as `[a, b, c]`; the empty path renders as `[]`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, topic) in self.topics.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(topic)?;
        }
        f.write_str("]")
    }
}
