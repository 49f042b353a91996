//! Topic link extraction from page markup.
//!
//! Only anchors of the form `<a href="PREFIX<topic>"` count. A topic is kept
//! unless it is empty or contains a namespace separator (`:`) or a fragment
//! separator (`#`). Absolute URLs, other sites and relative paths outside the
//! prefix never match. Names are returned exactly as they appear in the href.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::RunError;

/// Compiled matcher for one topic-path prefix.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    prefix: String,
    pattern: Regex,
}

impl LinkExtractor {
    /// Build an extractor for anchors pointing at `prefix` (e.g. `/wiki/`).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::LinkPattern`] if the pattern fails to compile.
    pub fn new(prefix: &str) -> Result<Self, RunError> {
        let source = format!(r#"<a\s+href="{}([^"]*)""#, regex::escape(prefix));
        let pattern = Regex::new(&source).map_err(|e| RunError::LinkPattern {
            detail: e.to_string(),
        })?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Every distinct topic linked from `html`, in sorted order.
    #[must_use]
    pub fn extract(&self, html: &str) -> BTreeSet<String> {
        self.pattern
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|topic| is_topic_link(topic))
            .map(str::to_string)
            .collect()
    }
}

/// One-shot extraction for callers that do not keep an extractor around.
///
/// # Errors
///
/// Returns [`RunError::LinkPattern`] if `prefix` yields no usable pattern.
pub fn extract_links(html: &str, prefix: &str) -> Result<BTreeSet<String>, RunError> {
    Ok(LinkExtractor::new(prefix)?.extract(html))
}

/// Whether an href remainder names a plain topic page.
#[must_use]
pub fn is_topic_link(topic: &str) -> bool {
    !topic.is_empty() && !topic.contains(':') && !topic.contains('#')
}
