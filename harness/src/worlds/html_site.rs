//! `HtmlSite`: raw page bodies parsed exactly like live responses.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU32, Ordering};

use wikiracer_search::contract::{LinkFetcher, ResolutionError};

use crate::error::RunError;
use crate::extract::LinkExtractor;

/// Offline site: topic to page bytes, scanned with a [`LinkExtractor`].
#[derive(Debug)]
pub struct HtmlSite {
    extractor: LinkExtractor,
    pages: BTreeMap<String, Vec<u8>>,
    fetches: AtomicU32,
}

impl HtmlSite {
    /// # Errors
    ///
    /// Returns [`RunError::LinkPattern`] if `topic_prefix` yields no usable
    /// pattern.
    pub fn new(topic_prefix: &str) -> Result<Self, RunError> {
        Ok(Self {
            extractor: LinkExtractor::new(topic_prefix)?,
            pages: BTreeMap::new(),
            fetches: AtomicU32::new(0),
        })
    }

    #[must_use]
    pub fn with_page(mut self, topic: &str, html: &str) -> Self {
        self.pages.insert(topic.to_string(), html.as_bytes().to_vec());
        self
    }

    /// Store a body as raw bytes, e.g. one that is not valid UTF-8.
    #[must_use]
    pub fn with_raw_page(mut self, topic: &str, body: Vec<u8>) -> Self {
        self.pages.insert(topic.to_string(), body);
        self
    }

    #[must_use]
    pub fn fetches(&self) -> u32 {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl LinkFetcher for HtmlSite {
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let body = self
            .pages
            .get(topic)
            .ok_or_else(|| ResolutionError::Status {
                topic: topic.to_string(),
                status: 404,
            })?;
        let html = std::str::from_utf8(body).map_err(|e| ResolutionError::Malformed {
            topic: topic.to_string(),
            detail: e.to_string(),
        })?;
        Ok(self.extractor.extract(html))
    }
}
