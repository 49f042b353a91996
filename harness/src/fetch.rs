//! HTTP page fetcher.
//!
//! One blocking GET per topic. The body is scanned with a [`LinkExtractor`]
//! built for the configured topic prefix. Topic names go into the URL
//! verbatim: they come from hrefs, so they are already in URL form.

use std::collections::BTreeSet;

use reqwest::blocking::Client;
use tracing::trace;
use wikiracer_search::contract::{LinkFetcher, ResolutionError};

use crate::config::HttpConfig;
use crate::error::RunError;
use crate::extract::LinkExtractor;

/// [`LinkFetcher`] backed by a shared blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    extractor: LinkExtractor,
}

impl HttpFetcher {
    /// # Errors
    ///
    /// Returns [`RunError::HttpClient`] if the client cannot be built, or
    /// [`RunError::LinkPattern`] if the topic prefix yields no usable pattern.
    pub fn new(config: &HttpConfig) -> Result<Self, RunError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| RunError::HttpClient {
                detail: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            extractor: LinkExtractor::new(&config.topic_prefix)?,
        })
    }

    /// Absolute URL of `topic`'s page.
    #[must_use]
    pub fn topic_url(&self, topic: &str) -> String {
        format!("{}{}{}", self.base_url, self.extractor.prefix(), topic)
    }

    #[must_use]
    pub fn extractor(&self) -> &LinkExtractor {
        &self.extractor
    }
}

impl LinkFetcher for HttpFetcher {
    fn fetch_links(&self, topic: &str) -> Result<BTreeSet<String>, ResolutionError> {
        let url = self.topic_url(topic);
        trace!(topic, url = %url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ResolutionError::Fetch {
                topic: topic.to_string(),
                detail: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolutionError::Status {
                topic: topic.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(|e| ResolutionError::Fetch {
            topic: topic.to_string(),
            detail: e.to_string(),
        })?;
        Ok(self.extractor.extract(&body))
    }
}
