//! Race configuration.
//!
//! Layers, lowest precedence first:
//!
//! 1. [`RaceConfig::default()`]
//! 2. a TOML file: the explicit path, else `$WIKIRACER_CONFIG`, else
//!    `wikiracer.toml` in the working directory (a missing file is skipped)
//! 3. `WIKIRACER_*` environment variables, with `__` separating sections
//!    (e.g. `WIKIRACER_SEARCH__PREFETCH_WORKERS=4`)
//!
//! ```toml
//! [http]
//! base_url = "https://en.wikipedia.org"
//! timeout_secs = 10
//!
//! [search]
//! prefetch_workers = 16
//! expand_once = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use wikiracer_search::policy::SearchPolicy;

use crate::error::RunError;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wikiracer.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WIKIRACER_CONFIG";

/// Prefix of per-key environment overrides.
pub const ENV_PREFIX: &str = "WIKIRACER_";

/// Where and how pages are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Scheme and host of the wiki, without a trailing slash.
    pub base_url: String,
    /// Path prefix shared by every topic page; also the link filter.
    pub topic_prefix: String,
    pub user_agent: String,
    /// Per-request timeout. 0 disables the timeout.
    pub timeout_secs: u64,
}

impl HttpConfig {
    /// The request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org".into(),
            topic_prefix: "/wiki/".into(),
            user_agent: concat!("wikiracer/", env!("CARGO_PKG_VERSION")).into(),
            timeout_secs: 30,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    pub http: HttpConfig,
    pub search: SearchPolicy,
}

impl RaceConfig {
    /// Load and validate the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] if a layer fails to parse or the merged
    /// result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, RunError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config: Self = Self::figment(&path)
            .extract()
            .map_err(|e| RunError::Config {
                detail: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// The provider stack without extraction, for callers that want to add
    /// their own layers.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] for an unusable URL or topic prefix, or an
    /// invalid search policy.
    pub fn validate(&self) -> Result<(), RunError> {
        let http = &self.http;
        if !(http.base_url.starts_with("http://") || http.base_url.starts_with("https://")) {
            return Err(RunError::Config {
                detail: format!("http.base_url must be an http(s) URL, got {:?}", http.base_url),
            });
        }
        if http.base_url.ends_with('/') {
            return Err(RunError::Config {
                detail: "http.base_url must not end with '/'".into(),
            });
        }
        if !http.topic_prefix.starts_with('/') || http.topic_prefix.len() < 2 {
            return Err(RunError::Config {
                detail: format!(
                    "http.topic_prefix must be a non-root path starting with '/', got {:?}",
                    http.topic_prefix
                ),
            });
        }
        self.search.validate().map_err(|e| RunError::Config {
            detail: e.to_string(),
        })
    }
}
