//! API configuration from TOML (`[api]` section)

use crate::config::validation::ConfigIssue;
use crate::http::StackExchangeConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw StackExchange API configuration from TOML
///
/// ```toml
/// [api]
/// base_url = "https://api.stackexchange.com/2.3"
/// site = "stackoverflow"
/// key = "U4DMV*8nvpm3EOpvf69Rxw(("
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub base_url: String,
    /// StackExchange site parameter (`stackoverflow`, `superuser`, ...)
    pub site: String,
    /// Optional application key
    pub key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Overrides the default `stackfeed/<version>` user agent
    pub user_agent: Option<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        let transport = StackExchangeConfig::default();
        Self {
            base_url: transport.base_url,
            site: transport.site,
            key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl FileApiConfig {
    /// Convert to the transport's connection settings.
    ///
    /// Values rejected by [`validate`](Self::validate) as warnings fall back
    /// to their defaults here.
    pub fn to_transport_config(&self) -> StackExchangeConfig {
        let defaults = StackExchangeConfig::default();
        let timeout = if self.timeout_secs == 0 {
            defaults.timeout
        } else {
            Duration::from_secs(self.timeout_secs)
        };

        StackExchangeConfig {
            base_url: self.base_url.trim().to_string(),
            site: self.site.trim().to_string(),
            key: self
                .key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            timeout,
            user_agent: self
                .user_agent
                .clone()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error("api.base_url", "must not be empty"));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "api.base_url",
                format!("'{}' is not an absolute http(s) URL", base_url),
            ));
        }

        if self.site.trim().is_empty() {
            issues.push(ConfigIssue::error("api.site", "must not be empty"));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "api.timeout_secs",
                format!("cannot be 0, using {}", DEFAULT_TIMEOUT_SECS),
            ));
        }

        if matches!(self.key.as_deref(), Some(k) if k.trim().is_empty()) {
            issues.push(ConfigIssue::warning("api.key", "is empty and will be ignored"));
        }

        issues
    }
}
