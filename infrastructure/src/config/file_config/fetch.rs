//! Fetch configuration from TOML (`[fetch]` section)

use crate::config::validation::ConfigIssue;
use serde::{Deserialize, Serialize};
use stackfeed_application::config::{FetchConfig, MAX_PAGE_SIZE};

/// Raw fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Questions per list refresh (1..=100)
    pub page_size: u32,
    /// Hide the busy indicator when a screen is torn down mid-fetch
    pub hide_busy_on_cancel: bool,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        let config = FetchConfig::default();
        Self {
            page_size: config.page_size,
            hide_busy_on_cancel: config.hide_busy_on_cancel,
        }
    }
}

impl FileFetchConfig {
    /// Convert to the application's `FetchConfig`, clamping the page size.
    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_page_size(self.page_size)
            .with_hide_busy_on_cancel(self.hide_busy_on_cancel)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if (1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Vec::new();
        }
        let clamped = self.page_size.clamp(1, MAX_PAGE_SIZE);
        vec![ConfigIssue::warning(
            "fetch.page_size",
            format!(
                "{} is outside 1..={}, using {}",
                self.page_size, MAX_PAGE_SIZE, clamped
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::Severity;

    #[test]
    fn test_defaults_match_application() {
        let config = FileFetchConfig::default();
        assert_eq!(config.to_fetch_config(), FetchConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_oversized_page_is_clamped_with_warning() {
        let config = FileFetchConfig {
            page_size: 500,
            hide_busy_on_cancel: true,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("using 100"));

        let fetch = config.to_fetch_config();
        assert_eq!(fetch.page_size, 100);
        assert!(fetch.hide_busy_on_cancel);
    }

    #[test]
    fn test_zero_page_size() {
        let config = FileFetchConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
        assert_eq!(config.to_fetch_config().page_size, 1);
    }
}
