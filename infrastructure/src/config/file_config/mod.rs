//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Every section is optional and
//! missing keys take their defaults.

mod api;
mod fetch;
mod output;

pub use api::FileApiConfig;
pub use fetch::FileFetchConfig;
pub use output::FileOutputConfig;

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// StackExchange endpoint settings
    pub api: FileApiConfig,
    /// Screen fetch settings
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(self.fetch.validate());
        issues
    }

    /// Render as TOML, for `--show-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:9000/2.3"
site = "serverfault"
key = "abc"
timeout_secs = 10

[fetch]
page_size = 50
hide_busy_on_cancel = true

[output]
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/2.3");
        assert_eq!(config.api.site, "serverfault");
        assert_eq!(config.api.key.as_deref(), Some("abc"));
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.fetch.page_size, 50);
        assert!(config.fetch.hide_busy_on_cancel);
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fetch]
page_size = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fetch.page_size, 5);
        // Defaults should apply
        assert_eq!(config.api, FileApiConfig::default());
        assert!(config.output.color);
        assert!(!config.fetch.hide_busy_on_cancel);
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[api]
site = ""

[fetch]
page_size = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.field == "api.site" && i.is_error()));
        assert!(issues.iter().any(|i| i.field == "fetch.page_size" && !i.is_error()));
    }

    #[test]
    fn test_to_toml_round_trips_defaults() {
        let config = FileConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[fetch]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
