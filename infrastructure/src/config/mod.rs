//! Configuration file loading for stackfeed
//!
//! Sources are merged lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/stackfeed/config.toml`
//! 3. Project root: `./stackfeed.toml`
//! 4. `--config <path>`
//! 5. `STACKFEED_*` environment variables (`__` separates sections)

mod file_config;
mod loader;
mod validation;

pub use file_config::{FileApiConfig, FileConfig, FileFetchConfig, FileOutputConfig};
pub use loader::{ConfigError, ConfigLoader, ConfigSources};
pub use validation::{ConfigIssue, Severity};
