//! Infrastructure layer for stackfeed
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, ConfigSources, FileApiConfig, FileConfig,
    FileFetchConfig, FileOutputConfig, Severity,
};
pub use http::{StackExchangeConfig, StackExchangeTransport};
