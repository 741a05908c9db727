//! Application configuration
//!
//! [`FetchConfig`] holds the knobs the screen controller needs at runtime.
//! Loading it from files is an infrastructure concern.

mod fetch_config;

pub use fetch_config::{FetchConfig, MAX_PAGE_SIZE};
