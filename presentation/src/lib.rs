//! Presentation layer for stackfeed
//!
//! This crate contains the CLI definitions, the console presenter and
//! formatters, the busy spinner, and the interactive browser.

pub mod browse;
pub mod cli;
pub mod config;
pub mod oneshot;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use browse::{Browser, BrowseCommand, spawn_input};
pub use cli::commands::{Cli, Command};
pub use config::ConsoleOptions;
pub use oneshot::run_to_completion;
pub use output::console::ConsoleFormatter;
pub use output::presenter::{BrowseView, ConsolePresenter};
pub use progress::busy::BusyIndicator;
