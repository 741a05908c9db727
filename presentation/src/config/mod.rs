//! Presentation-level configuration
//!
//! Resolved from the `[output]` config section and the `--quiet` /
//! `--no-color` flags.

/// Console output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while fetching
    pub show_progress: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl ConsoleOptions {
    /// Apply command-line overrides on top of file settings.
    pub fn with_flags(mut self, no_color: bool, quiet: bool) -> Self {
        if no_color {
            self.color = false;
        }
        if quiet {
            self.show_progress = false;
        }
        self
    }

    /// Set the process-wide color override used by `colored`.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
