//! Console presenter
//!
//! Implements the presentation sink for a terminal: a spinner while a fetch is
//! busy, list and detail text on stdout, errors on stderr.

use crate::config::ConsoleOptions;
use crate::output::console::ConsoleFormatter;
use crate::progress::busy::BusyIndicator;
use stackfeed_application::PresentationSink;
use stackfeed_domain::Question;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sink extension used by the interactive browser.
pub trait BrowseView: PresentationSink {
    /// Informational line that is not screen content (help, hints).
    fn notice(&self, message: &str);

    /// The active screen was torn down; drop transient indicators.
    fn reset(&self);
}

pub struct ConsolePresenter {
    busy: BusyIndicator,
    failures: AtomicUsize,
}

impl ConsolePresenter {
    pub fn new(options: &ConsoleOptions) -> Self {
        let busy = if options.show_progress {
            BusyIndicator::new()
        } else {
            BusyIndicator::disabled()
        };
        Self::with_busy(busy)
    }

    pub fn with_busy(busy: BusyIndicator) -> Self {
        Self {
            busy,
            failures: AtomicUsize::new(0),
        }
    }

    /// Number of fetch errors shown so far.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }
}

impl PresentationSink for ConsolePresenter {
    fn show_busy(&self) {
        self.busy.show("Fetching questions...");
    }

    fn hide_busy(&self) {
        self.busy.hide();
    }

    fn show_list(&self, questions: &[Question]) {
        let text = ConsoleFormatter::format_list(questions);
        self.busy.suspend(|| print!("{}", text));
    }

    fn show_detail(&self, body: &str) {
        let text = ConsoleFormatter::format_detail(body);
        self.busy.suspend(|| print!("{}", text));
    }

    fn show_fetch_error(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        let text = ConsoleFormatter::format_fetch_error();
        self.busy.suspend(|| eprintln!("{}", text));
    }
}

impl BrowseView for ConsolePresenter {
    fn notice(&self, message: &str) {
        let text = ConsoleFormatter::format_notice(message);
        self.busy.suspend(|| println!("{}", text));
    }

    fn reset(&self) {
        self.busy.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_follows_sink_calls() {
        let presenter = ConsolePresenter::with_busy(BusyIndicator::headless());
        presenter.show_busy();
        assert!(presenter.busy.is_visible());
        presenter.show_list(&[]);
        presenter.hide_busy();
        assert!(!presenter.busy.is_visible());
    }

    #[test]
    fn test_reset_clears_spinner() {
        let presenter = ConsolePresenter::with_busy(BusyIndicator::headless());
        presenter.show_busy();
        presenter.reset();
        assert!(!presenter.busy.is_visible());
    }

    #[test]
    fn test_fetch_errors_are_counted() {
        let presenter = ConsolePresenter::with_busy(BusyIndicator::headless());
        assert_eq!(presenter.failures(), 0);
        presenter.show_fetch_error();
        presenter.show_fetch_error();
        assert_eq!(presenter.failures(), 2);
    }

    #[test]
    fn test_without_progress_never_spins() {
        let presenter = ConsolePresenter::new(&ConsoleOptions {
            color: false,
            show_progress: false,
        });
        presenter.show_busy();
        assert!(!presenter.busy.is_visible());
    }
}
