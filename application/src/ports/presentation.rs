//! Presentation sink port
//!
//! The screen controller pushes busy-state transitions and resolved results
//! into a [`PresentationSink`]. Implementations live in the presentation
//! layer and may render to a terminal, a TUI, or a test recorder.

use stackfeed_domain::Question;

/// Consumer of screen updates.
///
/// Methods are synchronous and infallible: the controller never waits on the
/// sink, and rendering problems are the sink's own business.
pub trait PresentationSink: Send + Sync {
    fn show_busy(&self);

    fn hide_busy(&self);

    fn show_list(&self, questions: &[Question]);

    fn show_detail(&self, body: &str);

    /// A fetch failed; tell the user, e.g. with a server error dialog.
    fn show_fetch_error(&self);
}

/// No-op sink for headless runs
pub struct NoPresentation;

impl PresentationSink for NoPresentation {
    fn show_busy(&self) {}
    fn hide_busy(&self) {}
    fn show_list(&self, _questions: &[Question]) {}
    fn show_detail(&self, _body: &str) {}
    fn show_fetch_error(&self) {}
}
