//! Fetch failure taxonomy

use thiserror::Error;

/// Why a fetch failed.
///
/// Every variant collapses to [`FetchResult::Failure`](super::result::FetchResult::Failure)
/// at the use-case boundary; the distinction only exists for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Background task fault: {0}")]
    Fault(String),
}

impl FetchFailure {
    /// Stable label for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::Transport(_) => "transport",
            FetchFailure::Status(_) => "status",
            FetchFailure::MalformedResponse(_) => "malformed_response",
            FetchFailure::Fault(_) => "fault",
        }
    }
}

/// The owning scope cancelled the operation before it completed.
///
/// Kept as its own type so it cannot be folded into [`FetchFailure`]: a
/// cancelled fetch means the user left the screen, not that anything broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Operation cancelled")]
pub struct Cancelled;
