//! Application layer for stackfeed
//!
//! This crate contains the fetch use case, the lifecycle scope that owns
//! in-flight work for a screen, the screen controller that ties both to a
//! presentation sink, and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod config;
pub mod lifecycle;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::FetchConfig;
pub use lifecycle::{LifecycleScope, Settled, WorkHandle, WorkId};
pub use ports::{
    presentation::{NoPresentation, PresentationSink},
    transport::{QuestionsTransport, TransportError, TransportResponse},
};
pub use use_cases::fetch_questions::FetchQuestionsUseCase;
pub use use_cases::screen_controller::{ScreenController, ScreenOutcome};
