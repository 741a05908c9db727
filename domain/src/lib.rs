//! Domain layer for stackfeed
//!
//! This crate contains the entities, value objects and result types shared
//! by every other layer. It has no dependencies on networking, async
//! runtimes or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions
//!
//! - **Question**: an item of the "most recently active" list (id + title)
//! - **QuestionDetail**: the body of a single question
//!
//! ## Fetch outcomes
//!
//! - **FetchResult**: `Success(payload)` or an opaque `Failure`
//! - **Cancelled**: the owning screen went away; deliberately *not* a
//!   `FetchResult` variant so it can never be mistaken for a failure

pub mod fetch;
pub mod question;

// Re-export commonly used types
pub use fetch::{
    error::{Cancelled, FetchFailure},
    request::FetchRequest,
    result::FetchResult,
};
pub use question::{
    entities::{Question, QuestionDetail},
    schema::{QuestionItemSchema, QuestionsResponseSchema},
    value_objects::QuestionId,
};
