//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fetch_questions;
pub mod screen_controller;
