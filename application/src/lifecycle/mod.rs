//! Lifecycle-bound concurrency
//!
//! A [`LifecycleScope`] is created when a screen becomes active and torn
//! down when it becomes inactive. Every unit of work it launches is tracked
//! by a [`WorkHandle`]; `cancel_all` cancels them together and guarantees
//! that nothing they produce is delivered afterwards.

mod handle;
mod scope;

pub use handle::{WorkHandle, WorkId};
pub use scope::{LifecycleScope, Settled};
