//! Fetch outcomes and request descriptors.
//!
//! - [`request::FetchRequest`]: what to ask the transport for
//! - [`result::FetchResult`]: tagged success/failure value
//! - [`error::FetchFailure`] / [`error::Cancelled`]: failure taxonomy and
//!   the separate cancellation signal

pub mod error;
pub mod request;
pub mod result;
