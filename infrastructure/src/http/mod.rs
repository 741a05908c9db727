//! HTTP adapters
//!
//! [`StackExchangeTransport`] implements the
//! [`QuestionsTransport`](stackfeed_application::QuestionsTransport) port on
//! top of `reqwest`.

mod stackexchange;

pub use stackexchange::{StackExchangeConfig, StackExchangeTransport};
