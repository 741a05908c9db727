//! Question subdomain
//!
//! - [`entities::Question`] / [`entities::QuestionDetail`]: what the screens render
//! - [`value_objects::QuestionId`]: validated identifier
//! - [`schema`]: StackExchange response bodies as they arrive on the wire

pub mod entities;
pub mod schema;
pub mod value_objects;
