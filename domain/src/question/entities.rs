//! Question entities

use super::value_objects::QuestionId;
use serde::{Deserialize, Serialize};

/// An entry of the "most recently active" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
}

impl Question {
    pub fn new(id: QuestionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// The body of a single question, as returned by the detail endpoint.
///
/// The body is the raw HTML fragment served by the API; turning it into
/// terminal text is a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub id: QuestionId,
    pub body: String,
}

impl QuestionDetail {
    pub fn new(id: QuestionId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
