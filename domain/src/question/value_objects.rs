//! Question value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string cannot be used as a [`QuestionId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid question id: {0:?}")]
pub struct InvalidQuestionId(pub String);

/// Identifier of a single question (Value Object)
///
/// StackExchange ids are numeric, but the id is carried as an opaque string
/// because it is only ever echoed back into a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Try to create an id, returning None for empty or whitespace-only input
    /// and for anything that would read as a path segment (`/`, `.`, `..`).
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.contains('/') || matches!(trimmed, "." | "..") {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for QuestionId {
    type Err = InvalidQuestionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or_else(|| InvalidQuestionId(s.to_string()))
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
