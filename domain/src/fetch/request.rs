//! Request descriptors handed to the transport.

use crate::question::value_objects::QuestionId;

/// An immutable description of one remote call.
///
/// Created per invocation by the use case; the transport decides how it maps
/// onto URLs and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Most recently active questions, one page of `page_size` entries.
    LatestQuestions { page_size: u32 },
    /// A single question including its body.
    QuestionDetail { id: QuestionId },
}

impl FetchRequest {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchRequest::LatestQuestions { .. } => "latest_questions",
            FetchRequest::QuestionDetail { .. } => "question_detail",
        }
    }
}

impl std::fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchRequest::LatestQuestions { page_size } => {
                write!(f, "latest questions (page size {})", page_size)
            }
            FetchRequest::QuestionDetail { id } => write!(f, "question {}", id),
        }
    }
}
