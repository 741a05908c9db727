//! Fetch Questions use case.
//!
//! Performs the two remote calls the screens need (latest questions, one
//! question's body) and classifies each outcome:
//!
//! | transport outcome                          | result              |
//! |--------------------------------------------|---------------------|
//! | 2xx with a well-formed body                | `Ok(Success(..))`   |
//! | non-2xx, or 2xx with absent/invalid body   | `Ok(Failure)`       |
//! | connection error, panic in the call        | `Ok(Failure)`       |
//! | owning scope cancelled the token           | `Err(Cancelled)`    |
//!
//! The transport call and body parsing run on the background runtime handed
//! to [`FetchQuestionsUseCase::new`]; the caller only awaits the join.

use crate::ports::transport::{QuestionsTransport, TransportResponse};
use stackfeed_domain::{
    Cancelled, FetchFailure, FetchRequest, FetchResult, Question, QuestionDetail, QuestionId,
    QuestionsResponseSchema,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;
use tracing::{debug, warn};

/// Use case for fetching questions.
///
/// Stateless across calls: no caching, no retries. Cloning is cheap and
/// shares the transport.
#[derive(Clone)]
pub struct FetchQuestionsUseCase {
    transport: Arc<dyn QuestionsTransport>,
    background: Handle,
}

impl FetchQuestionsUseCase {
    /// Create the use case.
    ///
    /// `background` is the runtime transport calls are spawned on. Passing
    /// the handle of a dedicated I/O runtime keeps the caller's runtime free;
    /// tests pass `Handle::current()`.
    pub fn new(transport: Arc<dyn QuestionsTransport>, background: Handle) -> Self {
        Self {
            transport,
            background,
        }
    }

    /// Fetch one page of the most recently active questions, in the order
    /// the server returned them.
    pub async fn fetch_latest_questions(
        &self,
        page_size: u32,
        cancel: &CancellationToken,
    ) -> Result<FetchResult<Vec<Question>>, Cancelled> {
        self.run(FetchRequest::LatestQuestions { page_size }, cancel, |schema| {
            schema.into_questions().map_err(|id| {
                FetchFailure::MalformedResponse(format!("question {} has no title", id))
            })
        })
        .await
    }

    /// Fetch the body of a single question.
    pub async fn fetch_question_detail(
        &self,
        id: QuestionId,
        cancel: &CancellationToken,
    ) -> Result<FetchResult<QuestionDetail>, Cancelled> {
        self.run(FetchRequest::QuestionDetail { id }, cancel, |schema| {
            schema.into_detail().ok_or_else(|| {
                FetchFailure::MalformedResponse("response has no question body".to_string())
            })
        })
        .await
    }

    async fn run<T, F>(
        &self,
        request: FetchRequest,
        cancel: &CancellationToken,
        convert: F,
    ) -> Result<FetchResult<T>, Cancelled>
    where
        T: Send + 'static,
        F: FnOnce(QuestionsResponseSchema) -> Result<T, FetchFailure> + Send + 'static,
    {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        debug!(request = %request, "Dispatching fetch to background runtime");

        let transport = Arc::clone(&self.transport);
        let task_request = request.clone();
        // Dropping the handle (scope teardown drops this future) aborts the
        // background task, which drops the in-flight transport future.
        let mut call = AbortOnDropHandle::new(self.background.spawn(async move {
            let response = transport
                .fetch(&task_request)
                .await
                .map_err(|e| FetchFailure::Transport(e.to_string()))?;
            parse_response(response).and_then(convert)
        }));

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                call.abort();
                debug!(request = %request, "Fetch cancelled by owning scope");
                return Err(Cancelled);
            }

            joined = &mut call => match joined {
                Ok(outcome) => outcome,
                Err(e) if e.is_cancelled() && cancel.is_cancelled() => return Err(Cancelled),
                Err(e) => Err(FetchFailure::Fault(e.to_string())),
            },
        };

        match outcome {
            Ok(payload) => {
                debug!(request = %request, "Fetch succeeded");
                Ok(FetchResult::Success(payload))
            }
            Err(failure) => {
                warn!(
                    request = %request,
                    kind = failure.kind(),
                    "Fetch failed: {}",
                    failure
                );
                Ok(FetchResult::Failure)
            }
        }
    }
}

/// Validate status and body presence before parsing.
fn parse_response(response: TransportResponse) -> Result<QuestionsResponseSchema, FetchFailure> {
    if !response.is_success() {
        return Err(FetchFailure::Status(response.status));
    }

    let body = response
        .body
        .filter(|body| !body.trim().is_empty())
        .ok_or_else(|| FetchFailure::MalformedResponse("empty body".to_string()))?;

    serde_json::from_str(&body).map_err(|e| FetchFailure::MalformedResponse(e.to_string()))
}
