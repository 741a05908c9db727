//! Shared test doubles for the ports.

use crate::ports::presentation::PresentationSink;
use crate::ports::transport::{QuestionsTransport, TransportError, TransportResponse};
use async_trait::async_trait;
use stackfeed_domain::{FetchRequest, Question};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, oneshot};

// ==================== Transports ====================

/// Replays canned responses in order and records every request.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<Result<TransportResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionsTransport for ScriptedTransport {
    async fn fetch(&self, request: &FetchRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::RequestFailed("No more responses".to_string())))
    }
}

/// Panics inside `fetch`.
pub(crate) struct PanickingTransport;

#[async_trait]
impl QuestionsTransport for PanickingTransport {
    async fn fetch(&self, _request: &FetchRequest) -> Result<TransportResponse, TransportError> {
        panic!("transport blew up");
    }
}

/// Sends `()` when dropped.
struct DropSignal(Option<oneshot::Sender<()>>);

impl Drop for DropSignal {
    fn drop(&mut self) {
        if let Some(tx) = self.0.take() {
            let _ = tx.send(());
        }
    }
}

/// Blocks every call until `release` is notified.
///
/// `started` is notified when a call begins; the receiver returned by
/// [`GatedTransport::new`] fires when the first call's future is dropped,
/// whether it completed or was aborted.
pub(crate) struct GatedTransport {
    pub(crate) started: Notify,
    pub(crate) release: Notify,
    response: TransportResponse,
    dropped: Mutex<Option<oneshot::Sender<()>>>,
}

impl GatedTransport {
    pub(crate) fn new(response: TransportResponse) -> (Arc<Self>, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::new(Self {
            started: Notify::new(),
            release: Notify::new(),
            response,
            dropped: Mutex::new(Some(tx)),
        });
        (transport, rx)
    }
}

#[async_trait]
impl QuestionsTransport for GatedTransport {
    async fn fetch(&self, _request: &FetchRequest) -> Result<TransportResponse, TransportError> {
        let _signal = DropSignal(self.dropped.lock().unwrap().take());
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.response.clone())
    }
}

// ==================== Sink ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SinkEvent {
    ShowBusy,
    HideBusy,
    ShowList(Vec<Question>),
    ShowDetail(String),
    ShowFetchError,
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, event: &SinkEvent) -> usize {
        self.events.lock().unwrap().iter().filter(|e| *e == event).count()
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PresentationSink for RecordingSink {
    fn show_busy(&self) {
        self.push(SinkEvent::ShowBusy);
    }

    fn hide_busy(&self) {
        self.push(SinkEvent::HideBusy);
    }

    fn show_list(&self, questions: &[Question]) {
        self.push(SinkEvent::ShowList(questions.to_vec()));
    }

    fn show_detail(&self, body: &str) {
        self.push(SinkEvent::ShowDetail(body.to_string()));
    }

    fn show_fetch_error(&self) {
        self.push(SinkEvent::ShowFetchError);
    }
}

// ==================== Fixtures ====================

/// A list response body with `count` items, ids `1..=count`.
pub(crate) fn list_body(count: usize) -> String {
    let items: Vec<serde_json::Value> = (1..=count)
        .map(|i| serde_json::json!({ "question_id": i, "title": format!("Question {}", i) }))
        .collect();
    serde_json::json!({ "items": items, "has_more": true }).to_string()
}
