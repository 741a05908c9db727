//! Screen Controller
//!
//! Owns the [`LifecycleScope`] of one screen and drives the fetch
//! orchestration for it:
//!
//! 1. `show_busy()` on the sink
//! 2. launch the fetch inside the scope
//! 3. when it settles: `show_list` / `show_detail` on success,
//!    `show_fetch_error` on failure, then `hide_busy()` exactly once
//!
//! A cancelled fetch produces no sink call at all. The controller is the
//! owning context: results reach the sink only from `settle_next`, which the
//! owner awaits on its own task.

use crate::config::FetchConfig;
use crate::lifecycle::{LifecycleScope, WorkHandle};
use crate::ports::presentation::PresentationSink;
use crate::use_cases::fetch_questions::FetchQuestionsUseCase;
use stackfeed_domain::{FetchResult, Question, QuestionDetail, QuestionId};
use std::sync::Arc;
use tracing::{debug, info};

/// What a launch on a screen's scope settles with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome {
    Questions(FetchResult<Vec<Question>>),
    Detail(FetchResult<QuestionDetail>),
}

/// Controller for one screen (the question list or one question's details).
///
/// Trigger boundary: [`start_list_fetch`](Self::start_list_fetch),
/// [`start_detail_fetch`](Self::start_detail_fetch), [`teardown`](Self::teardown).
pub struct ScreenController {
    use_case: FetchQuestionsUseCase,
    sink: Arc<dyn PresentationSink>,
    scope: LifecycleScope<ScreenOutcome>,
    config: FetchConfig,
}

impl ScreenController {
    pub fn new(
        name: impl Into<String>,
        use_case: FetchQuestionsUseCase,
        sink: Arc<dyn PresentationSink>,
        config: FetchConfig,
    ) -> Self {
        Self {
            use_case,
            sink,
            scope: LifecycleScope::new(name),
            config,
        }
    }

    pub fn name(&self) -> &str {
        self.scope.name()
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Start fetching one page of the latest questions.
    pub fn start_list_fetch(&mut self, page_size: u32) -> WorkHandle {
        self.sink.show_busy();
        let use_case = self.use_case.clone();
        let handle = self.scope.launch(move |cancel| async move {
            let result = use_case.fetch_latest_questions(page_size, &cancel).await?;
            Ok(ScreenOutcome::Questions(result))
        });
        debug!(screen = %self.name(), work = %handle.id(), page_size, "List fetch started");
        handle
    }

    /// Re-fetch the list with the configured page size.
    pub fn refresh(&mut self) -> WorkHandle {
        self.start_list_fetch(self.config.page_size)
    }

    /// Start fetching the body of question `id`.
    pub fn start_detail_fetch(&mut self, id: QuestionId) -> WorkHandle {
        self.sink.show_busy();
        let use_case = self.use_case.clone();
        let question = id.clone();
        let handle = self.scope.launch(move |cancel| async move {
            let result = use_case.fetch_question_detail(question, &cancel).await?;
            Ok(ScreenOutcome::Detail(result))
        });
        debug!(screen = %self.name(), work = %handle.id(), question = %id, "Detail fetch started");
        handle
    }

    /// The screen became invisible: cancel everything it has in flight.
    ///
    /// Returns the number of cancelled fetches. Nothing they produce reaches
    /// the sink afterwards. Busy indication is left alone unless
    /// [`FetchConfig::hide_busy_on_cancel`] is set.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scope.cancel_all();
        if cancelled > 0 {
            info!(screen = %self.name(), cancelled, "Screen torn down");
            if self.config.hide_busy_on_cancel {
                self.sink.hide_busy();
            }
        }
        cancelled
    }

    /// Wait for the next fetch to settle and deliver it to the sink.
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn settle_next(&mut self) -> bool {
        match self.scope.next_settled().await {
            Some(settled) => {
                debug!(screen = %self.name(), work = %settled.work, "Fetch settled");
                self.deliver(settled.output);
                true
            }
            None => false,
        }
    }

    /// Deliver every in-flight fetch as it settles.
    pub async fn settle_all(&mut self) {
        while self.settle_next().await {}
    }

    pub fn in_flight(&self) -> usize {
        self.scope.in_flight()
    }

    fn deliver(&self, outcome: ScreenOutcome) {
        match outcome {
            ScreenOutcome::Questions(FetchResult::Success(questions)) => {
                self.sink.show_list(&questions);
            }
            ScreenOutcome::Detail(FetchResult::Success(detail)) => {
                self.sink.show_detail(&detail.body);
            }
            ScreenOutcome::Questions(FetchResult::Failure)
            | ScreenOutcome::Detail(FetchResult::Failure) => {
                self.sink.show_fetch_error();
            }
        }
        self.sink.hide_busy();
    }
}
