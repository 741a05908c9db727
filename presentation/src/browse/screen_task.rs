//! Interactive browser task (Actor pattern)
//!
//! Owns one [`ScreenController`] per screen and processes [`BrowseCommand`]s
//! from the input task. This task is the owning context: every settled
//! fetch is delivered to the view from here.
//!
//! Only one screen is visible at a time. Opening a question tears down the
//! list screen; going back tears down the details screen.

use super::command::{BrowseCommand, HELP};
use crate::output::presenter::BrowseView;
use stackfeed_application::{FetchConfig, FetchQuestionsUseCase, PresentationSink, ScreenController};
use stackfeed_domain::{Question, QuestionId};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Forwards to the view and remembers the last list shown, so list
/// positions can be resolved to question ids.
struct ListMemory {
    inner: Arc<dyn PresentationSink>,
    last: Mutex<Vec<Question>>,
}

impl ListMemory {
    fn new(inner: Arc<dyn PresentationSink>) -> Self {
        Self {
            inner,
            last: Mutex::new(Vec::new()),
        }
    }

    fn snapshot(&self) -> Vec<Question> {
        self.last.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Question at 1-based list `position`.
    fn at(&self, position: u64) -> Option<QuestionId> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        let last = self.last.lock().ok()?;
        last.get(index).map(|q| q.id.clone())
    }
}

impl PresentationSink for ListMemory {
    fn show_busy(&self) {
        self.inner.show_busy();
    }

    fn hide_busy(&self) {
        self.inner.hide_busy();
    }

    fn show_list(&self, questions: &[Question]) {
        if let Ok(mut last) = self.last.lock() {
            *last = questions.to_vec();
        }
        self.inner.show_list(questions);
    }

    fn show_detail(&self, body: &str) {
        self.inner.show_detail(body);
    }

    fn show_fetch_error(&self) {
        self.inner.show_fetch_error();
    }
}

enum Flow {
    Continue,
    Quit,
}

struct DetailScreen {
    id: QuestionId,
    controller: ScreenController,
}

/// The interactive list/details browser.
pub struct Browser<V: BrowseView + 'static> {
    use_case: FetchQuestionsUseCase,
    view: Arc<V>,
    memory: Arc<ListMemory>,
    config: FetchConfig,
    list: ScreenController,
    detail: Option<DetailScreen>,
}

impl<V: BrowseView + 'static> Browser<V> {
    pub fn new(use_case: FetchQuestionsUseCase, view: Arc<V>, config: FetchConfig) -> Self {
        let memory = Arc::new(ListMemory::new(view.clone()));
        let list = ScreenController::new("list", use_case.clone(), memory.clone(), config.clone());
        Self {
            use_case,
            view,
            memory,
            config,
            list,
            detail: None,
        }
    }

    /// Run until `Quit`, an idle interrupt, or the command channel closes.
    ///
    /// The list screen starts fetching immediately.
    pub async fn run(mut self, mut commands: mpsc::Receiver<BrowseCommand>) {
        self.list.refresh();

        loop {
            let busy = self.active().in_flight() > 0;

            tokio::select! {
                biased;

                // Commands first: a teardown must win over a fetch settling
                // in the same poll.
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if let Flow::Quit = self.handle(command) {
                        break;
                    }
                }

                _ = self.active_mut().settle_next(), if busy => {}
            }
        }

        self.close();
    }

    fn active(&self) -> &ScreenController {
        match &self.detail {
            Some(detail) => &detail.controller,
            None => &self.list,
        }
    }

    fn active_mut(&mut self) -> &mut ScreenController {
        match &mut self.detail {
            Some(detail) => &mut detail.controller,
            None => &mut self.list,
        }
    }

    fn handle(&mut self, command: BrowseCommand) -> Flow {
        debug!(?command, screen = %self.active().name(), "Browse command");
        match command {
            BrowseCommand::Refresh => self.refresh(),
            BrowseCommand::Open(n) => {
                let id = self.memory.at(n).unwrap_or_else(|| QuestionId::from(n));
                self.open(id);
            }
            BrowseCommand::OpenId(id) => self.open(id),
            BrowseCommand::Back => self.back(),
            BrowseCommand::Help => self.view.notice(HELP),
            BrowseCommand::Quit => return Flow::Quit,
            BrowseCommand::Interrupt => {
                let cancelled = self.active_mut().teardown();
                if cancelled == 0 {
                    return Flow::Quit;
                }
                self.view.reset();
                self.view.notice("Cancelled.");
            }
            BrowseCommand::Unknown(input) => {
                self.view
                    .notice(&format!("Unknown command '{}'. Type 'h' for help.", input));
            }
        }
        Flow::Continue
    }

    fn refresh(&mut self) {
        match &mut self.detail {
            Some(detail) => {
                detail.controller.teardown();
                detail.controller.start_detail_fetch(detail.id.clone());
            }
            None => {
                self.list.teardown();
                self.list.refresh();
            }
        }
    }

    fn open(&mut self, id: QuestionId) {
        let cancelled = self.list.teardown() + self.close_detail();
        if cancelled > 0 {
            self.view.reset();
        }

        let mut controller = ScreenController::new(
            format!("detail-{}", id),
            self.use_case.clone(),
            self.view.clone(),
            self.config.clone(),
        );
        controller.start_detail_fetch(id.clone());
        self.detail = Some(DetailScreen { id, controller });
    }

    fn back(&mut self) {
        if self.detail.is_none() {
            self.view.notice("Already at the question list.");
            return;
        }
        if self.close_detail() > 0 {
            self.view.reset();
        }

        let questions = self.memory.snapshot();
        if questions.is_empty() {
            self.list.refresh();
        } else {
            self.view.show_list(&questions);
        }
    }

    fn close_detail(&mut self) -> usize {
        self.detail
            .take()
            .map(|mut d| d.controller.teardown())
            .unwrap_or(0)
    }

    fn close(&mut self) {
        let cancelled = self.close_detail() + self.list.teardown();
        if cancelled > 0 {
            self.view.reset();
        }
        info!(cancelled, "Browser closed");
    }
}
