//! Lifecycle scope
//!
//! Work runs as tasks in a [`JoinSet`]; the owner collects outcomes with
//! [`LifecycleScope::next_settled`] on its own task, so anything it does with
//! them (rendering, mostly) stays on the owning context.
//!
//! `cancel_all` does two things:
//! 1. cancels the generation token every handle's token descends from, so
//!    work that is still running observes cancellation cooperatively;
//! 2. drops the whole `JoinSet`, which aborts every task and discards any
//!    outcome that finished but was not collected yet.
//!
//! The second step is what makes "no delivery after `cancel_all` returns"
//! hold without relying on the work noticing its token in time.

use super::handle::{WorkHandle, WorkId};
use futures::FutureExt;
use stackfeed_domain::Cancelled;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

type Outcome<O> = std::thread::Result<Result<O, Cancelled>>;

/// An outcome collected from the scope.
#[derive(Debug)]
pub struct Settled<O> {
    pub work: WorkId,
    pub output: O,
}

/// A cancellable group of in-flight work tied to one screen's lifetime.
///
/// All methods take `&mut self`: the scope has a single owner, and the only
/// way results leave it is through that owner calling `next_settled`.
pub struct LifecycleScope<O> {
    name: String,
    generation: CancellationToken,
    tasks: JoinSet<(WorkHandle, Outcome<O>)>,
    next_id: u64,
}

impl<O: Send + 'static> LifecycleScope<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generation: CancellationToken::new(),
            tasks: JoinSet::new(),
            next_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Launch `work` inside the scope.
    ///
    /// `work` receives the cancellation token of the returned handle and
    /// should resolve to `Err(Cancelled)` when it observes cancellation.
    /// Must be called from within a Tokio runtime.
    pub fn launch<F, Fut>(&mut self, work: F) -> WorkHandle
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<O, Cancelled>> + Send + 'static,
    {
        self.next_id += 1;
        let handle = WorkHandle::new(WorkId(self.next_id), self.generation.child_token());
        let future = work(handle.token());

        let owned = handle.clone();
        self.tasks.spawn(async move {
            let outcome = AssertUnwindSafe(future).catch_unwind().await;
            (owned, outcome)
        });

        debug!(scope = %self.name, work = %handle.id(), "Launched work");
        handle
    }

    /// Cancel every handle the scope currently owns.
    ///
    /// Returns how many launches were cancelled. On an idle scope this does
    /// nothing and returns 0. The scope stays usable: later launches belong
    /// to a fresh generation.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.tasks.len();
        if cancelled == 0 {
            return 0;
        }

        self.generation.cancel();
        self.generation = CancellationToken::new();
        drop(std::mem::take(&mut self.tasks));

        info!(scope = %self.name, cancelled, "Cancelled in-flight work");
        cancelled
    }

    /// Wait for the next launch to settle with an output.
    ///
    /// Cancelled launches and launches that panicked are consumed silently
    /// (the latter with an error log). Returns `None` once the scope owns no
    /// more work.
    pub async fn next_settled(&mut self) -> Option<Settled<O>> {
        while let Some(joined) = self.tasks.join_next().await {
            let (handle, outcome) = match joined {
                Ok(joined) => joined,
                Err(e) => {
                    // Tasks still in the set are only aborted by runtime shutdown.
                    debug!(scope = %self.name, "Work task ended without output: {}", e);
                    continue;
                }
            };

            if handle.is_cancelled() {
                debug!(
                    scope = %self.name,
                    work = %handle.id(),
                    "Discarding outcome of cancelled work"
                );
                continue;
            }

            match outcome {
                Ok(Ok(output)) => {
                    return Some(Settled {
                        work: handle.id(),
                        output,
                    });
                }
                Ok(Err(Cancelled)) => {
                    debug!(scope = %self.name, work = %handle.id(), "Work cancelled");
                }
                Err(panic) => {
                    error!(
                        scope = %self.name,
                        work = %handle.id(),
                        "Work panicked: {}",
                        panic_message(panic.as_ref())
                    );
                }
            }
        }
        None
    }

    /// Launches that have not been collected or cancelled yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<O> Drop for LifecycleScope<O> {
    fn drop(&mut self) {
        // The JoinSet aborts its tasks on drop; cancelling the token as well
        // lets cooperative work see why.
        self.generation.cancel();
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    async fn collect_all(scope: &mut LifecycleScope<i32>) -> Vec<i32> {
        let mut outputs = Vec::new();
        while let Some(settled) = scope.next_settled().await {
            outputs.push(settled.output);
        }
        outputs.sort();
        outputs
    }

    #[tokio::test]
    async fn test_launch_and_settle() {
        let mut scope = LifecycleScope::new("test");
        let handle = scope.launch(|_| async { Ok(42) });
        assert_eq!(scope.in_flight(), 1);

        let settled = scope.next_settled().await.unwrap();
        assert_eq!(settled.work, handle.id());
        assert_eq!(settled.output, 42);
        assert!(scope.is_idle());
        assert!(scope.next_settled().await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_launches_all_settle() {
        let mut scope = LifecycleScope::new("test");
        let first = scope.launch(|_| async { Ok(1) });
        let second = scope.launch(|_| async { Ok(2) });
        assert_ne!(first.id(), second.id());

        assert_eq!(collect_all(&mut scope).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_cancel_all_on_idle_scope_is_noop() {
        let mut scope: LifecycleScope<i32> = LifecycleScope::new("idle");
        assert_eq!(scope.cancel_all(), 0);
        assert_eq!(scope.cancel_all(), 0);
        assert!(scope.next_settled().await.is_none());

        // Still usable afterwards
        scope.launch(|_| async { Ok(5) });
        assert_eq!(collect_all(&mut scope).await, vec![5]);
    }

    #[tokio::test]
    async fn test_cancel_all_discards_finished_but_uncollected_work() {
        let mut scope = LifecycleScope::new("test");
        let (done_tx, done_rx) = oneshot::channel();
        let handle = scope.launch(move |_| async move {
            let _ = done_tx.send(());
            Ok(1)
        });
        done_rx.await.unwrap();

        assert_eq!(scope.cancel_all(), 1);
        assert!(handle.is_cancelled());
        assert!(scope.next_settled().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_all_interrupts_pending_work() {
        let mut scope = LifecycleScope::new("test");
        let (dropped_tx, dropped_rx) = oneshot::channel::<()>();
        scope.launch(move |_| async move {
            let _guard = dropped_tx;
            futures::future::pending::<()>().await;
            Ok(1)
        });
        tokio::task::yield_now().await;

        scope.cancel_all();
        // The sender is dropped together with the aborted future.
        assert!(dropped_rx.await.is_err());
        assert!(scope.next_settled().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_all_keeps_scope_usable() {
        let mut scope = LifecycleScope::new("test");
        let old = scope.launch(|token| async move {
            token.cancelled().await;
            Err(Cancelled)
        });
        scope.cancel_all();

        let new = scope.launch(|_| async { Ok(9) });
        assert!(old.is_cancelled());
        assert!(!new.is_cancelled());
        assert!(new.id() > old.id());
        assert_eq!(collect_all(&mut scope).await, vec![9]);
    }

    #[tokio::test]
    async fn test_single_handle_cancel_is_silent() {
        let mut scope = LifecycleScope::new("test");
        let cancelled = scope.launch(|token| async move {
            token.cancelled().await;
            Err(Cancelled)
        });
        scope.launch(|_| async { Ok(3) });

        cancelled.cancel();
        assert_eq!(collect_all(&mut scope).await, vec![3]);
    }

    #[tokio::test]
    async fn test_handle_cancelled_after_completion_is_not_delivered() {
        let mut scope = LifecycleScope::new("test");
        let (done_tx, done_rx) = oneshot::channel();
        let handle = scope.launch(move |_| async move {
            let _ = done_tx.send(());
            Ok(1)
        });
        done_rx.await.unwrap();

        handle.cancel();
        assert!(scope.next_settled().await.is_none());
    }

    #[tokio::test]
    async fn test_panicking_work_does_not_poison_scope() {
        let mut scope = LifecycleScope::new("test");
        let explode = true;
        scope.launch(move |_| async move {
            if explode {
                panic!("work exploded");
            }
            Ok(0)
        });
        scope.launch(|_| async { Ok(7) });

        assert_eq!(collect_all(&mut scope).await, vec![7]);
    }

    #[tokio::test]
    async fn test_drop_cancels_tokens() {
        let mut scope: LifecycleScope<i32> = LifecycleScope::new("test");
        let handle = scope.launch(|token| async move {
            token.cancelled().await;
            Err(Cancelled)
        });
        drop(scope);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_panic_message_variants() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let s: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn Any + Send> = Box::new(5u8);
        assert_eq!(panic_message(s.as_ref()), "unknown panic payload");
    }
}
