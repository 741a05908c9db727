//! Non-interactive screens (`list`, `show`)

use stackfeed_application::ScreenController;
use std::future::Future;
use tracing::info;

/// Deliver every fetch in flight on `screen`, tearing the screen down if
/// `interrupt` resolves first.
///
/// Returns `false` when interrupted.
pub async fn run_to_completion<F>(screen: &mut ScreenController, interrupt: F) -> bool
where
    F: Future,
{
    tokio::pin!(interrupt);
    loop {
        tokio::select! {
            biased;

            _ = &mut interrupt => {
                let cancelled = screen.teardown();
                info!(screen = %screen.name(), cancelled, "Interrupted");
                return false;
            }

            more = screen.settle_next() => {
                if !more {
                    return true;
                }
            }
        }
    }
}
