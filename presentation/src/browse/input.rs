//! Input tasks feeding the browser
//!
//! Lines from stdin and Ctrl-C presses are turned into [`BrowseCommand`]s on
//! one channel, so the browser task has a single command source.

use super::command::BrowseCommand;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Forward parsed lines from `reader` until EOF, then send `Quit`.
pub async fn forward_lines<R>(reader: R, commands: mpsc::Sender<BrowseCommand>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let Some(command) = BrowseCommand::parse(&line) else {
                    continue;
                };
                if commands.send(command).await.is_err() {
                    return;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        }
    }
    debug!("Input closed");
    let _ = commands.send(BrowseCommand::Quit).await;
}

/// Spawn the stdin reader and the Ctrl-C listener.
pub fn spawn_input(commands: mpsc::Sender<BrowseCommand>) -> Vec<JoinHandle<()>> {
    let interrupts = commands.clone();
    let stdin = tokio::spawn(forward_lines(BufReader::new(tokio::io::stdin()), commands));
    let ctrl_c = tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if interrupts.send(BrowseCommand::Interrupt).await.is_err() {
                break;
            }
        }
    });
    vec![stdin, ctrl_c]
}
