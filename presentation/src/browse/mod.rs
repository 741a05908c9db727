//! Interactive browse mode
//!
//! ```text
//! stdin / Ctrl-C ──► input tasks ──mpsc──► Browser (owns the screens)
//!                                              │
//!                                              └─► BrowseView (console)
//! ```

mod command;
mod input;
mod screen_task;

pub use command::{BrowseCommand, HELP};
pub use input::{forward_lines, spawn_input};
pub use screen_task::Browser;
