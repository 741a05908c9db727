//! Console output
//!
//! [`console::ConsoleFormatter`] builds the text, [`presenter::ConsolePresenter`]
//! prints it as the screens' presentation sink.

pub mod console;
pub mod html;
pub mod presenter;
