//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for stackfeed
#[derive(Parser, Debug)]
#[command(name = "stackfeed")]
#[command(author, version, about = "Browse the latest StackOverflow questions from the terminal")]
#[command(long_about = r#"
stackfeed fetches the most recently active questions from a StackExchange site
and shows the body of any question on demand.

Configuration files are merged in this order (later wins):
1. ~/.config/stackfeed/config.toml   Global config
2. ./stackfeed.toml                  Project-level config
3. --config <path>                   Explicit config file
4. STACKFEED_* environment variables (e.g. STACKFEED_FETCH__PAGE_SIZE=50)

Example:
  stackfeed list --page-size 10
  stackfeed show 11227809
  stackfeed browse
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the busy spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the merged result, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print one page of the latest questions
    List {
        /// Questions to fetch (1-100); defaults to `fetch.page_size`
        #[arg(short = 'n', long, value_name = "N")]
        page_size: Option<u32>,
    },
    /// Print the body of one question
    Show {
        /// Question id, as shown by `list`
        id: String,
    },
    /// Interactive list and details screens
    Browse,
}

impl Cli {
    /// `browse` when no subcommand is given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }
}
