//! CLI entrypoint for stackfeed
//!
//! This is the main binary that wires together all layers using
//! dependency injection.
//!
//! Two runtimes are used: a multi-threaded `stackfeed-io` runtime whose
//! handle is given to the fetch use case for network calls, and a
//! current-thread runtime that owns the screens and renders results.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use stackfeed_application::{FetchConfig, FetchQuestionsUseCase, ScreenController};
use stackfeed_domain::QuestionId;
use stackfeed_infrastructure::{ConfigLoader, FileConfig, StackExchangeTransport};
use stackfeed_presentation::{
    BrowseView, Browser, Cli, Command, ConsoleOptions, ConsolePresenter, run_to_completion,
    spawn_input,
};
use std::sync::Arc;
use tokio::runtime::{Builder, Handle};
use tokio::sync::mpsc;
use tracing::{info, warn};

const IO_THREADS: usize = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let options = ConsoleOptions {
        color: config.output.color,
        show_progress: config.output.show_progress,
    }
    .with_flags(cli.no_color, cli.quiet);
    options.apply_color();

    let io = Builder::new_multi_thread()
        .worker_threads(IO_THREADS)
        .thread_name("stackfeed-io")
        .enable_all()
        .build()
        .context("Failed to start the I/O runtime")?;
    let screens = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the screen runtime")?;

    let result = screens.block_on(run(&cli, &config, options, io.handle().clone()));

    // A blocking stdin read cannot be cancelled; don't wait for it.
    screens.shutdown_background();
    io.shutdown_background();
    result
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    let (config, warnings) = ConfigLoader::load(cli.config.as_deref())?;
    for issue in &warnings {
        warn!("{}", issue);
    }
    Ok(config)
}

async fn run(cli: &Cli, config: &FileConfig, options: ConsoleOptions, io: Handle) -> Result<()> {
    let transport = StackExchangeTransport::new(config.api.to_transport_config())
        .context("Failed to build the HTTP client")?;
    let use_case = FetchQuestionsUseCase::new(Arc::new(transport), io);
    let fetch_config = config.fetch.to_fetch_config();
    let presenter = Arc::new(ConsolePresenter::new(&options));

    info!(site = %config.api.site, "Starting stackfeed");

    match cli.resolved_command() {
        Command::List { page_size } => {
            let fetch_config = match page_size {
                Some(n) => fetch_config.with_page_size(n),
                None => fetch_config,
            };
            let mut screen =
                ScreenController::new("list", use_case, presenter.clone(), fetch_config);
            screen.refresh();
            finish(&mut screen, &presenter).await
        }
        Command::Show { id } => {
            let id: QuestionId = id.parse()?;
            let mut screen = ScreenController::new(
                format!("detail-{}", id),
                use_case,
                presenter.clone(),
                fetch_config,
            );
            screen.start_detail_fetch(id);
            finish(&mut screen, &presenter).await
        }
        Command::Browse => browse(use_case, presenter, fetch_config).await,
    }
}

/// Run a one-shot screen until it settles or Ctrl-C tears it down.
async fn finish(screen: &mut ScreenController, presenter: &ConsolePresenter) -> Result<()> {
    if !run_to_completion(screen, tokio::signal::ctrl_c()).await {
        bail!("Interrupted");
    }
    if presenter.failures() > 0 {
        bail!("Fetch failed");
    }
    Ok(())
}

async fn browse(
    use_case: FetchQuestionsUseCase,
    presenter: Arc<ConsolePresenter>,
    config: FetchConfig,
) -> Result<()> {
    let (tx, rx) = mpsc::channel(16);
    let inputs = spawn_input(tx);

    presenter.notice("Type a number to open a question, 'h' for help, 'q' to quit.");
    Browser::new(use_case, presenter, config).run(rx).await;

    for input in inputs {
        input.abort();
    }
    Ok(())
}
