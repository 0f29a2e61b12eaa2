mod cmd;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::clipboard::SystemClipboard;
use crate::infra::git::GitCli;
use crate::infra::term::TerminalNotifier;
use crate::services::Notifier;

#[derive(Parser)]
#[command(
    name = "daydiff",
    author,
    version,
    about = "Copy today's uncommitted changes to the clipboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Gather today's uncommitted changes and copy the diff report.
    Copy(CopyArgs),
}

#[derive(Args, Default)]
struct CopyArgs {
    /// Inspect this directory instead of the current one.
    #[arg(short, long)]
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    logging::setup_logger();
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let args = match cli.command {
        Some(Commands::Copy(args)) => args,
        None => CopyArgs::default(),
    };
    run_copy(args).await
}

async fn run_copy(args: CopyArgs) -> AppResult<()> {
    let working_dir = args.path.or_else(|| std::env::current_dir().ok());

    // The placeholder root is never queried; the pipeline stops at the
    // workspace check before any git call when no directory was resolved.
    let git_root = working_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let version_control = Arc::new(GitCli::new(git_root));
    let notifier = Arc::new(Notifier::new(Arc::new(TerminalNotifier)));
    let clipboard = Arc::new(SystemClipboard);

    let context = AppContext::new(working_dir, version_control, notifier, clipboard);

    // Every stop condition is surfaced through the notifier inside the
    // pipeline; the process exits zero either way.
    let outcome = cmd::copy::run(&context).await;
    tracing::debug!(?outcome, "copy finished");

    Ok(())
}
