//! Argument handling and dispatch.
//!
//! `run()` parses the command line, installs logging, builds the
//! [`IssuesApi`] over the real [`SystemLauncher`] and hands off to one
//! `handle_*` function per subcommand. Handlers return whether the command
//! succeeded; errors bubble up to `main`.

use super::print::{print_failure, print_json, print_messages, print_paths, print_steps};
use super::setup::{Cli, Commands};
use clap::Parser;
use immview::api::IssuesApi;
use immview::config::OpenerConfig;
use immview::error::Result;
use immview::launch::system::SystemLauncher;
use immview::model::{OpenOutcome, RawInput};
use tracing::Level;

struct AppContext {
    api: IssuesApi<SystemLauncher>,
    json: bool,
}

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Commands::Open { year, month, page } => {
            handle_open(&mut ctx, RawInput::new(year, month, page))
        }
        Commands::Path { year, month } => handle_path(&ctx, &year, &month),
        Commands::Strategies => handle_strategies(&ctx, cli.platform.is_some()),
    }
}

/// Logs go to stderr: warnings by default, every launch attempt with `-v`.
///
/// Returns false when a global subscriber was already installed; the existing
/// one keeps receiving events.
fn init_logging(verbose: bool) -> bool {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| tracing::debug!(error = %e, "logging already initialized"))
        .is_ok()
}

fn init_context(cli: &Cli) -> AppContext {
    let mut config = OpenerConfig::default();
    if let Some(root) = &cli.root {
        config = config.with_root(root);
    }
    if let Some(platform) = cli.platform {
        config = config.with_platform(platform);
    }

    AppContext {
        api: IssuesApi::new(SystemLauncher::new(), config),
        json: cli.json,
    }
}

fn handle_open(ctx: &mut AppContext, raw: RawInput) -> Result<bool> {
    let result = ctx.api.open_issue(&raw)?;

    if ctx.json {
        print_json(&result)?;
    } else {
        if let Some(OpenOutcome::Failed(report)) = &result.outcome {
            print_failure(report);
        }
        print_messages(&result.messages);
    }
    Ok(result.is_success())
}

fn handle_path(ctx: &AppContext, year: &str, month: &str) -> Result<bool> {
    let result = ctx.api.issue_path(year, month)?;

    if ctx.json {
        print_json(&result)?;
    } else {
        print_paths(&result.paths);
        print_messages(&result.messages);
    }
    Ok(true)
}

fn handle_strategies(ctx: &AppContext, filtered: bool) -> Result<bool> {
    let platform = filtered.then_some(ctx.api.config().platform);
    let result = ctx.api.strategies(platform);

    if ctx.json {
        print_json(&result)?;
    } else {
        print_steps(&result.steps);
    }
    Ok(true)
}
