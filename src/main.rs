// ghactivity: browse a GitHub user's public profile and recent activity.
// Parses the command line, loads config and starts the TUI or plain output.

mod activity;
mod app;
mod cache;
mod config;
mod error;
mod fetch;
mod github;
mod logging;
mod paths;
mod state;
mod system;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::activity::feed_rows;
use crate::app::App;
use crate::config::{Config, ThemeName};
use crate::error::{ActivityError, Result};
use crate::fetch::{Orchestrator, spawn_worker};
use crate::github::GitHubClient;

#[derive(Debug, Parser)]
#[command(name = "ghactivity", version, about)]
struct Cli {
    /// GitHub username to show on startup
    username: Option<String>,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color theme, overriding the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Print the feed to stdout instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Bypass the cache for the first fetch
    #[arg(long)]
    refresh: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_path = logging::init();
    tracing::info!(log = ?log_path, "starting ghactivity");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("{}: {}", e.kind().title(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let theme = cli.theme.unwrap_or(config.theme);

    let client = GitHubClient::from_config(&config)?;
    let orchestrator = Orchestrator::new(client, config.cache_ttl());

    if cli.plain {
        let username = cli
            .username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ActivityError::Config("--plain requires a USERNAME".to_string()))?;
        return print_feed(orchestrator, username, cli.refresh, &config).await;
    }

    let (fetcher, outcomes) = spawn_worker(orchestrator);
    let mut app = App::new(&config, theme, fetcher, outcomes);
    if let Some(username) = cli.username.as_deref() {
        app.start_with(username, cli.refresh);
    }

    let mut terminal = ratatui::init();
    let result = tokio::task::block_in_place(|| app.run(&mut terminal));
    ratatui::restore();
    result?;
    Ok(())
}

/// Resolve once and print one line per event.
async fn print_feed(
    mut orchestrator: Orchestrator<GitHubClient>,
    username: &str,
    force_refresh: bool,
    config: &Config,
) -> Result<()> {
    let resolution = orchestrator.resolve(username, force_refresh).await?;
    let bundle = &resolution.bundle;

    println!(
        "{} ({})",
        bundle.profile.display_name(),
        bundle.profile.html_url
    );
    println!(
        "API Rate: {} / {}",
        bundle.rate_limit.remaining, bundle.rate_limit.limit
    );
    println!();

    let rows = feed_rows(&bundle.events, config.max_events);
    for row in &rows {
        println!("{}", row.plain_line());
    }
    println!();
    println!("Showing {} recent events.", rows.len());
    Ok(())
}
