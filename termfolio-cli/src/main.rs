//! termfolio — a terminal-styled interactive portfolio.
//!
//! Hosts the `termfolio-core` interpreter behind a full-screen TUI.

mod tui;

use clap::Parser;
use std::path::PathBuf;
use termfolio_core::{ThemeSet, ThemeStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// termfolio: a portfolio that behaves like a shell
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about, long_about = None)]
struct Cli {
    /// Portfolio content file (TOML); defaults to the layered lookup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with this theme instead of the persisted one
    #[arg(short, long)]
    theme: Option<String>,

    /// Data directory for persisted state
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so human-readable logs stay on stderr at
    // the chosen verbosity; structured logs always land in the data dir.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));

    let log_dir = directories::ProjectDirs::from("dev", "termfolio", "termfolio")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "termfolio.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = termfolio_core::load_config(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;

    let store = match &cli.data_dir {
        Some(dir) => Some(ThemeStore::with_dir(dir)),
        None => ThemeStore::from_project_dirs(),
    };

    // Flag beats persisted selection; unknown names fall back to the
    // default palette inside the session.
    let initial_theme = cli
        .theme
        .or_else(|| store.as_ref().and_then(|s| s.saved_theme()));

    tui::run(config, ThemeSet::builtin(), store, initial_theme.as_deref()).await
}
