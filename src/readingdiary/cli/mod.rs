//! # CLI Layer
//!
//! This module is **one possible UI client** for the diary, not the diary itself.
//!
//! It is the only place that:
//! - Parses process arguments (`setup.rs`)
//! - Reads stdin and writes stdout (`console.rs`, `render.rs`)
//! - Installs the log subscriber
//! - Decides exit codes (through `main.rs`)
//!
//! Everything it shows comes from `CmdResult` values returned by `DiaryApi`.

mod console;
mod render;
mod setup;

use clap::Parser;
use console::Console;
use readingdiary::api::DiaryApi;
use readingdiary::config::DiaryConfig;
use readingdiary::error::{DiaryError, Result};
use setup::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match cli.config.clone().or_else(DiaryConfig::default_dir) {
        Some(dir) => DiaryConfig::load(dir)?,
        None => DiaryConfig::default(),
    };
    init_logging(&cli, &config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "reading diary started");

    let api = DiaryApi::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(api, stdin.lock(), stdout.lock()).run()
}

/// RUST_LOG wins, then `--verbose`, then the configured level.
fn init_logging(cli: &Cli, config: &DiaryConfig) -> Result<()> {
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("readingdiary={level}")))
        .map_err(|e| DiaryError::Config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!cli.no_color)
        .try_init()
        .map_err(|e| DiaryError::Config(format!("failed to install logger: {e}")))
}
