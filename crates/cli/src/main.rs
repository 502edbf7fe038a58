// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime - evaluate cron specs against future time windows

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check, preview, run};
use config::Config;

#[derive(Parser)]
#[command(
    name = "chime",
    version,
    about = "Evaluate cron specs against future time windows"
)]
struct Cli {
    /// Config file path (defaults to ./chime.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dispatch loop for one cron spec
    Run(run::RunArgs),
    /// Print one window's schedule without dispatching
    Preview(preview::PreviewArgs),
    /// Parse a cron spec and report the result
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::run(args, &config),
        Commands::Preview(args) => preview::preview(args, &config),
        Commands::Check(args) => check::check(args),
    }
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
