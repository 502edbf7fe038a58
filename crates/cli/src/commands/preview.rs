// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `chime preview <spec...>` - print one window's schedule

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;

use chime_core::{build_window, Clock, SystemClock, TaskSpec};

use crate::config::Config;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Cron spec: five time fields followed by the command
    #[arg(trailing_var_arg = true, required = true)]
    pub spec: Vec<String>,

    /// Window start as an RFC 3339 instant (defaults to now + offset)
    #[arg(long)]
    pub from: Option<String>,

    /// Candidate minutes per window
    #[arg(long)]
    pub look_ahead: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One scheduled job in preview output.
#[derive(Debug, Serialize)]
struct PreviewRow {
    at: DateTime<Utc>,
    command: String,
}

impl fmt::Display for PreviewRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  $ {}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.command
        )
    }
}

pub fn preview(args: PreviewArgs, config: &Config) -> Result<()> {
    let line = args.spec.join(" ");
    let spec = TaskSpec::parse(&line)?;

    let start = match &args.from {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("invalid --from instant: {text}"))?
            .with_timezone(&Utc),
        None => {
            let offset = Duration::from_secs(config.scheduler.start_offset_secs);
            SystemClock.now() + TimeDelta::from_std(offset).unwrap_or_else(|_| TimeDelta::zero())
        }
    };
    let look_ahead = args.look_ahead.unwrap_or(config.scheduler.look_ahead_mins);

    let list = build_window(&spec, start, look_ahead);
    let rows: Vec<PreviewRow> = list
        .jobs()
        .map(|(at, spec)| PreviewRow {
            at,
            command: spec.command().to_string(),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            if rows.is_empty() {
                let end = start + TimeDelta::minutes(i64::from(look_ahead));
                println!(
                    "No work: {} - {}",
                    start.format("%H:%M:%S"),
                    end.format("%H:%M:%S")
                );
            } else {
                for row in &rows {
                    println!("{}", row);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
