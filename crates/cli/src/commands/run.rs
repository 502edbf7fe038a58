// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `chime run <spec...>` - run the dispatch loop

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use chime_core::SystemClock;
use chime_engine::{CycleConfig, PrintTrigger};

use crate::config::Config;

#[derive(Args)]
pub struct RunArgs {
    /// Cron spec: five time fields followed by the command
    #[arg(trailing_var_arg = true, required = true)]
    pub spec: Vec<String>,

    /// Candidate minutes per window
    #[arg(long)]
    pub look_ahead: Option<u32>,

    /// Seconds between now and the window start
    #[arg(long)]
    pub offset: Option<u64>,
}

pub fn run(args: RunArgs, config: &Config) -> Result<()> {
    let line = args.spec.join(" ");
    let cycle = CycleConfig {
        look_ahead_mins: args
            .look_ahead
            .unwrap_or(config.scheduler.look_ahead_mins),
        start_offset: Duration::from_secs(
            args.offset.unwrap_or(config.scheduler.start_offset_secs),
        ),
    };

    let clock = SystemClock;
    let mut trigger = PrintTrigger;
    chime_engine::run(&line, &clock, &mut trigger, &cycle)?;
    Ok(())
}
