// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `chime check <spec...>` - parse a cron spec and report the result

use anyhow::Result;
use clap::Args;

use chime_core::TaskSpec;

#[derive(Args)]
pub struct CheckArgs {
    /// Cron spec: five time fields followed by the command
    #[arg(trailing_var_arg = true, required = true)]
    pub spec: Vec<String>,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let line = args.spec.join(" ");
    let spec = TaskSpec::parse(&line)?;

    println!("ok: [{}] runs `{}`", spec.expression(), spec.command());
    Ok(())
}
