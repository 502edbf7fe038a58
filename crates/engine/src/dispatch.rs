// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatch loop: build a window, fire each job, sleep it out

use std::time::Duration;

use chrono::TimeDelta;
use tracing::{info, warn};

use chime_core::{build_window, Clock, TaskList, TaskSpec};

use crate::error::EngineError;
use crate::trigger::CommandTrigger;

/// Tuning for one scheduling cycle.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// Candidate minutes per window.
    pub look_ahead_mins: u32,
    /// Offset from "now" to the window start.
    pub start_offset: Duration,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            look_ahead_mins: 10,
            start_offset: Duration::from_secs(5),
        }
    }
}

/// Parse `line` once, then run scheduling cycles until the process dies.
///
/// Only parsing can fail; whether that is fatal is the caller's policy.
pub fn run<C, T>(
    line: &str,
    clock: &C,
    trigger: &mut T,
    config: &CycleConfig,
) -> Result<(), EngineError>
where
    C: Clock,
    T: CommandTrigger,
{
    let spec = TaskSpec::parse(line)?;
    info!(
        expression = spec.expression(),
        command = spec.command(),
        "starting dispatch loop"
    );

    loop {
        run_cycle(&spec, clock, trigger, config);
    }
}

/// One full cycle: build the window, dispatch its jobs, sleep out the
/// remainder of the window.
pub fn run_cycle<C, T>(spec: &TaskSpec, clock: &C, trigger: &mut T, config: &CycleConfig)
where
    C: Clock,
    T: CommandTrigger,
{
    // The offset is applied once per cycle, before the walk; re-sampling
    // it per slot would skip slots whenever a cycle runs long.
    let offset = TimeDelta::from_std(config.start_offset).unwrap_or_else(|_| TimeDelta::zero());
    let start = clock.now() + offset;

    let list = build_window(spec, start, config.look_ahead_mins);

    if list.is_empty() {
        info!(
            %start,
            look_ahead_mins = config.look_ahead_mins,
            "no work in window"
        );
    } else {
        info!(jobs = list.len(), %start, "dispatching window");
        dispatch(&list, clock, trigger);
    }

    let window_end = start + TimeDelta::minutes(i64::from(config.look_ahead_mins));
    let remaining = clock.until(window_end);
    if remaining > TimeDelta::zero() {
        let remaining = remaining.to_std().unwrap_or(Duration::ZERO);
        info!(
            "sleeping {} until the next window",
            humantime::format_duration(remaining)
        );
        clock.sleep(remaining);
    }
}

/// Fire every job in the list, in order, waiting for each instant.
///
/// Waits re-sample the clock per job rather than counting down a fixed
/// schedule-relative duration, so a slow trigger shrinks the next wait.
/// A job already past due fires immediately: catch-up, not skip.
pub fn dispatch<C, T>(list: &TaskList<'_>, clock: &C, trigger: &mut T)
where
    C: Clock,
    T: CommandTrigger,
{
    let total = list.len();
    for (index, (at, spec)) in list.jobs().enumerate() {
        let wait = clock.until(at);
        if wait > TimeDelta::zero() {
            clock.sleep(wait.to_std().unwrap_or(Duration::ZERO));
        } else if wait < TimeDelta::zero() {
            warn!(%at, "job past due; dispatching immediately");
        }

        info!(
            job = index + 1,
            total,
            %at,
            command = spec.command(),
            "dispatching command"
        );
        trigger.trigger(spec.command());
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
