// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Window scheduling: walking a span of minutes against one task spec

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use crate::spec::TaskSpec;

/// The schedule of matched instants plus the work association backing
/// it, scoped to a single window build.
///
/// A task list is rebuilt from scratch every cycle and never merged
/// across cycles. The work association is a plain ordered list of
/// (instant, spec) pairs; the spec is borrowed from the caller that
/// built the window.
#[derive(Debug, Default)]
pub struct TaskList<'s> {
    schedule: Vec<DateTime<Utc>>,
    work: Vec<(DateTime<Utc>, &'s TaskSpec)>,
}

impl<'s> TaskList<'s> {
    pub fn new() -> Self {
        Self {
            schedule: Vec::new(),
            work: Vec::new(),
        }
    }

    fn add_task(&mut self, at: DateTime<Utc>, spec: &'s TaskSpec) {
        self.schedule.push(at);
        self.work.push((at, spec));
    }

    /// Matched instants in chronological order.
    pub fn schedule(&self) -> &[DateTime<Utc>] {
        &self.schedule
    }

    /// (instant, spec) pairs in chronological order.
    pub fn jobs(&self) -> impl Iterator<Item = (DateTime<Utc>, &'s TaskSpec)> + '_ {
        self.work.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

/// Walk `look_ahead_mins` consecutive minutes starting at `start`
/// (inclusive) and collect every instant `spec` matches.
///
/// The window is half-open: exactly `look_ahead_mins` candidate minutes
/// are examined, so a 10-minute window from T covers T through T+9.
/// Matching is done against the UTC calendar. Every minute is visited
/// with no early termination; windows are tens of minutes, and stepping
/// them one at a time sidesteps next-occurrence arithmetic across
/// irregular month and day boundaries.
pub fn build_window<'s>(
    spec: &'s TaskSpec,
    start: DateTime<Utc>,
    look_ahead_mins: u32,
) -> TaskList<'s> {
    debug!(
        expression = spec.expression(),
        %start,
        look_ahead_mins,
        "building window"
    );

    let mut list = TaskList::new();
    let mut at = start;

    for _ in 0..look_ahead_mins {
        match spec.first_mismatch(at) {
            None => {
                trace!(%at, "slot matches");
                list.add_task(at, spec);
            }
            Some(field) => trace!(%at, %field, "slot skipped"),
        }
        at = at + TimeDelta::minutes(1);
    }

    debug!(jobs = list.len(), "window built");
    list
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
