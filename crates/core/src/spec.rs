// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron line parsing and the aggregate matcher

use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::field::{ExpandError, FieldExpr, FieldKind};

/// Longest command text a spec may carry, in bytes.
pub const COMMAND_MAX_LEN: usize = 999;

/// Errors from parsing a full cron line.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid spec: expected 5 time fields and a command, got {0} field(s)")]
    TooFewFields(usize),
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error("command exceeds maximum length of 999 chars (got {0})")]
    CommandTooLong(usize),
}

/// The five field expressions of one cron line, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeExpr {
    minute: FieldExpr,
    hour: FieldExpr,
    day_of_month: FieldExpr,
    month: FieldExpr,
    day_of_week: FieldExpr,
}

impl TimeExpr {
    pub fn new(
        minute: impl Into<String>,
        hour: impl Into<String>,
        day_of_month: impl Into<String>,
        month: impl Into<String>,
        day_of_week: impl Into<String>,
    ) -> Self {
        Self {
            minute: FieldExpr::new(minute),
            hour: FieldExpr::new(hour),
            day_of_month: FieldExpr::new(day_of_month),
            month: FieldExpr::new(month),
            day_of_week: FieldExpr::new(day_of_week),
        }
    }

    /// Expand all five fields into a [`Matcher`].
    ///
    /// Fields are expanded in cron line order; the first failure is
    /// returned and later fields are not attempted, so no partially
    /// built matcher can be observed.
    pub fn explode(&self) -> Result<Matcher, ExpandError> {
        Ok(Matcher {
            minutes: self.minute.expand(FieldKind::Minute)?,
            hours: self.hour.expand(FieldKind::Hour)?,
            days_of_month: self.day_of_month.expand(FieldKind::DayOfMonth)?,
            months: self.month.expand(FieldKind::Month)?,
            days_of_week: self.day_of_week.expand(FieldKind::DayOfWeek)?,
        })
    }
}

/// The five expanded fields of one cron line, tested jointly against a
/// candidate instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matcher {
    minutes: Vec<u32>,
    hours: Vec<u32>,
    days_of_month: Vec<u32>,
    months: Vec<u32>,
    days_of_week: Vec<u32>,
}

/// One parsed cron line: the expression text, its aggregate matcher, and
/// the command to fire. Immutable once parsed.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSpec {
    expression: String,
    matcher: Matcher,
    command: String,
}

impl TaskSpec {
    /// Parse one cron line: five time fields followed by the command.
    ///
    /// The command is the remaining tokens rejoined with single spaces
    /// and must not exceed [`COMMAND_MAX_LEN`] bytes; on violation no
    /// spec is returned.
    pub fn parse(line: &str) -> Result<Self, SpecError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 6 {
            return Err(SpecError::TooFewFields(parts.len()));
        }

        let matcher =
            TimeExpr::new(parts[0], parts[1], parts[2], parts[3], parts[4]).explode()?;

        let command = parts[5..].join(" ");
        if command.len() > COMMAND_MAX_LEN {
            return Err(SpecError::CommandTooLong(command.len()));
        }

        Ok(Self {
            expression: parts[0..5].join(" "),
            matcher,
            command,
        })
    }

    /// The five time fields rejoined with single spaces.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn has_minute(&self, minute: u32) -> bool {
        self.matcher.minutes.contains(&minute)
    }

    pub fn has_hour(&self, hour: u32) -> bool {
        self.matcher.hours.contains(&hour)
    }

    pub fn has_day_of_month(&self, day: u32) -> bool {
        self.matcher.days_of_month.contains(&day)
    }

    pub fn has_month(&self, month: u32) -> bool {
        self.matcher.months.contains(&month)
    }

    /// Day-of-week membership. A queried 0 is treated as Sunday (7);
    /// stored values are never rewritten.
    pub fn has_day_of_week(&self, day_of_week: u32) -> bool {
        let day_of_week = if day_of_week == 0 { 7 } else { day_of_week };
        self.matcher.days_of_week.contains(&day_of_week)
    }

    /// Test whether a calendar instant satisfies all five fields.
    pub fn matches(&self, at: DateTime<Utc>) -> bool {
        self.first_mismatch(at).is_none()
    }

    /// The first field that rules out `at`, or `None` on a full match.
    ///
    /// Evaluation order is month, day-of-week, day-of-month, hour,
    /// minute. Weekdays are numbered Monday=1 through Sunday=7, the
    /// same convention the day-of-week domain stores.
    pub(crate) fn first_mismatch(&self, at: DateTime<Utc>) -> Option<FieldKind> {
        if !self.has_month(at.month()) {
            Some(FieldKind::Month)
        } else if !self.has_day_of_week(at.weekday().number_from_monday()) {
            Some(FieldKind::DayOfWeek)
        } else if !self.has_day_of_month(at.day()) {
            Some(FieldKind::DayOfMonth)
        } else if !self.has_hour(at.hour()) {
            Some(FieldKind::Hour)
        } else if !self.has_minute(at.minute()) {
            Some(FieldKind::Minute)
        } else {
            None
        }
    }
}

impl FromStr for TaskSpec {
    type Err = SpecError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
