// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron field classification and expansion
//!
//! A field expression is classified into exactly one of five syntactic
//! forms and expanded into the ordered list of integer values it denotes
//! for a given field kind. Classification is tried in precedence order:
//! wildcard, simple, range, interval, list; the first match wins.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static SIMPLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("constant regex pattern is valid"));

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}$").expect("constant regex pattern is valid")
});

static INTERVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}|\*)/[0-9]{1,2}$").expect("constant regex pattern is valid")
});

static LIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}(-[0-9]{1,2})?)(,[0-9]{1,2}(-[0-9]{1,2})?)+$")
        .expect("constant regex pattern is valid")
});

/// One of the five cron dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All five kinds in cron line order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Smallest value in the canonical domain.
    pub fn min(self) -> u32 {
        match self {
            FieldKind::Minute | FieldKind::Hour => 0,
            FieldKind::DayOfMonth | FieldKind::Month | FieldKind::DayOfWeek => 1,
        }
    }

    /// Largest value in the canonical domain. Day-of-week 7 is Sunday.
    pub fn max(self) -> u32 {
        match self {
            FieldKind::Minute => 59,
            FieldKind::Hour => 23,
            FieldKind::DayOfMonth => 31,
            FieldKind::Month => 12,
            FieldKind::DayOfWeek => 7,
        }
    }

    /// The full canonical domain, ascending.
    pub fn domain(self) -> std::ops::RangeInclusive<u32> {
        self.min()..=self.max()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        };
        write!(f, "{}", name)
    }
}

/// Errors from expanding a single field expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("non-numeric bound at range start: {0}")]
    RangeStart(String),
    #[error("non-numeric bound at range end: {0}")]
    RangeEnd(String),
    #[error("invalid expression for value {0}")]
    InvalidExpression(String),
}

/// The raw text of one cron field. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldExpr(String);

impl FieldExpr {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }

    fn is_simple(&self) -> bool {
        SIMPLE_PATTERN.is_match(&self.0)
    }

    fn is_range(&self) -> bool {
        RANGE_PATTERN.is_match(&self.0)
    }

    fn is_interval(&self) -> bool {
        INTERVAL_PATTERN.is_match(&self.0)
    }

    fn is_list(&self) -> bool {
        LIST_PATTERN.is_match(&self.0)
    }

    /// Expand into the ordered values this expression denotes for `kind`.
    ///
    /// Simple values are not checked against the kind's domain here; an
    /// out-of-domain value just never matches a real calendar value.
    /// List expansion concatenates its elements left-to-right without
    /// sorting or deduplication.
    pub fn expand(&self, kind: FieldKind) -> Result<Vec<u32>, ExpandError> {
        if self.is_wildcard() {
            Ok(kind.domain().collect())
        } else if self.is_simple() {
            self.expand_simple()
        } else if self.is_range() {
            self.expand_range()
        } else if self.is_interval() {
            self.expand_interval(kind)
        } else if self.is_list() {
            self.expand_list(kind)
        } else {
            Err(ExpandError::InvalidExpression(self.0.clone()))
        }
    }

    fn expand_simple(&self) -> Result<Vec<u32>, ExpandError> {
        let value = self
            .0
            .parse::<u32>()
            .map_err(|_| ExpandError::InvalidExpression(self.0.clone()))?;
        Ok(vec![value])
    }

    fn expand_range(&self) -> Result<Vec<u32>, ExpandError> {
        let Some((start, end)) = self.0.split_once('-') else {
            return Err(ExpandError::InvalidExpression(self.0.clone()));
        };
        let start = start
            .parse::<u32>()
            .map_err(|_| ExpandError::RangeStart(start.to_string()))?;
        let end = end
            .parse::<u32>()
            .map_err(|_| ExpandError::RangeEnd(end.to_string()))?;

        // An inverted range denotes the empty set.
        Ok((start..=end).collect())
    }

    fn expand_interval(&self, kind: FieldKind) -> Result<Vec<u32>, ExpandError> {
        let Some((base, step)) = self.0.split_once('/') else {
            return Err(ExpandError::InvalidExpression(self.0.clone()));
        };
        let offset = if base == "*" {
            0
        } else {
            base.parse::<u32>()
                .map_err(|_| ExpandError::RangeStart(base.to_string()))?
        };
        let step = step
            .parse::<u32>()
            .map_err(|_| ExpandError::RangeEnd(step.to_string()))?;
        if step == 0 {
            // A zero step would never advance.
            return Err(ExpandError::InvalidExpression(self.0.clone()));
        }

        // Upper bound is exclusive for minute, hour, day-of-month and
        // month, but inclusive for day-of-week: */2 on day-of-week yields
        // 1,3,5,7 while */2 on month stops at 11. Existing schedules
        // depend on this asymmetry, so it must not be unified.
        let max = kind.max();
        let mut values = Vec::new();
        let mut value = kind.min() + offset;
        while value < max || (kind == FieldKind::DayOfWeek && value == max) {
            values.push(value);
            value += step;
        }
        Ok(values)
    }

    fn expand_list(&self, kind: FieldKind) -> Result<Vec<u32>, ExpandError> {
        let mut values = Vec::new();
        for item in self.0.split(',') {
            values.extend(FieldExpr::new(item).expand(kind)?);
        }
        Ok(values)
    }
}

impl fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
