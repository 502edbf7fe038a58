// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::trigger::FakeTrigger;
use chime_core::{FakeClock, TaskSpec};
use chrono::{TimeZone, Utc};

fn spec(line: &str) -> TaskSpec {
    TaskSpec::parse(line).unwrap()
}

fn no_offset(look_ahead_mins: u32) -> CycleConfig {
    CycleConfig {
        look_ahead_mins,
        start_offset: Duration::ZERO,
    }
}

#[test]
fn cycle_fires_every_matching_minute() {
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let mut trigger = FakeTrigger::new();

    run_cycle(&spec("* * * * * echo hi"), &clock, &mut trigger, &no_offset(3));

    assert_eq!(trigger.fired(), ["echo hi", "echo hi", "echo hi"]);
    // The cycle ends exactly at the window end.
    assert_eq!(clock.now(), start + TimeDelta::minutes(3));
}

#[test]
fn cycle_with_no_work_sleeps_to_the_window_end() {
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let mut trigger = FakeTrigger::new();

    run_cycle(&spec("0 0 1 1 * never"), &clock, &mut trigger, &no_offset(10));

    assert!(trigger.fired().is_empty());
    assert_eq!(clock.now(), start + TimeDelta::minutes(10));
}

#[test]
fn cycle_applies_the_start_offset_once() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let clock = FakeClock::at(now);
    let mut trigger = FakeTrigger::new();
    let config = CycleConfig {
        look_ahead_mins: 1,
        start_offset: Duration::from_secs(5),
    };

    run_cycle(&spec("* * * * * tick"), &clock, &mut trigger, &config);

    assert_eq!(trigger.fired(), ["tick"]);
    // Window start 10:00:05, one slot, window end 10:01:05.
    assert_eq!(clock.now(), now + TimeDelta::seconds(65));
}

#[test]
fn cycle_only_fires_matching_slots() {
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let mut trigger = FakeTrigger::new();

    run_cycle(&spec("*/2 * * * * even"), &clock, &mut trigger, &no_offset(4));

    // Slots 10:00-10:03; */2 matches 10:00 and 10:02.
    assert_eq!(trigger.fired(), ["even", "even"]);
    assert_eq!(clock.now(), start + TimeDelta::minutes(4));
}

#[test]
fn dispatch_waits_for_each_future_instant() {
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let mut trigger = FakeTrigger::new();

    let job_spec = spec("* * * * * step");
    let list = chime_core::build_window(&job_spec, start + TimeDelta::minutes(1), 2);
    dispatch(&list, &clock, &mut trigger);

    assert_eq!(trigger.fired(), ["step", "step"]);
    // Slept up to the last scheduled instant, not past it.
    assert_eq!(clock.now(), start + TimeDelta::minutes(2));
}

#[test]
fn dispatch_fires_past_due_jobs_immediately() {
    let window_start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let job_spec = spec("* * * * * late");
    let list = chime_core::build_window(&job_spec, window_start, 3);

    // The clock is already past the whole window.
    let now = window_start + TimeDelta::minutes(30);
    let clock = FakeClock::at(now);
    let mut trigger = FakeTrigger::new();

    dispatch(&list, &clock, &mut trigger);

    assert_eq!(trigger.fired(), ["late", "late", "late"]);
    // No sleeping happened.
    assert_eq!(clock.now(), now);
}

#[test]
fn run_surfaces_a_parse_failure() {
    let clock = FakeClock::new();
    let mut trigger = FakeTrigger::new();

    let err = run("s * * * * broken", &clock, &mut trigger, &no_offset(1)).unwrap_err();
    assert!(matches!(err, EngineError::Spec(_)));
    assert!(trigger.fired().is_empty());
}
