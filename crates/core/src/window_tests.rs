// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

fn spec(line: &str) -> TaskSpec {
    TaskSpec::parse(line).unwrap()
}

// 2025-06-15 is a Sunday.
fn sunday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
}

#[test]
fn wildcard_spec_fills_the_whole_window() {
    let spec = spec("* * * * * command");
    let start = sunday_morning();

    let list = build_window(&spec, start, 10);

    assert_eq!(list.len(), 10);
    assert_eq!(list.schedule()[0], start);
    assert_eq!(list.schedule()[9], start + TimeDelta::minutes(9));
}

#[test]
fn window_is_half_open() {
    let spec = spec("* * * * * command");
    let start = sunday_morning();

    let list = build_window(&spec, start, 10);

    // T+10 is outside the window.
    assert!(!list.schedule().contains(&(start + TimeDelta::minutes(10))));
}

#[test]
fn window_not_covering_the_spec_is_empty() {
    let spec = spec("0 0 1 1 * new-year");
    let list = build_window(&spec, sunday_morning(), 10);

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn single_minute_match_inside_the_window() {
    let spec = spec("35 * * * * command");
    let start = sunday_morning();

    let list = build_window(&spec, start, 10);

    assert_eq!(list.schedule(), &[start + TimeDelta::minutes(5)]);
}

#[test]
fn window_crosses_midnight() {
    let spec = spec("0 0 * * * command");
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 23, 55, 0).unwrap();

    let list = build_window(&spec, start, 10);

    assert_eq!(
        list.schedule(),
        &[Utc.with_ymd_and_hms(2025, 6, 16, 0, 0, 0).unwrap()]
    );
}

#[test]
fn weekday_gate_opens_at_midnight() {
    // Sunday 23:58; Monday starts two minutes in.
    let spec = spec("* * * * 1 command");
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 23, 58, 0).unwrap();

    let list = build_window(&spec, start, 5);

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.schedule()[0],
        Utc.with_ymd_and_hms(2025, 6, 16, 0, 0, 0).unwrap()
    );
}

#[test]
fn sunday_matches_day_of_week_seven() {
    let spec = spec("* * * * 7 command");
    let list = build_window(&spec, sunday_morning(), 3);

    assert_eq!(list.len(), 3);
}

#[test]
fn schedule_is_chronological() {
    let spec = spec("*/2 * * * * command");
    let list = build_window(&spec, sunday_morning(), 30);

    let schedule = list.schedule();
    assert!(!schedule.is_empty());
    assert!(schedule.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn work_association_pairs_each_instant_with_the_spec() {
    let spec = spec("* * * * * command");
    let list = build_window(&spec, sunday_morning(), 3);

    let jobs: Vec<_> = list.jobs().collect();
    assert_eq!(jobs.len(), list.len());
    for (index, (at, job_spec)) in jobs.iter().enumerate() {
        assert_eq!(*at, list.schedule()[index]);
        assert!(std::ptr::eq(*job_spec, &spec));
    }
}

#[test]
fn start_seconds_are_preserved_in_matched_instants() {
    // Matching is minute-granular but instants keep their seconds.
    let spec = spec("* * * * * command");
    let start = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 25).unwrap();

    let list = build_window(&spec, start, 2);

    assert_eq!(list.schedule()[0], start);
    assert_eq!(list.schedule()[1], start + TimeDelta::minutes(1));
}

#[test]
fn empty_task_list_reports_empty() {
    let list = TaskList::new();
    assert!(list.is_empty());
    assert_eq!(list.jobs().count(), 0);
}
