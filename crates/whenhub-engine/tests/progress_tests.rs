//! Tests for ranged-event progress, including degenerate and inverted ranges.

use chrono::NaiveDate;
use whenhub_engine::progress::{range_progress, Phase, RangeProgress};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn trip() -> (NaiveDate, NaiveDate) {
    (d(2026, 7, 12), d(2026, 7, 26))
}

// ---------------------------------------------------------------------------
// Normal range
// ---------------------------------------------------------------------------

#[test]
fn before_start_is_full_and_inactive() {
    let (start, end) = trip();
    let progress = range_progress(start, end, d(2026, 7, 11));
    assert_eq!(
        progress,
        RangeProgress { left_days: 0, left_percent: 100.0, phase: Phase::Before }
    );
}

#[test]
fn start_day_is_full() {
    let (start, end) = trip();
    let progress = range_progress(start, end, start);
    assert_eq!(progress.phase, Phase::During);
    assert_eq!(progress.left_days, 15);
    assert_eq!(progress.left_percent, 100.0);
}

#[test]
fn midpoint_is_half() {
    let (start, end) = trip();
    let progress = range_progress(start, end, d(2026, 7, 19));
    assert_eq!(progress.left_days, 8);
    assert_eq!(progress.left_percent, 50.0);
}

#[test]
fn percent_is_rounded_to_one_decimal() {
    let (start, end) = trip();
    // 1 of 14 days elapsed: 92.857...
    assert_eq!(range_progress(start, end, d(2026, 7, 13)).left_percent, 92.9);
    // 13 of 14 days elapsed: 7.142...
    assert_eq!(range_progress(start, end, d(2026, 7, 25)).left_percent, 7.1);
}

#[test]
fn end_day_has_one_day_left_and_zero_percent() {
    let (start, end) = trip();
    let progress = range_progress(start, end, end);
    assert_eq!(progress.phase, Phase::During);
    assert_eq!(progress.left_days, 1);
    assert_eq!(progress.left_percent, 0.0);
}

#[test]
fn day_after_end_is_finished() {
    let (start, end) = trip();
    assert_eq!(
        range_progress(start, end, d(2026, 7, 27)),
        RangeProgress { left_days: 0, left_percent: 0.0, phase: Phase::After }
    );
}

#[test]
fn long_range_stays_within_bounds() {
    let start = d(2020, 1, 1);
    let end = d(2030, 12, 31);
    let mut previous = 100.0;
    let mut day = start;
    while day <= end {
        let percent = range_progress(start, end, day).left_percent;
        assert!((0.0..=100.0).contains(&percent));
        assert!(percent <= previous, "percent increased on {}", day);
        previous = percent;
        day = day.succ_opt().unwrap();
    }
}

// ---------------------------------------------------------------------------
// Single-day range
// ---------------------------------------------------------------------------

#[test]
fn single_day_range_on_the_day() {
    let day = d(2026, 8, 1);
    let progress = range_progress(day, day, day);
    assert_eq!(
        progress,
        RangeProgress { left_days: 1, left_percent: 100.0, phase: Phase::During }
    );
}

#[test]
fn single_day_range_around_the_day() {
    let day = d(2026, 8, 1);
    assert_eq!(range_progress(day, day, d(2026, 7, 31)).phase, Phase::Before);
    assert_eq!(range_progress(day, day, d(2026, 7, 31)).left_percent, 100.0);

    let after = range_progress(day, day, d(2026, 8, 2));
    assert_eq!(after.phase, Phase::After);
    assert_eq!(after.left_days, 0);
    assert_eq!(after.left_percent, 0.0);
}

// ---------------------------------------------------------------------------
// Inverted range
// ---------------------------------------------------------------------------

#[test]
fn inverted_range_is_reported_as_finished() {
    let (start, end) = (d(2026, 7, 26), d(2026, 7, 12));
    for reference in [d(2026, 7, 1), d(2026, 7, 20), d(2026, 8, 1)] {
        let progress = range_progress(start, end, reference);
        assert_eq!(progress.phase, Phase::After);
        assert_eq!(progress.left_days, 0);
        assert_eq!(progress.left_percent, 0.0);
        assert!(progress.left_percent.is_finite());
    }
}
