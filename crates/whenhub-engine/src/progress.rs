//! Remaining days and remaining percentage of a start/end bounded event.

use serde::Serialize;

use crate::date::CalendarDate;

/// Where a reference day sits relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Before,
    During,
    After,
}

/// Progress of a ranged event as of a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeProgress {
    /// Days left including the reference day; 0 outside the range.
    pub left_days: i64,
    /// Share of the range still ahead, rounded to one decimal, in `0.0..=100.0`.
    pub left_percent: f64,
    pub phase: Phase,
}

impl RangeProgress {
    const NOT_STARTED: Self = Self {
        left_days: 0,
        left_percent: 100.0,
        phase: Phase::Before,
    };

    const FINISHED: Self = Self {
        left_days: 0,
        left_percent: 0.0,
        phase: Phase::After,
    };
}

/// Compute the progress of `start..=end` as of `reference`.
///
/// A single-day range (`start == end`) reports 100% and one day left on that
/// day. An inverted range (`end < start`) is reported as finished; flagging
/// the misconfiguration is up to the caller.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::progress::{range_progress, Phase};
///
/// let start = NaiveDate::from_ymd_opt(2026, 7, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 7, 26).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 7, 19).unwrap();
///
/// let progress = range_progress(start, end, today);
/// assert_eq!(progress.phase, Phase::During);
/// assert_eq!(progress.left_days, 8);
/// assert_eq!(progress.left_percent, 50.0);
/// ```
pub fn range_progress(start: CalendarDate, end: CalendarDate, reference: CalendarDate) -> RangeProgress {
    if end < start || reference > end {
        return RangeProgress::FINISHED;
    }
    if reference < start {
        return RangeProgress::NOT_STARTED;
    }

    let left_days = (end - reference).num_days() + 1;
    let total_days = (end - start).num_days();

    let left_percent = if total_days == 0 {
        100.0
    } else {
        let elapsed = (reference - start).num_days() as f64;
        round_to_tenth(100.0 - elapsed / total_days as f64 * 100.0)
    };

    RangeProgress {
        left_days,
        left_percent,
        phase: Phase::During,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
