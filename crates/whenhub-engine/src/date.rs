//! Calendar date primitives shared by every resolver.
//!
//! All functions take the reference day explicitly. Nothing in this crate
//! reads the system clock.

use chrono::{Datelike, NaiveDate};

/// A proleptic Gregorian calendar day, already normalized to the caller's
/// local calendar.
pub type CalendarDate = NaiveDate;

/// Build a date from its components, returning `None` for impossible days
/// such as February 30.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<CalendarDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Signed number of days from `today` until `target`.
///
/// Negative when `target` lies in the past.
pub fn days_until(target: CalendarDate, today: CalendarDate) -> i64 {
    (target - today).num_days()
}

/// Number of days spanned by `start..=end`, counting both ends.
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn is_same_day(a: CalendarDate, b: CalendarDate) -> bool {
    a == b
}

/// Whether `day` lies inside `start..=end`.
///
/// An inverted range (`end < start`) contains nothing.
pub fn contains(start: CalendarDate, end: CalendarDate, day: CalendarDate) -> bool {
    start <= day && day <= end
}

/// The final day of `month` in `year`.
///
/// Computed as the day before the first of the following month, so leap years
/// fall out of the day-count arithmetic with no special case. `None` for a
/// month outside `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<CalendarDate> {
    ymd(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    ymd(next_year, next_month, 1)?.pred_opt()
}

/// Whether `year` has a February 29.
pub fn is_leap_year(year: i32) -> bool {
    ymd(year, 2, 29).is_some()
}

/// Same month and day in another year, or `None` if that day does not exist there.
pub fn with_year(date: CalendarDate, year: i32) -> Option<CalendarDate> {
    date.with_year(year)
}
