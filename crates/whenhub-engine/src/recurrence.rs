//! Yearly recurrence: next and last occurrence of an annual anchor.
//!
//! An *anchor* is any `Fn(i32) -> Option<CalendarDate>` mapping a year to
//! that year's occurrence (a fixed month/day, a movable feast, a weekday rule,
//! a leap-normalized anniversary). The lookup logic here never inspects what
//! the anchor represents, so any calendar rule can be plugged in.

use chrono::Datelike;
use serde::Serialize;

use crate::date::{self, CalendarDate};

/// Next/last occurrence of a yearly anchor relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecurrenceResult {
    /// First occurrence on or after the reference day.
    pub next_occurrence: Option<CalendarDate>,
    /// Latest occurrence strictly before the reference day.
    pub last_occurrence: Option<CalendarDate>,
    /// The reference year's occurrence falls on the reference day.
    pub is_today: bool,
}

/// First occurrence on or after `reference`, looking at this year and then the next.
pub fn next_on_or_after<F>(anchor: F, reference: CalendarDate) -> Option<CalendarDate>
where
    F: Fn(i32) -> Option<CalendarDate>,
{
    let year = reference.year();
    match anchor(year) {
        Some(this_year) if this_year >= reference => Some(this_year),
        _ => anchor(year.checked_add(1)?),
    }
}

/// Latest occurrence strictly before `reference`, looking at this year and then the previous.
pub fn last_before<F>(anchor: F, reference: CalendarDate) -> Option<CalendarDate>
where
    F: Fn(i32) -> Option<CalendarDate>,
{
    let year = reference.year();
    match anchor(year) {
        Some(this_year) if this_year < reference => Some(this_year),
        _ => anchor(year.checked_sub(1)?),
    }
}

/// Latest occurrence on or before `reference`.
///
/// Used where the occurrence day itself already counts as having happened
/// (DST transitions, anniversaries).
pub fn last_on_or_before<F>(anchor: F, reference: CalendarDate) -> Option<CalendarDate>
where
    F: Fn(i32) -> Option<CalendarDate>,
{
    let year = reference.year();
    match anchor(year) {
        Some(this_year) if this_year <= reference => Some(this_year),
        _ => anchor(year.checked_sub(1)?),
    }
}

/// Resolve the next and last occurrence of `anchor` around `reference`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::recurrence::next_and_last;
///
/// let halloween = |year| NaiveDate::from_ymd_opt(year, 10, 31);
/// let today = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
///
/// let result = next_and_last(halloween, today);
/// assert_eq!(result.next_occurrence, NaiveDate::from_ymd_opt(2027, 10, 31));
/// assert_eq!(result.last_occurrence, NaiveDate::from_ymd_opt(2026, 10, 31));
/// assert!(!result.is_today);
/// ```
pub fn next_and_last<F>(anchor: F, reference: CalendarDate) -> RecurrenceResult
where
    F: Fn(i32) -> Option<CalendarDate>,
{
    RecurrenceResult {
        next_occurrence: next_on_or_after(&anchor, reference),
        last_occurrence: last_before(&anchor, reference),
        is_today: anchor(reference.year()) == Some(reference),
    }
}

/// The anniversary of `original` in `year`.
///
/// A February 29 original maps to February 28 in non-leap years and stays on
/// February 29 in leap years.
pub fn anniversary_for_year(original: CalendarDate, year: i32) -> Option<CalendarDate> {
    date::with_year(original, year).or_else(|| date::ymd(year, 2, 28))
}

/// A yearly recurring date anchored on an original event (birthday, wedding day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anniversary {
    original: CalendarDate,
}

impl Anniversary {
    pub fn new(original: CalendarDate) -> Self {
        Self { original }
    }

    pub fn original(&self) -> CalendarDate {
        self.original
    }

    pub fn for_year(&self, year: i32) -> Option<CalendarDate> {
        anniversary_for_year(self.original, year)
    }

    /// Plain yearly recurrence of the anchor, without regard to the original year.
    pub fn recurrence(&self, reference: CalendarDate) -> RecurrenceResult {
        next_and_last(|year| self.for_year(year), reference)
    }

    /// Next anniversary on or after `reference`: this year's anchor if it has
    /// not passed yet, otherwise next year's. The original year plays no part,
    /// so a future original still recurs from the reference year on.
    pub fn next(&self, reference: CalendarDate) -> Option<CalendarDate> {
        next_on_or_after(|year| self.for_year(year), reference)
    }

    /// Most recent anniversary on or before `reference`, including the
    /// original date. `None` until the original date has happened.
    pub fn last(&self, reference: CalendarDate) -> Option<CalendarDate> {
        if self.original > reference {
            return None;
        }
        last_on_or_before(|year| self.for_year(year), reference)
    }

    /// Whether `reference` falls on this year's anchor.
    pub fn is_today(&self, reference: CalendarDate) -> bool {
        self.next(reference) == Some(reference)
    }

    /// See [`anniversary_occurrences`].
    pub fn occurrences(&self, reference: CalendarDate) -> u32 {
        anniversary_occurrences(self.original, reference)
    }

    /// The ordinal year count reached at the next anniversary (e.g. 10 for a
    /// tenth wedding anniversary). `None` while the next anchor still
    /// precedes the original date.
    pub fn years_on_next(&self, reference: CalendarDate) -> Option<i32> {
        self.next(reference)
            .filter(|next| *next >= self.original)
            .map(|next| next.year() - self.original.year())
    }
}

/// How many times `original` has occurred up to and including `reference`.
///
/// The original date is occurrence 1; nothing has occurred before it.
pub fn anniversary_occurrences(original: CalendarDate, reference: CalendarDate) -> u32 {
    if original > reference {
        return 0;
    }

    let mut years = i64::from(reference.year()) - i64::from(original.year());
    if matches!(anniversary_for_year(original, reference.year()), Some(this_year) if this_year > reference) {
        years -= 1;
    }

    u32::try_from((years + 1).max(1)).unwrap_or(u32::MAX)
}
