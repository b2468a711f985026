//! "Nth weekday" and "last weekday" of a month.
//!
//! Weekday indices follow the ISO convention used throughout the engine:
//! 0 = Monday .. 6 = Sunday. Internally rules carry a [`chrono::Weekday`].

use chrono::{Datelike, Days, Weekday};
use serde::Serialize;

use crate::date::{self, CalendarDate};

/// Map a 0 = Monday .. 6 = Sunday index to a [`Weekday`].
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// The `n`th occurrence (1-based) of `weekday` in `month` of `year`.
///
/// Returns `None` when that occurrence does not exist, e.g. the 5th Sunday of
/// a February with only four. Absence is a normal outcome, not an error.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use whenhub_engine::weekday::nth_weekday_of_month;
///
/// // US DST starts on the 2nd Sunday in March.
/// assert_eq!(
///     nth_weekday_of_month(2026, 3, Weekday::Sun, 2),
///     NaiveDate::from_ymd_opt(2026, 3, 8)
/// );
/// assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Sun, 5), None);
/// ```
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    n: u32,
) -> Option<CalendarDate> {
    if n == 0 {
        return None;
    }

    let first_of_month = date::ymd(year, month, 1)?;
    let to_first_match = (7 + weekday.num_days_from_monday()
        - first_of_month.weekday().num_days_from_monday())
        % 7;
    let offset = u64::from(to_first_match) + 7 * u64::from(n - 1);

    let candidate = first_of_month.checked_add_days(Days::new(offset))?;
    // Spilled into a later month: the requested occurrence does not exist.
    (candidate.year() == year && candidate.month() == month).then_some(candidate)
}

/// The last occurrence of `weekday` in `month` of `year`.
///
/// Walks backwards from the month's final day. Every month contains every
/// weekday at least four times, so this only yields `None` for an invalid
/// month or a year outside chrono's representable range.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<CalendarDate> {
    let last_day = date::last_day_of_month(year, month)?;
    let back = (7 + last_day.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last_day.checked_sub_days(Days::new(u64::from(back)))
}

/// Declarative description of a weekday within a month, as used by DST regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum WeekdayRule {
    /// The `n`th `weekday` of `month` (1-based).
    Nth { month: u32, weekday: Weekday, n: u32 },
    /// The final `weekday` of `month`.
    Last { month: u32, weekday: Weekday },
}

impl WeekdayRule {
    /// Resolve this rule for a concrete year.
    pub fn resolve(&self, year: i32) -> Option<CalendarDate> {
        match *self {
            WeekdayRule::Nth { month, weekday, n } => nth_weekday_of_month(year, month, weekday, n),
            WeekdayRule::Last { month, weekday } => last_weekday_of_month(year, month, weekday),
        }
    }

    pub fn month(&self) -> u32 {
        match *self {
            WeekdayRule::Nth { month, .. } | WeekdayRule::Last { month, .. } => month,
        }
    }

    pub fn weekday(&self) -> Weekday {
        match *self {
            WeekdayRule::Nth { weekday, .. } | WeekdayRule::Last { weekday, .. } => weekday,
        }
    }
}
