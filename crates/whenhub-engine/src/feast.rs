//! Movable feasts: Easter (computus), Pentecost and the Advent Sundays.
//!
//! All results are Western (Gregorian) dates. `None` is only returned for
//! years outside chrono's representable range.

use chrono::{Datelike, Days};
use serde::Serialize;

use crate::date::{self, CalendarDate};

/// Days from Easter Sunday to Pentecost Sunday.
const PENTECOST_OFFSET_DAYS: u64 = 49;

/// Easter Sunday of `year` by the anonymous Gregorian (Meeus/Jones/Butcher)
/// form of Gauss's algorithm.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::feast::easter_sunday;
///
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5));
/// ```
pub fn easter_sunday(year: i32) -> Option<CalendarDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let n = h + l - 7 * m + 114;
    let month = n.div_euclid(31);
    let day = n.rem_euclid(31) + 1;

    date::ymd(year, month as u32, day as u32)
}

/// Pentecost Sunday: seven weeks after Easter.
pub fn pentecost(year: i32) -> Option<CalendarDate> {
    easter_sunday(year)?.checked_add_days(Days::new(PENTECOST_OFFSET_DAYS))
}

/// One of the four Sundays of Advent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdventSunday {
    First,
    Second,
    Third,
    Fourth,
}

impl AdventSunday {
    /// Map `1..=4` to the matching Sunday.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(AdventSunday::First),
            2 => Some(AdventSunday::Second),
            3 => Some(AdventSunday::Third),
            4 => Some(AdventSunday::Fourth),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            AdventSunday::First => 1,
            AdventSunday::Second => 2,
            AdventSunday::Third => 3,
            AdventSunday::Fourth => 4,
        }
    }

    fn weeks_before_fourth(self) -> u64 {
        u64::from(4 - self.number())
    }
}

/// The requested Advent Sunday of `year`.
///
/// The fourth Advent is the last Sunday strictly before December 24. When
/// December 24 is itself a Sunday it does not count, and the fourth Advent
/// falls on December 17. Earlier Advents step back one week each.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::feast::{advent_sunday, AdventSunday};
///
/// assert_eq!(
///     advent_sunday(2026, AdventSunday::Fourth),
///     NaiveDate::from_ymd_opt(2026, 12, 20)
/// );
/// // 2023-12-24 was a Sunday.
/// assert_eq!(
///     advent_sunday(2023, AdventSunday::Fourth),
///     NaiveDate::from_ymd_opt(2023, 12, 17)
/// );
/// ```
pub fn advent_sunday(year: i32, which: AdventSunday) -> Option<CalendarDate> {
    let christmas_eve = date::ymd(year, 12, 24)?;

    // Monday..Saturday step back 1..6 days; a Sunday anchor steps back a full week.
    let back = match christmas_eve.weekday().num_days_from_sunday() {
        0 => 7,
        n => n,
    };

    let fourth = christmas_eve.checked_sub_days(Days::new(u64::from(back)))?;
    fourth.checked_sub_days(Days::new(7 * which.weeks_before_fourth()))
}

/// A holiday whose date is derived from a calculation rather than a fixed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "feast", content = "sunday", rename_all = "snake_case")]
pub enum MovableFeast {
    Easter,
    Pentecost,
    Advent(AdventSunday),
}

impl MovableFeast {
    pub fn resolve(&self, year: i32) -> Option<CalendarDate> {
        match *self {
            MovableFeast::Easter => easter_sunday(year),
            MovableFeast::Pentecost => pentecost(year),
            MovableFeast::Advent(which) => advent_sunday(year, which),
        }
    }
}
