//! Coarse years/months/weeks/days breakdown of a day count, plus display text.
//!
//! Uses fixed-size approximations (365-day years, 30-day months), which is
//! plenty for a countdown display and keeps the breakdown independent of the
//! calendar position of the target.

use serde::{Deserialize, Serialize};

use crate::date::{self, CalendarDate};

const DAYS_PER_YEAR: u64 = 365;
const DAYS_PER_MONTH: u64 = 30;
const DAYS_PER_WEEK: u64 = 7;

/// A day count split into approximate calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CountdownBreakdown {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
}

impl CountdownBreakdown {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Total days represented by this breakdown under the fixed approximations.
    pub fn total_days(&self) -> u64 {
        self.years * DAYS_PER_YEAR + self.months * DAYS_PER_MONTH + self.weeks * DAYS_PER_WEEK + self.days
    }
}

/// Split `total_days` into years, months, weeks and days.
///
/// Zero or negative input (target reached or passed) yields an all-zero breakdown.
///
/// # Examples
///
/// ```
/// use whenhub_engine::countdown::{breakdown, CountdownBreakdown};
///
/// assert_eq!(
///     breakdown(14),
///     CountdownBreakdown { years: 0, months: 0, weeks: 2, days: 0 }
/// );
/// assert!(breakdown(-5).is_zero());
/// ```
pub fn breakdown(total_days: i64) -> CountdownBreakdown {
    let Ok(remaining) = u64::try_from(total_days) else {
        return CountdownBreakdown::default();
    };

    let years = remaining / DAYS_PER_YEAR;
    let remaining = remaining % DAYS_PER_YEAR;
    let months = remaining / DAYS_PER_MONTH;
    let remaining = remaining % DAYS_PER_MONTH;

    CountdownBreakdown {
        years,
        months,
        weeks: remaining / DAYS_PER_WEEK,
        days: remaining % DAYS_PER_WEEK,
    }
}

/// Breakdown of the days from `today` until `target`.
pub fn breakdown_until(target: CalendarDate, today: CalendarDate) -> CountdownBreakdown {
    breakdown(date::days_until(target, today))
}

/// Display language for countdown text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    German,
    English,
}

struct UnitNames {
    singular: &'static str,
    plural: &'static str,
}

struct Phrases {
    units: [UnitNames; 4],
    zero: &'static str,
}

const GERMAN: Phrases = Phrases {
    units: [
        UnitNames { singular: "Jahr", plural: "Jahre" },
        UnitNames { singular: "Monat", plural: "Monate" },
        UnitNames { singular: "Woche", plural: "Wochen" },
        UnitNames { singular: "Tag", plural: "Tage" },
    ],
    zero: "0 Tage",
};

const ENGLISH: Phrases = Phrases {
    units: [
        UnitNames { singular: "year", plural: "years" },
        UnitNames { singular: "month", plural: "months" },
        UnitNames { singular: "week", plural: "weeks" },
        UnitNames { singular: "day", plural: "days" },
    ],
    zero: "0 days",
};

impl Locale {
    fn phrases(self) -> &'static Phrases {
        match self {
            Locale::German => &GERMAN,
            Locale::English => &ENGLISH,
        }
    }

    /// The phrase shown once a target has been reached.
    pub fn zero_phrase(self) -> &'static str {
        self.phrases().zero
    }
}

/// Render a breakdown as text, e.g. `"1 Jahr, 2 Monate, 3 Tage"`.
///
/// Only non-zero components appear, largest first. An all-zero breakdown
/// renders as the locale's zero phrase.
pub fn format_countdown(breakdown: &CountdownBreakdown, locale: Locale) -> String {
    let phrases = locale.phrases();
    let values = [breakdown.years, breakdown.months, breakdown.weeks, breakdown.days];

    let parts: Vec<String> = values
        .iter()
        .zip(phrases.units.iter())
        .filter(|(value, _)| **value > 0)
        .map(|(value, unit)| {
            let name = if *value == 1 { unit.singular } else { unit.plural };
            format!("{} {}", value, name)
        })
        .collect();

    if parts.is_empty() {
        phrases.zero.to_string()
    } else {
        parts.join(", ")
    }
}
