//! Static catalogs of named holidays and DST regions.
//!
//! Catalog entries are pure data. Resolvers only look at the *shape* of a
//! rule (fixed day, movable feast, weekday rule), never at the key, so a new
//! holiday or region is a new row here and nothing else.

use chrono::Weekday;
use chrono_tz::Tz;
use serde::Serialize;

use crate::date::{self, CalendarDate};
use crate::dst::RegionRule;
use crate::error::{EngineError, Result};
use crate::feast::{AdventSunday, MovableFeast};
use crate::recurrence::{next_and_last, RecurrenceResult};
use crate::weekday::WeekdayRule;

/// Grouping of holidays, mirroring how they are offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    /// Christmas, Easter, Advent and other traditional feasts.
    Traditional,
    /// New Year's Day and New Year's Eve.
    Calendar,
    /// Start of the seasons (fixed approximations, not exact equinoxes).
    Astronomical,
}

/// How a holiday's date is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HolidayRule {
    Fixed { month: u32, day: u32 },
    Movable { feast: MovableFeast },
}

impl HolidayRule {
    pub fn resolve(&self, year: i32) -> Option<CalendarDate> {
        match *self {
            HolidayRule::Fixed { month, day } => date::ymd(year, month, day),
            HolidayRule::Movable { feast } => feast.resolve(year),
        }
    }

    pub fn recurrence(&self, reference: CalendarDate) -> RecurrenceResult {
        next_and_last(|year| self.resolve(year), reference)
    }
}

/// A named catalog holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub key: &'static str,
    pub name: &'static str,
    pub category: HolidayCategory,
    pub rule: HolidayRule,
}

/// A named DST region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DstRegion {
    pub key: &'static str,
    pub name: &'static str,
    pub rule: RegionRule,
}

const fn fixed(
    key: &'static str,
    name: &'static str,
    category: HolidayCategory,
    month: u32,
    day: u32,
) -> Holiday {
    Holiday {
        key,
        name,
        category,
        rule: HolidayRule::Fixed { month, day },
    }
}

const fn movable(key: &'static str, name: &'static str, feast: MovableFeast) -> Holiday {
    Holiday {
        key,
        name,
        category: HolidayCategory::Traditional,
        rule: HolidayRule::Movable { feast },
    }
}

use HolidayCategory::{Astronomical, Calendar, Traditional};

static HOLIDAYS: [Holiday; 17] = [
    fixed("christmas_eve", "Heilig Abend", Traditional, 12, 24),
    fixed("christmas_day", "1. Weihnachtstag", Traditional, 12, 25),
    fixed("boxing_day", "2. Weihnachtstag", Traditional, 12, 26),
    fixed("halloween", "Halloween", Traditional, 10, 31),
    movable("easter", "Ostersonntag", MovableFeast::Easter),
    movable("pentecost", "Pfingstsonntag", MovableFeast::Pentecost),
    fixed("nikolaus", "Nikolaus", Traditional, 12, 6),
    movable("advent_1", "1. Advent", MovableFeast::Advent(AdventSunday::First)),
    movable("advent_2", "2. Advent", MovableFeast::Advent(AdventSunday::Second)),
    movable("advent_3", "3. Advent", MovableFeast::Advent(AdventSunday::Third)),
    movable("advent_4", "4. Advent", MovableFeast::Advent(AdventSunday::Fourth)),
    fixed("new_year", "Neujahr", Calendar, 1, 1),
    fixed("new_years_eve", "Silvester", Calendar, 12, 31),
    fixed("spring_start", "Frühlingsanfang", Astronomical, 3, 20),
    fixed("summer_start", "Sommeranfang", Astronomical, 6, 21),
    fixed("autumn_start", "Herbstanfang", Astronomical, 9, 23),
    fixed("winter_start", "Winteranfang", Astronomical, 12, 21),
];

static REGIONS: [DstRegion; 4] = [
    DstRegion {
        key: "eu",
        name: "EU",
        rule: RegionRule {
            summer: WeekdayRule::Last { month: 3, weekday: Weekday::Sun },
            winter: WeekdayRule::Last { month: 10, weekday: Weekday::Sun },
        },
    },
    DstRegion {
        key: "usa",
        name: "USA",
        rule: RegionRule {
            summer: WeekdayRule::Nth { month: 3, weekday: Weekday::Sun, n: 2 },
            winter: WeekdayRule::Nth { month: 11, weekday: Weekday::Sun, n: 1 },
        },
    },
    DstRegion {
        key: "australia",
        name: "Australien",
        rule: RegionRule {
            summer: WeekdayRule::Nth { month: 10, weekday: Weekday::Sun, n: 1 },
            winter: WeekdayRule::Nth { month: 4, weekday: Weekday::Sun, n: 1 },
        },
    },
    DstRegion {
        key: "new_zealand",
        name: "Neuseeland",
        rule: RegionRule {
            summer: WeekdayRule::Last { month: 9, weekday: Weekday::Sun },
            winter: WeekdayRule::Nth { month: 4, weekday: Weekday::Sun, n: 1 },
        },
    },
];

/// IANA zone patterns mapped to region keys. A trailing `/` matches the whole area.
static TIMEZONE_REGIONS: [(&str, &str); 8] = [
    ("Europe/", "eu"),
    ("America/New_York", "usa"),
    ("America/Chicago", "usa"),
    ("America/Denver", "usa"),
    ("America/Los_Angeles", "usa"),
    ("America/Toronto", "usa"),
    ("Australia/", "australia"),
    ("Pacific/Auckland", "new_zealand"),
];

pub fn holidays() -> &'static [Holiday] {
    &HOLIDAYS
}

pub fn holiday(key: &str) -> Option<&'static Holiday> {
    HOLIDAYS.iter().find(|h| h.key == key)
}

pub fn holidays_in(category: HolidayCategory) -> impl Iterator<Item = &'static Holiday> {
    HOLIDAYS.iter().filter(move |h| h.category == category)
}

pub fn regions() -> &'static [DstRegion] {
    &REGIONS
}

pub fn region(key: &str) -> Option<&'static DstRegion> {
    REGIONS.iter().find(|r| r.key == key)
}

/// Pick the DST region that applies to an IANA timezone.
///
/// Returns `Ok(None)` for valid zones outside every known region (e.g. zones
/// without DST).
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimezone`] if `timezone` is not a valid IANA name.
pub fn region_for_timezone(timezone: &str) -> Result<Option<&'static DstRegion>> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| EngineError::InvalidTimezone(timezone.to_string()))?;
    let name = tz.name();

    let key = TIMEZONE_REGIONS.iter().find_map(|(pattern, key)| {
        let matches = if pattern.ends_with('/') {
            name.starts_with(pattern)
        } else {
            name == *pattern
        };
        matches.then_some(*key)
    });

    Ok(key.and_then(region))
}
