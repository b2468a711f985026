//! Event definitions and the dispatcher that turns them into reports.
//!
//! Each [`EventDefinition`] variant has exactly one evaluation function. The
//! reference day is always passed in; evaluate every event of one pass with
//! the same `today` so the derived facts agree with each other.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{DstRegion, Holiday};
use crate::countdown::{breakdown_until, format_countdown, CountdownBreakdown, Locale};
use crate::date::{self, CalendarDate};
use crate::dst::{self, DstMode};
use crate::progress::{range_progress, RangeProgress};
use crate::recurrence::Anniversary;

/// What the user asked to track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventDefinition {
    /// A multi-day event such as a trip (`start..=end`).
    Ranged { start: CalendarDate, end: CalendarDate },
    /// A one-off day such as a deadline.
    SingleDate { target: CalendarDate },
    /// A yearly recurrence of an original day (birthday, wedding).
    AnnualAnchor { original: CalendarDate },
    /// A catalog holiday.
    NamedHoliday { holiday: Holiday },
    /// DST transitions of a region.
    Dst { region: DstRegion, mode: DstMode },
}

/// A breakdown plus its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    #[serde(flatten)]
    pub breakdown: CountdownBreakdown,
    pub text: String,
}

impl Countdown {
    fn towards(target: Option<CalendarDate>, today: CalendarDate, locale: Locale) -> Self {
        let breakdown = target
            .map(|target| breakdown_until(target, today))
            .unwrap_or_default();
        Self {
            text: format_countdown(&breakdown, locale),
            breakdown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    /// Days until the start (negative once started).
    pub days_until: i64,
    /// Days until the end (negative once over).
    pub days_until_end: i64,
    /// Length of the trip counting both ends.
    pub total_days: i64,
    #[serde(flatten)]
    pub progress: RangeProgress,
    /// Countdown towards the start; zero from the start day on.
    pub countdown: Countdown,
    pub starts_today: bool,
    pub active_today: bool,
    pub ends_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneReport {
    pub target_date: CalendarDate,
    pub days_until: i64,
    pub countdown: Countdown,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnniversaryReport {
    pub original_date: CalendarDate,
    pub next_date: Option<CalendarDate>,
    pub last_date: Option<CalendarDate>,
    pub days_until_next: Option<i64>,
    pub days_since_last: Option<i64>,
    pub occurrences: u32,
    pub years_on_next: Option<i32>,
    pub countdown: Countdown,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolidayReport {
    pub key: &'static str,
    pub name: &'static str,
    pub next_date: Option<CalendarDate>,
    pub last_date: Option<CalendarDate>,
    pub days_until: Option<i64>,
    pub days_since_last: Option<i64>,
    pub countdown: Countdown,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DstReport {
    pub region: &'static str,
    pub region_name: &'static str,
    pub mode: DstMode,
    pub next_date: Option<CalendarDate>,
    /// Most recent transition, including one that happens today.
    pub last_date: Option<CalendarDate>,
    pub days_until: Option<i64>,
    pub days_since_last: Option<i64>,
    pub countdown: Countdown,
    pub is_today: bool,
    pub dst_active: bool,
}

/// Derived facts for one event as of a reference day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventReport {
    Trip(TripReport),
    Milestone(MilestoneReport),
    Anniversary(AnniversaryReport),
    Special(HolidayReport),
    Dst(DstReport),
}

/// Evaluate `event` as of `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::countdown::Locale;
/// use whenhub_engine::event::{evaluate, EventDefinition, EventReport};
///
/// let event = EventDefinition::SingleDate {
///     target: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 12, 17).unwrap();
///
/// let EventReport::Milestone(report) = evaluate(&event, today, Locale::German) else {
///     unreachable!()
/// };
/// assert_eq!(report.days_until, 14);
/// assert_eq!(report.countdown.text, "2 Wochen");
/// ```
pub fn evaluate(event: &EventDefinition, today: CalendarDate, locale: Locale) -> EventReport {
    debug!(?event, %today, "evaluating event");

    match *event {
        EventDefinition::Ranged { start, end } => {
            EventReport::Trip(evaluate_trip(start, end, today, locale))
        }
        EventDefinition::SingleDate { target } => {
            EventReport::Milestone(evaluate_milestone(target, today, locale))
        }
        EventDefinition::AnnualAnchor { original } => {
            EventReport::Anniversary(evaluate_anniversary(original, today, locale))
        }
        EventDefinition::NamedHoliday { holiday } => {
            EventReport::Special(evaluate_holiday(&holiday, today, locale))
        }
        EventDefinition::Dst { region, mode } => {
            EventReport::Dst(evaluate_dst(&region, mode, today, locale))
        }
    }
}

fn evaluate_trip(
    start: CalendarDate,
    end: CalendarDate,
    today: CalendarDate,
    locale: Locale,
) -> TripReport {
    if end < start {
        warn!(%start, %end, "trip ends before it starts; reporting it as finished");
    }

    TripReport {
        start_date: start,
        end_date: end,
        days_until: date::days_until(start, today),
        days_until_end: date::days_until(end, today),
        total_days: date::days_between(start, end),
        progress: range_progress(start, end, today),
        countdown: Countdown::towards(Some(start), today, locale),
        starts_today: date::is_same_day(start, today),
        active_today: date::contains(start, end, today),
        ends_today: date::is_same_day(end, today),
    }
}

fn evaluate_milestone(target: CalendarDate, today: CalendarDate, locale: Locale) -> MilestoneReport {
    MilestoneReport {
        target_date: target,
        days_until: date::days_until(target, today),
        countdown: Countdown::towards(Some(target), today, locale),
        is_today: date::is_same_day(target, today),
    }
}

fn evaluate_anniversary(
    original: CalendarDate,
    today: CalendarDate,
    locale: Locale,
) -> AnniversaryReport {
    let anniversary = Anniversary::new(original);
    let next = anniversary.next(today);
    let last = anniversary.last(today);

    AnniversaryReport {
        original_date: anniversary.original(),
        next_date: next,
        last_date: last,
        days_until_next: next.map(|next| date::days_until(next, today)),
        days_since_last: last.map(|last| -date::days_until(last, today)),
        occurrences: anniversary.occurrences(today),
        years_on_next: anniversary.years_on_next(today),
        countdown: Countdown::towards(next, today, locale),
        is_today: anniversary.is_today(today),
    }
}

fn evaluate_holiday(holiday: &Holiday, today: CalendarDate, locale: Locale) -> HolidayReport {
    let recurrence = holiday.rule.recurrence(today);
    let next = recurrence.next_occurrence;
    let last = recurrence.last_occurrence;

    HolidayReport {
        key: holiday.key,
        name: holiday.name,
        next_date: next,
        last_date: last,
        days_until: next.map(|next| date::days_until(next, today)),
        days_since_last: last.map(|last| -date::days_until(last, today)),
        countdown: Countdown::towards(next, today, locale),
        is_today: recurrence.is_today,
    }
}

fn evaluate_dst(region: &DstRegion, mode: DstMode, today: CalendarDate, locale: Locale) -> DstReport {
    let next = dst::next_dst_event(&region.rule, mode, today);
    let last = dst::last_dst_event(&region.rule, mode, today);

    DstReport {
        region: region.key,
        region_name: region.name,
        mode,
        next_date: next,
        last_date: last,
        days_until: next.map(|next| date::days_until(next, today)),
        days_since_last: last.map(|last| -date::days_until(last, today)),
        countdown: Countdown::towards(next, today, locale),
        is_today: next == Some(today),
        dst_active: dst::is_dst_active(&region.rule, today),
    }
}
