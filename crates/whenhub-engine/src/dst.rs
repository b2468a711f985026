//! Daylight-saving-time transitions for rule-based regions.
//!
//! A region is described by two [`WeekdayRule`]s: the day clocks go forward
//! ("summer") and the day they go back ("winter"). On the transition day
//! itself the new state is already in effect.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::recurrence::{last_on_or_before, next_on_or_after};
use crate::weekday::WeekdayRule;

/// Which side of the DST cycle a transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Clocks go forward; daylight saving time begins.
    Summer,
    /// Clocks go back; standard time resumes.
    Winter,
}

/// Which transition(s) a DST event tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DstMode {
    /// Whichever transition comes first.
    #[default]
    NextChange,
    /// Only the start of summer time.
    NextSummer,
    /// Only the start of winter time.
    NextWinter,
}

/// Summer and winter transition rules of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionRule {
    pub summer: WeekdayRule,
    pub winter: WeekdayRule,
}

impl RegionRule {
    pub fn rule(&self, season: Season) -> &WeekdayRule {
        match season {
            Season::Summer => &self.summer,
            Season::Winter => &self.winter,
        }
    }

    /// The transition of `season` in `year`, if the rule resolves that year.
    pub fn transition(&self, season: Season, year: i32) -> Option<CalendarDate> {
        self.rule(season).resolve(year)
    }

    fn next_transition(&self, season: Season, reference: CalendarDate) -> Option<CalendarDate> {
        next_on_or_after(|year| self.transition(season, year), reference)
    }

    fn last_transition(&self, season: Season, reference: CalendarDate) -> Option<CalendarDate> {
        last_on_or_before(|year| self.transition(season, year), reference)
    }
}

/// Next transition on or after `reference` for the given mode.
///
/// `NextChange` is the earlier of the summer and winter results.
pub fn next_dst_event(
    region: &RegionRule,
    mode: DstMode,
    reference: CalendarDate,
) -> Option<CalendarDate> {
    match mode {
        DstMode::NextSummer => region.next_transition(Season::Summer, reference),
        DstMode::NextWinter => region.next_transition(Season::Winter, reference),
        DstMode::NextChange => earliest(
            next_dst_event(region, DstMode::NextSummer, reference),
            next_dst_event(region, DstMode::NextWinter, reference),
        ),
    }
}

/// Most recent transition on or before `reference` for the given mode.
///
/// The transition day counts as already happened. `NextChange` is the later
/// of the summer and winter results.
pub fn last_dst_event(
    region: &RegionRule,
    mode: DstMode,
    reference: CalendarDate,
) -> Option<CalendarDate> {
    match mode {
        DstMode::NextSummer => region.last_transition(Season::Summer, reference),
        DstMode::NextWinter => region.last_transition(Season::Winter, reference),
        DstMode::NextChange => latest(
            last_dst_event(region, DstMode::NextSummer, reference),
            last_dst_event(region, DstMode::NextWinter, reference),
        ),
    }
}

/// Whether summer time is in effect on `reference`.
///
/// Summer time is active iff the most recent summer transition is more recent
/// than the most recent winter transition. When only one side resolves, that
/// side decides; when neither does, standard time is assumed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whenhub_engine::catalog;
/// use whenhub_engine::dst::is_dst_active;
///
/// let eu = catalog::region("eu").unwrap();
/// let june = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
/// assert!(is_dst_active(&eu.rule, june));
/// ```
pub fn is_dst_active(region: &RegionRule, reference: CalendarDate) -> bool {
    let last_summer = region.last_transition(Season::Summer, reference);
    let last_winter = region.last_transition(Season::Winter, reference);

    match (last_summer, last_winter) {
        (Some(summer), Some(winter)) => summer > winter,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn earliest(a: Option<CalendarDate>, b: Option<CalendarDate>) -> Option<CalendarDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn latest(a: Option<CalendarDate>, b: Option<CalendarDate>) -> Option<CalendarDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}
