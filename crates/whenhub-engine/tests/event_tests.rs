//! End-to-end tests of the event dispatcher.

use chrono::NaiveDate;
use whenhub_engine::catalog;
use whenhub_engine::countdown::Locale;
use whenhub_engine::dst::DstMode;
use whenhub_engine::event::{evaluate, EventDefinition, EventReport};
use whenhub_engine::progress::Phase;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn trip() -> EventDefinition {
    EventDefinition::Ranged { start: d(2026, 7, 12), end: d(2026, 7, 26) }
}

fn holiday(key: &str) -> EventDefinition {
    EventDefinition::NamedHoliday { holiday: *catalog::holiday(key).unwrap() }
}

fn dst(key: &str, mode: DstMode) -> EventDefinition {
    EventDefinition::Dst { region: *catalog::region(key).unwrap(), mode }
}

// ---------------------------------------------------------------------------
// Trip
// ---------------------------------------------------------------------------

#[test]
fn trip_after_the_end() {
    let EventReport::Trip(report) = evaluate(&trip(), d(2026, 7, 27), Locale::German) else {
        panic!("expected a trip report");
    };
    assert_eq!(report.days_until, -15);
    assert_eq!(report.days_until_end, -1);
    assert_eq!(report.total_days, 15);
    assert_eq!(report.progress.phase, Phase::After);
    assert_eq!(report.progress.left_days, 0);
    assert_eq!(report.progress.left_percent, 0.0);
    assert!(!report.starts_today);
    assert!(!report.active_today);
    assert!(!report.ends_today);
}

#[test]
fn trip_countdown_before_start() {
    let EventReport::Trip(report) = evaluate(&trip(), d(2026, 6, 28), Locale::German) else {
        panic!("expected a trip report");
    };
    assert_eq!(report.days_until, 14);
    assert_eq!(report.countdown.text, "2 Wochen");
    assert_eq!(report.countdown.breakdown.weeks, 2);
    assert_eq!(report.progress.phase, Phase::Before);
}

#[test]
fn trip_on_start_day() {
    let EventReport::Trip(report) = evaluate(&trip(), d(2026, 7, 12), Locale::German) else {
        panic!("expected a trip report");
    };
    assert!(report.starts_today);
    assert!(report.active_today);
    assert!(!report.ends_today);
    assert_eq!(report.countdown.text, "0 Tage");
    assert_eq!(report.progress.left_days, 15);
}

#[test]
fn single_day_trip_starts_and_ends_today() {
    let day = d(2026, 8, 1);
    let event = EventDefinition::Ranged { start: day, end: day };
    let EventReport::Trip(report) = evaluate(&event, day, Locale::German) else {
        panic!("expected a trip report");
    };
    assert!(report.starts_today && report.active_today && report.ends_today);
    assert_eq!(report.total_days, 1);
    assert_eq!(report.progress.left_percent, 100.0);
}

#[test]
fn inverted_trip_is_finished() {
    let event = EventDefinition::Ranged { start: d(2026, 7, 26), end: d(2026, 7, 12) };
    let EventReport::Trip(report) = evaluate(&event, d(2026, 7, 1), Locale::German) else {
        panic!("expected a trip report");
    };
    assert_eq!(report.progress.phase, Phase::After);
    assert!(!report.active_today);
}

// ---------------------------------------------------------------------------
// Milestone
// ---------------------------------------------------------------------------

#[test]
fn milestone_in_the_past_has_negative_days_and_zero_countdown() {
    let event = EventDefinition::SingleDate { target: d(2026, 1, 1) };
    let EventReport::Milestone(report) = evaluate(&event, d(2026, 1, 11), Locale::English) else {
        panic!("expected a milestone report");
    };
    assert_eq!(report.days_until, -10);
    assert!(report.countdown.breakdown.is_zero());
    assert_eq!(report.countdown.text, "0 days");
    assert!(!report.is_today);
}

// ---------------------------------------------------------------------------
// Anniversary
// ---------------------------------------------------------------------------

#[test]
fn anniversary_after_this_years_day() {
    let event = EventDefinition::AnnualAnchor { original: d(2000, 6, 15) };
    let today = d(2026, 10, 19);
    let EventReport::Anniversary(report) = evaluate(&event, today, Locale::German) else {
        panic!("expected an anniversary report");
    };
    assert_eq!(report.next_date, Some(d(2027, 6, 15)));
    assert_eq!(report.last_date, Some(d(2026, 6, 15)));
    assert_eq!(report.days_since_last, Some(126));
    assert_eq!(report.days_until_next, Some((d(2027, 6, 15) - today).num_days()));
    assert_eq!(report.occurrences, 27);
    assert_eq!(report.years_on_next, Some(27));
    assert!(!report.is_today);
}

#[test]
fn anniversary_on_the_day() {
    let event = EventDefinition::AnnualAnchor { original: d(2000, 6, 15) };
    let EventReport::Anniversary(report) = evaluate(&event, d(2026, 6, 15), Locale::German) else {
        panic!("expected an anniversary report");
    };
    assert!(report.is_today);
    assert_eq!(report.days_until_next, Some(0));
    assert_eq!(report.days_since_last, Some(0));
    assert_eq!(report.countdown.text, "0 Tage");
}

#[test]
fn anniversary_with_future_original() {
    let event = EventDefinition::AnnualAnchor { original: d(2030, 5, 1) };
    let EventReport::Anniversary(report) = evaluate(&event, d(2026, 5, 1), Locale::German) else {
        panic!("expected an anniversary report");
    };
    assert_eq!(report.original_date, d(2030, 5, 1));
    assert_eq!(report.next_date, Some(d(2026, 5, 1)));
    assert!(report.is_today);
    assert_eq!(report.last_date, None);
    assert_eq!(report.days_since_last, None);
    assert_eq!(report.occurrences, 0);
    assert_eq!(report.years_on_next, None);
}

// ---------------------------------------------------------------------------
// Special (holiday)
// ---------------------------------------------------------------------------

#[test]
fn christmas_eve_two_days_after() {
    let EventReport::Special(report) =
        evaluate(&holiday("christmas_eve"), d(2026, 12, 26), Locale::German)
    else {
        panic!("expected a holiday report");
    };
    assert_eq!(report.name, "Heilig Abend");
    assert_eq!(report.next_date, Some(d(2027, 12, 24)));
    assert_eq!(report.days_since_last, Some(2));
    assert_eq!(report.days_until, Some(363));
    assert!(!report.is_today);
}

#[test]
fn easter_on_the_day() {
    let EventReport::Special(report) = evaluate(&holiday("easter"), d(2026, 4, 5), Locale::German)
    else {
        panic!("expected a holiday report");
    };
    assert!(report.is_today);
    assert_eq!(report.days_until, Some(0));
    assert_eq!(report.last_date, Some(d(2025, 4, 20)));
}

// ---------------------------------------------------------------------------
// DST
// ---------------------------------------------------------------------------

#[test]
fn eu_next_change_in_october() {
    let EventReport::Dst(report) =
        evaluate(&dst("eu", DstMode::NextChange), d(2026, 10, 19), Locale::German)
    else {
        panic!("expected a dst report");
    };
    assert_eq!(report.next_date, Some(d(2026, 10, 25)));
    assert_eq!(report.days_until, Some(6));
    assert_eq!(report.last_date, Some(d(2026, 3, 29)));
    assert_eq!(report.days_since_last, Some(204));
    assert_eq!(report.countdown.text, "6 Tage");
    assert!(report.dst_active);
    assert!(!report.is_today);
}

#[test]
fn dst_transition_day_is_today() {
    let EventReport::Dst(report) =
        evaluate(&dst("eu", DstMode::NextWinter), d(2026, 10, 25), Locale::German)
    else {
        panic!("expected a dst report");
    };
    assert!(report.is_today);
    assert_eq!(report.last_date, Some(d(2026, 10, 25)));
    assert!(!report.dst_active);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn trip_report_serializes_with_tag_and_flattened_progress() {
    let report = evaluate(&trip(), d(2026, 7, 27), Locale::German);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""event_type":"trip""#), "{}", json);
    assert!(json.contains(r#""phase":"after""#), "{}", json);
    assert!(json.contains(r#""start_date":"2026-07-12""#), "{}", json);
    assert!(json.contains(r#""left_percent":0.0"#), "{}", json);
}

#[test]
fn dst_report_serializes_mode_in_snake_case() {
    let report = evaluate(&dst("usa", DstMode::NextSummer), d(2026, 1, 1), Locale::English);
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["event_type"], "dst");
    assert_eq!(value["mode"], "next_summer");
    assert_eq!(value["next_date"], "2026-03-08");
}
