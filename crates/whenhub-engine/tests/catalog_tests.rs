//! Tests for the holiday and DST region catalogs.

use chrono::{Datelike, NaiveDate, Weekday};
use whenhub_engine::catalog::{
    self, holiday, holidays, holidays_in, region, region_for_timezone, regions, HolidayCategory,
    HolidayRule,
};
use whenhub_engine::dst::Season;
use whenhub_engine::error::EngineError;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

#[test]
fn catalog_sizes() {
    assert_eq!(holidays().len(), 17);
    assert_eq!(regions().len(), 4);
}

#[test]
fn holidays_by_category() {
    assert_eq!(holidays_in(HolidayCategory::Traditional).count(), 11);
    assert_eq!(holidays_in(HolidayCategory::Calendar).count(), 2);
    assert_eq!(holidays_in(HolidayCategory::Astronomical).count(), 4);
}

#[test]
fn holiday_keys_are_unique() {
    let mut keys: Vec<&str> = holidays().iter().map(|h| h.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), holidays().len());
}

#[test]
fn lookup_by_key() {
    let easter = holiday("easter").expect("easter is in the catalog");
    assert_eq!(easter.name, "Ostersonntag");
    assert_eq!(easter.rule.resolve(2026), Some(d(2026, 4, 5)));

    let eve = holiday("christmas_eve").unwrap();
    assert_eq!(eve.rule, HolidayRule::Fixed { month: 12, day: 24 });

    assert!(holiday("festivus").is_none());
}

#[test]
fn every_holiday_resolves_across_centuries() {
    for h in holidays() {
        for year in 1900..=2200 {
            assert!(h.rule.resolve(year).is_some(), "{} does not resolve in {}", h.key, year);
        }
    }
}

#[test]
fn advent_holidays_are_sundays_in_order() {
    let advent: Vec<NaiveDate> = (1..=4)
        .map(|n| holiday(&format!("advent_{}", n)).unwrap().rule.resolve(2026).unwrap())
        .collect();
    assert_eq!(advent, vec![d(2026, 11, 29), d(2026, 12, 6), d(2026, 12, 13), d(2026, 12, 20)]);
    assert!(advent.iter().all(|day| day.weekday() == Weekday::Sun));
}

#[test]
fn holiday_recurrence_after_the_day() {
    let result = catalog::holiday("christmas_eve").unwrap().rule.recurrence(d(2026, 12, 26));
    assert_eq!(result.next_occurrence, Some(d(2027, 12, 24)));
    assert_eq!(result.last_occurrence, Some(d(2026, 12, 24)));
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

#[test]
fn every_region_resolves_both_seasons() {
    for r in regions() {
        for year in 2000..=2100 {
            for season in [Season::Summer, Season::Winter] {
                let day = r.rule.transition(season, year);
                assert!(day.is_some(), "{} {:?} missing in {}", r.key, season, year);
                assert_eq!(day.unwrap().weekday(), Weekday::Sun);
            }
        }
    }
}

#[test]
fn region_lookup() {
    assert_eq!(region("eu").unwrap().name, "EU");
    assert_eq!(region("new_zealand").unwrap().name, "Neuseeland");
    assert!(region("atlantis").is_none());
}

// ---------------------------------------------------------------------------
// region_for_timezone
// ---------------------------------------------------------------------------

#[test]
fn european_zones_map_to_eu() {
    for tz in ["Europe/Berlin", "Europe/London", "Europe/Lisbon"] {
        assert_eq!(region_for_timezone(tz).unwrap().map(|r| r.key), Some("eu"), "{}", tz);
    }
}

#[test]
fn listed_american_zones_map_to_usa() {
    assert_eq!(region_for_timezone("America/Chicago").unwrap().map(|r| r.key), Some("usa"));
    assert_eq!(region_for_timezone("America/New_York").unwrap().map(|r| r.key), Some("usa"));
    assert!(region_for_timezone("America/Phoenix").unwrap().is_none());
}

#[test]
fn southern_zones() {
    assert_eq!(
        region_for_timezone("Australia/Sydney").unwrap().map(|r| r.key),
        Some("australia")
    );
    assert_eq!(
        region_for_timezone("Pacific/Auckland").unwrap().map(|r| r.key),
        Some("new_zealand")
    );
}

#[test]
fn zones_without_a_region() {
    assert!(region_for_timezone("UTC").unwrap().is_none());
    assert!(region_for_timezone("Asia/Tokyo").unwrap().is_none());
}

#[test]
fn invalid_zone_is_an_error() {
    let err = region_for_timezone("Mars/Base").unwrap_err();
    assert!(matches!(err, EngineError::InvalidTimezone(ref tz) if tz == "Mars/Base"));
}
