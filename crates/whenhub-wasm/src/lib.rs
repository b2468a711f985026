//! WASM bindings for whenhub-engine.
//!
//! Exposes event evaluation, Easter resolution and the DST state to
//! JavaScript via `wasm-bindgen`. Configuration goes in and reports come out
//! as JSON strings; dates cross the boundary as `YYYY-MM-DD` strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p whenhub-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir www/pkg/ \
//!   target/wasm32-unknown-unknown/release/whenhub_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use whenhub_engine::{catalog, dst, evaluate, load_events, parse_date, EventReport, Locale};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NamedReportDto {
    name: String,
    #[serde(flatten)]
    report: EventReport,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_today(today: &str) -> Result<NaiveDate, JsValue> {
    parse_date(today).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_locale(locale: Option<String>) -> Result<Locale, JsValue> {
    match locale.as_deref() {
        None | Some("de") => Ok(Locale::German),
        Some("en") => Ok(Locale::English),
        Some(other) => Err(JsValue::from_str(&format!(
            "Unknown locale '{}'. Available locales: de, en",
            other
        ))),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Evaluate stored event configuration as of `today`.
///
/// `config_json` holds one configuration object or an array of them. Returns a
/// JSON array with one report per event, each carrying the event's `name` and
/// its `event_type` tag.
///
/// # Arguments
/// - `config_json` -- Event configuration (e.g., `{"event_type":"special","special_type":"easter"}`)
/// - `today` -- Reference day, `YYYY-MM-DD`
/// - `locale` -- Optional countdown language, `"de"` (default) or `"en"`
#[wasm_bindgen(js_name = "evaluateEvents")]
pub fn evaluate_events(
    config_json: &str,
    today: &str,
    locale: Option<String>,
) -> Result<String, JsValue> {
    let today = parse_today(today)?;
    let locale = parse_locale(locale)?;
    let events = load_events(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<NamedReportDto> = events
        .into_iter()
        .map(|event| NamedReportDto {
            report: evaluate(&event.definition, today, locale),
            name: event.name,
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Easter Sunday of `year` as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "easterSunday")]
pub fn easter_sunday(year: i32) -> Result<String, JsValue> {
    whenhub_engine::easter_sunday(year)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| JsValue::from_str(&format!("Year out of range: {}", year)))
}

/// Whether summer time is in effect in `region` (e.g., "eu") on `today`.
#[wasm_bindgen(js_name = "isDstActive")]
pub fn is_dst_active(region: &str, today: &str) -> Result<bool, JsValue> {
    let today = parse_today(today)?;
    let region = catalog::region(region).ok_or_else(|| {
        JsValue::from_str(&format!(
            "Unknown DST region '{}'. Available regions: eu, usa, australia, new_zealand",
            region
        ))
    })?;
    Ok(dst::is_dst_active(&region.rule, today))
}
