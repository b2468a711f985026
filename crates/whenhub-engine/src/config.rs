//! User configuration → [`EventDefinition`].
//!
//! This is the only place that parses strings. The keys match the stored
//! configuration entries (`event_type`, `start_date`, `special_type`, ...), so
//! existing entries load unchanged. Fields that only matter to presentation
//! (images, notes, URLs) are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;
use crate::date::CalendarDate;
use crate::dst::DstMode;
use crate::error::{EngineError, Result};
use crate::event::EventDefinition;

/// Category value that marks a special event as a DST event.
const DST_CATEGORY: &str = "dst";

/// The kind of event a configuration entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Trip,
    Milestone,
    Anniversary,
    Special,
    Dst,
}

impl EventType {
    fn as_str(self) -> &'static str {
        match self {
            EventType::Trip => "trip",
            EventType::Milestone => "milestone",
            EventType::Anniversary => "anniversary",
            EventType::Special => "special",
            EventType::Dst => "dst",
        }
    }
}

/// One stored event configuration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    pub event_type: EventType,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Milestone target, or the original day of an anniversary.
    #[serde(default)]
    pub target_date: Option<String>,
    /// Catalog key of a special event (e.g. `"easter"`).
    #[serde(default)]
    pub special_type: Option<String>,
    /// `"dst"` turns a special event into a DST event.
    #[serde(default)]
    pub special_category: Option<String>,
    #[serde(default)]
    pub dst_type: Option<DstMode>,
    /// Region key (e.g. `"eu"`); takes precedence over `timezone`.
    #[serde(default)]
    pub dst_region: Option<String>,
    /// IANA timezone used to pick a DST region when `dst_region` is absent.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// An event definition together with its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEvent {
    pub name: String,
    pub definition: EventDefinition,
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for anything else, including
/// impossible days such as `2026-02-30`.
pub fn parse_date(value: &str) -> Result<CalendarDate> {
    CalendarDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidDate(format!("'{}': {}", value, e)))
}

impl EventConfig {
    fn required_date(&self, value: &Option<String>, field: &'static str) -> Result<CalendarDate> {
        let raw = value.as_deref().ok_or(EngineError::MissingField {
            event_type: self.event_type.as_str(),
            field,
        })?;
        parse_date(raw)
    }

    fn is_dst(&self) -> bool {
        self.event_type == EventType::Dst
            || self.special_category.as_deref() == Some(DST_CATEGORY)
    }

    fn dst_definition(&self) -> Result<EventDefinition> {
        let region = match (&self.dst_region, &self.timezone) {
            (Some(key), _) => {
                catalog::region(key).ok_or_else(|| EngineError::UnknownRegion(key.clone()))?
            }
            (None, Some(tz)) => catalog::region_for_timezone(tz)?
                .ok_or_else(|| EngineError::UnknownRegion(format!("no DST region for timezone {}", tz)))?,
            (None, None) => {
                return Err(EngineError::MissingField {
                    event_type: self.event_type.as_str(),
                    field: "dst_region",
                })
            }
        };

        Ok(EventDefinition::Dst {
            region: *region,
            mode: self.dst_type.unwrap_or_default(),
        })
    }

    /// Display name, falling back to a generic one.
    pub fn display_name(&self) -> String {
        self.event_name
            .clone()
            .unwrap_or_else(|| format!("Unnamed {}", self.event_type.as_str()))
    }
}

impl TryFrom<&EventConfig> for EventDefinition {
    type Error = EngineError;

    fn try_from(config: &EventConfig) -> Result<Self> {
        if config.is_dst() {
            return config.dst_definition();
        }

        let definition = match config.event_type {
            EventType::Trip => {
                let start = config.required_date(&config.start_date, "start_date")?;
                let end = config.required_date(&config.end_date, "end_date")?;
                EventDefinition::Ranged { start, end }
            }
            EventType::Milestone => EventDefinition::SingleDate {
                target: config.required_date(&config.target_date, "target_date")?,
            },
            EventType::Anniversary => EventDefinition::AnnualAnchor {
                original: config.required_date(&config.target_date, "target_date")?,
            },
            EventType::Special => {
                let key = config.special_type.as_deref().ok_or(EngineError::MissingField {
                    event_type: "special",
                    field: "special_type",
                })?;
                let holiday =
                    catalog::holiday(key).ok_or_else(|| EngineError::UnknownHoliday(key.to_string()))?;
                EventDefinition::NamedHoliday { holiday: *holiday }
            }
            EventType::Dst => config.dst_definition()?,
        };

        Ok(definition)
    }
}

impl TryFrom<&EventConfig> for NamedEvent {
    type Error = EngineError;

    fn try_from(config: &EventConfig) -> Result<Self> {
        Ok(NamedEvent {
            name: config.display_name(),
            definition: EventDefinition::try_from(config)?,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(EventConfig),
    Many(Vec<EventConfig>),
}

/// Parse a JSON document holding one event configuration or an array of them.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] for malformed JSON, and the
/// conversion errors of the first invalid entry otherwise.
pub fn load_events(json: &str) -> Result<Vec<NamedEvent>> {
    let configs = match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::One(config) => vec![config],
        OneOrMany::Many(configs) => configs,
    };
    debug!(count = configs.len(), "loaded event configuration");

    configs.iter().map(NamedEvent::try_from).collect()
}
