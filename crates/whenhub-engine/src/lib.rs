//! # whenhub-engine
//!
//! Deterministic date calculations for event trackers: trips, milestones,
//! yearly anniversaries, named holidays and daylight-saving transitions.
//!
//! Every calculation is a pure function of its inputs. The caller supplies
//! "today" explicitly, so results are reproducible and can be computed from
//! any thread.
//!
//! ## Modules
//!
//! - [`date`]: Day differences, containment, month lengths
//! - [`weekday`]: Nth / last weekday of a month
//! - [`feast`]: Easter, Pentecost and Advent Sundays
//! - [`recurrence`]: Next/last yearly occurrence, leap-safe anniversaries
//! - [`dst`]: DST transition dates and "is summer time active"
//! - [`progress`]: Remaining days/percent of a ranged event
//! - [`countdown`]: Years/months/weeks/days breakdown and display text
//! - [`catalog`]: Static holiday and DST region tables
//! - [`event`]: Event definitions and the evaluation dispatcher
//! - [`config`]: Stored configuration → event definitions
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod date;
pub mod dst;
pub mod error;
pub mod event;
pub mod feast;
pub mod progress;
pub mod recurrence;
pub mod weekday;

pub use config::{load_events, parse_date, EventConfig, NamedEvent};
pub use countdown::{breakdown, format_countdown, CountdownBreakdown, Locale};
pub use date::CalendarDate;
pub use dst::{is_dst_active, last_dst_event, next_dst_event, DstMode, RegionRule};
pub use error::EngineError;
pub use event::{evaluate, EventDefinition, EventReport};
pub use feast::{advent_sunday, easter_sunday, pentecost, AdventSunday};
pub use progress::{range_progress, Phase, RangeProgress};
pub use recurrence::{next_and_last, Anniversary, RecurrenceResult};
pub use weekday::{last_weekday_of_month, nth_weekday_of_month, WeekdayRule};
