//! Error types for whenhub-engine operations.
//!
//! The date algorithms themselves never fail: absence is an `Option` and
//! misconfigured ranges degrade to boundary values. Errors only arise while
//! turning user configuration into engine inputs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown special event: {0}")]
    UnknownHoliday(String),

    #[error("Unknown DST region: {0}")]
    UnknownRegion(String),

    #[error("Missing required field '{field}' for {event_type} event")]
    MissingField {
        event_type: &'static str,
        field: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
