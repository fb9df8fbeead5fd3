//! Agenda Core - Fundamental types for the Agenda conference scheduler
//!
//! This crate provides:
//! - Talk types and their fixed durations
//! - HHMM clock arithmetic
//! - Talk and scheduled-talk data model
//! - Talk source loading (JSON / YAML)
//! - Error types with miette diagnostics

pub mod clock;
pub mod error;
pub mod source;
pub mod talk;

// Re-export commonly used types
pub use clock::{advance, ClockTime, Minutes};
pub use error::{AgendaError, Result};
pub use source::{TalkRecord, TalkSource};
pub use talk::{ScheduledTalk, Talk, TalkType};

/// Serialize a value to pretty JSON
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        AgendaError::serialization_error(
            format!("Failed to serialize to JSON: {}", e),
            Some(Box::new(e)),
        )
    })
}

/// Deserialize a value from JSON
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(data: &str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| {
        AgendaError::serialization_error(
            format!("Failed to deserialize from JSON: {}", e),
            Some(Box::new(e)),
        )
    })
}

/// Deserialize a value from YAML
pub fn from_yaml<T: for<'de> serde::Deserialize<'de>>(data: &str) -> Result<T> {
    serde_yaml::from_str(data).map_err(|e| {
        AgendaError::serialization_error(
            format!("Failed to deserialize from YAML: {}", e),
            Some(Box::new(e)),
        )
    })
}
