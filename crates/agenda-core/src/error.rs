// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for Agenda operations
#[derive(Error, Debug, Diagnostic)]
pub enum AgendaError {
    /// Talk record carries a type tag outside the fixed set
    #[error("Unknown talk type: {tag}")]
    #[diagnostic(
        code(agenda::unknown_talk_type),
        help("Supported types: KEYNOTE, REGULAR_TALK, WORKSHOP, LIGHTNING, CLOSING, LUNCH, TEA")
    )]
    UnknownTalkType {
        #[allow(unused)]
        tag: String,
    },

    /// HHMM value with a minute part of 60 or more
    #[error("Invalid clock time: {value}")]
    #[diagnostic(
        code(agenda::invalid_clock_time),
        help("Clock times are HHMM integers with minutes below 60, e.g. 930 for 9:30")
    )]
    InvalidClockTime {
        #[allow(unused)]
        value: u32,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    #[diagnostic(
        code(agenda::serialization_error),
        help("Ensure the document is valid JSON or YAML")
    )]
    SerializationError {
        #[allow(unused)]
        message: String,
        #[source]
        #[allow(unused)]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Talk source could not be read
    #[error("Talk source unavailable: {path}")]
    #[diagnostic(
        code(agenda::source_unavailable),
        help("Check that the file exists and is readable")
    )]
    SourceUnavailable {
        #[allow(unused)]
        path: String,
        #[source]
        #[allow(unused)]
        source: std::io::Error,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    #[diagnostic(
        code(agenda::internal_error),
        help("This is likely a bug. Please report it with the full error details")
    )]
    InternalError {
        #[allow(unused)]
        message: String,
    },
}

/// Result type alias for Agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;

impl AgendaError {
    /// Create an UnknownTalkType error
    pub fn unknown_talk_type(tag: impl Into<String>) -> Self {
        Self::UnknownTalkType { tag: tag.into() }
    }

    /// Create an InvalidClockTime error
    pub fn invalid_clock_time(value: u32) -> Self {
        Self::InvalidClockTime { value }
    }

    /// Create a SerializationError
    pub fn serialization_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }

    /// Create a SourceUnavailable error
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
