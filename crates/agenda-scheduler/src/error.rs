// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use agenda_core::TalkType;
use miette::Diagnostic;
use thiserror::Error;

/// Scheduler error type
#[derive(Error, Debug, Diagnostic)]
pub enum SchedulerError {
    /// No talk of the required type is left in the catalog
    #[error("No {talk_type} talk left to anchor")]
    #[diagnostic(
        code(scheduler::anchor_not_found),
        help("Provide at least one {talk_type} talk per conference day, or allow gaps for missing anchors")
    )]
    AnchorNotFound { talk_type: TalkType },

    /// Planner configuration is unusable
    #[error("Invalid planner configuration: {message}")]
    #[diagnostic(
        code(scheduler::invalid_config),
        help("{suggestion}")
    )]
    InvalidConfig { message: String, suggestion: String },

    /// Core error
    #[error("Core error: {0}")]
    #[diagnostic(
        code(scheduler::core_error),
        help("Check the talk source and configuration values")
    )]
    CoreError(#[from] agenda_core::AgendaError),

    /// Internal error
    #[error("Internal error: {message}")]
    #[diagnostic(
        code(scheduler::internal_error),
        help("This is likely a bug. Please report it")
    )]
    InternalError { message: String },
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

impl SchedulerError {
    /// Create an AnchorNotFound error
    pub fn anchor_not_found(talk_type: TalkType) -> Self {
        Self::AnchorNotFound { talk_type }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
