//! Agenda Scheduler - talk packing and conference planning
//!
//! This crate provides:
//! - The talk catalog with greedy, budgeted selection
//! - Selection filter predicates (type exclusion, remaining budget)
//! - Slot packing into contiguous time windows
//! - Fixed-time anchors and breaks
//! - Merging of extra tracks over a base day
//! - Multi-day, multi-track conference planning

pub mod anchor;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod merge;
pub mod packer;
pub mod planner;
pub mod types;

// Re-export commonly used types
pub use anchor::{place_anchor, place_break};
pub use catalog::TalkCatalog;
pub use error::{Result, SchedulerError};
pub use merge::merge;
pub use packer::pack;
pub use planner::{
    ConferencePlanner, ConferenceSchedule, MissingAnchorPolicy, PlannerConfig, TemplateEntry,
    TrackSchedule,
};
pub use types::{FilterResult, SelectionContext};
