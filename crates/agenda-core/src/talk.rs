use crate::clock::{ClockTime, Minutes};
use crate::error::{AgendaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of conference session, each with a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalkType {
    Keynote,
    RegularTalk,
    Workshop,
    Lightning,
    Closing,
    Lunch,
    Tea,
}

impl TalkType {
    /// Every talk type, in declaration order
    pub const ALL: [TalkType; 7] = [
        TalkType::Keynote,
        TalkType::RegularTalk,
        TalkType::Workshop,
        TalkType::Lightning,
        TalkType::Closing,
        TalkType::Lunch,
        TalkType::Tea,
    ];

    /// Length of a session of this type
    pub const fn duration(self) -> Minutes {
        match self {
            TalkType::Keynote => 30,
            TalkType::RegularTalk => 30,
            TalkType::Workshop => 60,
            TalkType::Lightning => 15,
            TalkType::Closing => 30,
            TalkType::Lunch => 60,
            TalkType::Tea => 15,
        }
    }

    /// Canonical tag as it appears in talk sources
    pub const fn tag(self) -> &'static str {
        match self {
            TalkType::Keynote => "KEYNOTE",
            TalkType::RegularTalk => "REGULAR_TALK",
            TalkType::Workshop => "WORKSHOP",
            TalkType::Lightning => "LIGHTNING",
            TalkType::Closing => "CLOSING",
            TalkType::Lunch => "LUNCH",
            TalkType::Tea => "TEA",
        }
    }
}

impl fmt::Display for TalkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for TalkType {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        TalkType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| AgendaError::unknown_talk_type(s))
    }
}

/// A talk waiting to be scheduled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talk {
    talk_type: TalkType,
    description: String,
    duration: Minutes,
}

impl Talk {
    /// Create a talk; its duration is fixed by the type
    pub fn new(talk_type: TalkType, description: impl Into<String>) -> Self {
        Self {
            talk_type,
            description: description.into(),
            duration: talk_type.duration(),
        }
    }

    /// Create a talk from a raw type tag, rejecting unknown tags
    pub fn from_tag(tag: &str, description: impl Into<String>) -> Result<Self> {
        Ok(Self::new(tag.parse()?, description))
    }

    pub fn talk_type(&self) -> TalkType {
        self.talk_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }
}

/// A talk pinned to a concrete time window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTalk {
    start_time: ClockTime,
    end_time: ClockTime,
    talk_type: TalkType,
    description: String,
}

impl ScheduledTalk {
    /// Schedule a talk at `start_time`, consuming it
    pub fn new(start_time: ClockTime, talk: Talk) -> Self {
        Self {
            start_time,
            end_time: start_time.advance(talk.duration),
            talk_type: talk.talk_type,
            description: talk.description,
        }
    }

    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    pub fn end_time(&self) -> ClockTime {
        self.end_time
    }

    pub fn talk_type(&self) -> TalkType {
        self.talk_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `time` falls in `[start_time, end_time)`
    pub fn covers(&self, time: ClockTime) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

impl fmt::Display for ScheduledTalk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.start_time, self.talk_type, self.description
        )
    }
}
