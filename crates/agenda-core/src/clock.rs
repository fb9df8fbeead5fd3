use crate::error::{AgendaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration in whole minutes
pub type Minutes = u32;

/// Time of day in HHMM encoding (930 = 9:30)
///
/// Hours are not wrapped at midnight, so `2330` advanced by an hour is
/// `2430`. The minute part is always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Create a clock time from its HHMM encoding
    pub fn new(hhmm: u32) -> Result<Self> {
        if hhmm % 100 >= 60 {
            return Err(AgendaError::invalid_clock_time(hhmm));
        }
        Ok(Self(hhmm))
    }

    /// Create a clock time from separate hour and minute parts
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self> {
        if minutes >= 60 {
            return Err(AgendaError::invalid_clock_time(hours * 100 + minutes));
        }
        Ok(Self(hours * 100 + minutes))
    }

    /// Const constructor for fixed times, e.g. `ClockTime::hm(9, 30)`
    ///
    /// Panics if `minutes >= 60`; in a `const` item that is a compile error.
    pub const fn hm(hours: u32, minutes: u32) -> Self {
        assert!(minutes < 60, "minute part must be below 60");
        Self(hours * 100 + minutes)
    }

    pub fn hours(&self) -> u32 {
        self.0 / 100
    }

    pub fn minutes(&self) -> u32 {
        self.0 % 100
    }

    /// HHMM integer encoding
    pub fn as_hhmm(&self) -> u32 {
        self.0
    }

    /// Add a number of minutes, carrying into the hour part
    pub fn advance(self, minutes: Minutes) -> Self {
        Self(advance(self.0, minutes))
    }
}

/// Add `minutes` to an HHMM-encoded time of day
pub fn advance(base: u32, minutes: Minutes) -> u32 {
    let mm = base % 100 + minutes;
    let hh = base / 100 + mm / 60;
    hh * 100 + mm % 60
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<u32> for ClockTime {
    type Error = AgendaError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ClockTime> for u32 {
    fn from(t: ClockTime) -> Self {
        t.0
    }
}
