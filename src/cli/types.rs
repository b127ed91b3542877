//! Newtype wrappers for NBA identifiers and seasons.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CourtsideError, Result};

/// Type-safe wrapper for NBA franchise IDs (e.g. 1610612741 for Chicago).
///
/// Prevents mixing up team IDs with the player IDs that travel alongside
/// them through the batch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for NBA player IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NBA season identified by its starting year, rendered in the
/// `"2024-25"` form the stats API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    /// Current season: a new one starts each October.
    fn default() -> Self {
        let now = Utc::now();
        let year = now.year() as u16;
        if now.month() >= 10 {
            Self(year)
        } else {
            Self(year - 1)
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        // Accept either "2024" or "2024-25".
        let invalid = || CourtsideError::InvalidSeason {
            value: s.to_string(),
        };
        let (start, suffix) = match s.split_once('-') {
            Some((start, suffix)) => (start, Some(suffix)),
            None => (s, None),
        };
        let year: u16 = start.parse().map_err(|_| invalid())?;
        if let Some(suffix) = suffix {
            // The suffix must be the two-digit end year, e.g. "2024-25".
            if suffix != format!("{:02}", (year + 1) % 100) {
                return Err(invalid());
            }
        }
        Ok(Self(year))
    }
}
