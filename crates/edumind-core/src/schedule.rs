//! Study schedule entries.
//!
//! Times are zero-padded 24h `HH:MM` strings, so ordering the text orders the
//! times. [`ClockTime`] enforces that format at every boundary where a time
//! enters the system.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated `HH:MM` wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(String);

impl ClockTime {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(ValidationError::InvalidClockTime(s.to_string()));
        }
        let hours: u32 = s[..2].parse().unwrap_or(99);
        let minutes: u32 = s[3..].parse().unwrap_or(99);
        if hours > 23 || minutes > 59 {
            return Err(ValidationError::InvalidClockTime(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self("08:00".into())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.0
    }
}

impl std::str::FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One block of the study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub time: ClockTime,
    pub subject: String,
    /// Planned minutes, always > 0.
    #[serde(rename = "duration")]
    pub duration_min: u32,
}

/// A `{time, subject, duration}` triple as produced by the assistant,
/// before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub time: ClockTime,
    pub subject: String,
    #[serde(rename = "duration")]
    pub duration_min: u32,
}

impl ScheduleItem {
    /// Build an item with a fresh id, or `None` for a blank subject or a
    /// zero duration.
    pub fn new(time: ClockTime, subject: &str, duration_min: u32) -> Option<Self> {
        let subject = subject.trim();
        if subject.is_empty() || duration_min == 0 {
            return None;
        }
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            time,
            subject: subject.to_string(),
            duration_min,
        })
    }

    pub fn from_plan(item: PlanItem) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time: item.time,
            subject: item.subject,
            duration_min: item.duration_min,
        }
    }
}

/// Stable sort by time ascending.
pub fn sort_by_time(items: &mut [ScheduleItem]) {
    items.sort_by(|a, b| a.time.cmp(&b.time));
}

pub fn is_time_sorted(items: &[ScheduleItem]) -> bool {
    items.windows(2).all(|w| w[0].time <= w[1].time)
}
