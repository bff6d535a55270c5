use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::TimeOfDay;
use crate::types::Prayer;

/// Minimum Gregorian year for Hijri conversion.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Maximum Gregorian year for Hijri conversion.
pub const HIJRI_MAX_YEAR: i32 = 2076;

/// Errors from azan operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum AzanError {
    /// Date outside supported range (1938-2076).
    #[error("Date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Hijri month index outside 1-12.
    #[error("Hijri month index {0} is outside 1..=12")]
    InvalidMonth(u32),

    /// Weekday index outside 1-7.
    #[error("Weekday index {0} is outside 1..=7")]
    InvalidWeekday(u32),

    /// Coordinates outside the valid range.
    #[error("Invalid location: {reason}")]
    InvalidLocation { reason: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The prayer is not part of the schedule for that date (e.g. Jumuah outside Friday).
    #[error("{prayer} is not scheduled on {date}")]
    PrayerNotScheduled { prayer: Prayer, date: NaiveDate },

    /// No prayer window contains the probe time. Only possible for a schedule
    /// whose times are out of order.
    #[error("No prayer window contains {time}; schedule is not monotonic")]
    UnclassifiedTime { time: TimeOfDay },

    /// The Hijri converter returned unusable data.
    #[error("Calendar conversion failed: {0}")]
    Calendar(String),

    /// The prayer-hours provider failed.
    #[error("Prayer hours unavailable: {0}")]
    Provider(String),
}

impl AzanError {
    /// Creates a `DateOutOfRange` error with standard bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(HIJRI_MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(HIJRI_MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates an `InvalidLocation` error.
    pub fn invalid_location(reason: impl Into<String>) -> Self {
        Self::InvalidLocation { reason: reason.into() }
    }
}
