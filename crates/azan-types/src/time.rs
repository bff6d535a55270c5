//! Wall-clock time values without a date component.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day with minute precision.
///
/// Always normalized to `00:00..=23:59`. Constructors that accept an
/// unbounded minute count wrap modulo 24 hours and drop the day carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Builds a time from hour and minute. Returns `None` when either is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { minutes: (hour * 60 + minute) as u16 })
        } else {
            None
        }
    }

    /// Builds a time from a signed minute count, wrapping modulo 24 hours.
    pub fn from_minutes(total: i64) -> Self {
        Self { minutes: total.rem_euclid(MINUTES_PER_DAY) as u16 }
    }

    /// Drops seconds and sub-second precision.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self { minutes: (time.hour() * 60 + time.minute()) as u16 }
    }

    pub fn hour(self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(self) -> i64 {
        i64::from(self.minutes)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// True from 12:00 onwards.
    pub fn is_pm(self) -> bool {
        self.hour() >= 12
    }

    /// Renders as `hh:mm AM/PM`.
    pub fn format_12h(self) -> String {
        self.to_naive_time().format("%I:%M %p").to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NaiveTime::parse_from_str(&value, "%H:%M")
            .map(Self::from_naive_time)
            .map_err(|e| format!("invalid time of day {:?}: {}", value, e))
    }
}

/// A signed hours/minutes pair.
///
/// Both components carry the same sign, so `-1:30` is `{ hours: -1, minutes: -30 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClockDelta {
    pub hours: i64,
    pub minutes: i64,
}

impl ClockDelta {
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self::from_minutes(hours * 60 + minutes)
    }

    /// Splits a signed minute count into whole hours and remaining minutes.
    pub fn from_minutes(total: i64) -> Self {
        Self { hours: total / 60, minutes: total % 60 }
    }

    pub fn total_minutes(self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn is_negative(self) -> bool {
        self.total_minutes() < 0
    }

    /// Both components forced non-negative.
    pub fn abs(self) -> Self {
        Self { hours: self.hours.abs(), minutes: self.minutes.abs() }
    }
}

impl fmt::Display for ClockDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}:{:02}", sign, self.hours.abs(), self.minutes.abs())
    }
}
