//! Arithmetic over [`TimeOfDay`] values.
//!
//! Results wrap modulo 24 hours. Callers working across midnight use
//! [`overnight`] or [`add_offset_with_carry`] to keep the day offset.

use azan_types::{ClockDelta, TimeOfDay, MINUTES_PER_DAY};

/// Converts fractional hours (e.g. `5.5`) to a time of day.
///
/// Rounds to the nearest minute, so `5.033` becomes `05:02`. Values at or past
/// `24.0` wrap to the next morning.
pub fn to_time_of_day(hours: f64) -> TimeOfDay {
    TimeOfDay::from_minutes((hours * 60.0).round() as i64)
}

/// Signed `a - b`, split into hours and minutes of the same sign.
pub fn difference(a: TimeOfDay, b: TimeOfDay) -> ClockDelta {
    ClockDelta::from_minutes(a.minutes_since_midnight() - b.minutes_since_midnight())
}

/// Adds an offset, carrying minutes into hours and wrapping past midnight.
pub fn add_offset(time: TimeOfDay, hours: i64, minutes: i64) -> TimeOfDay {
    add_offset_with_carry(time, hours, minutes).0
}

/// Like [`add_offset`], but also returns how many days the result moved.
pub fn add_offset_with_carry(time: TimeOfDay, hours: i64, minutes: i64) -> (TimeOfDay, i64) {
    let total = time.minutes_since_midnight() + hours * 60 + minutes;
    (TimeOfDay::from_minutes(total), total.div_euclid(MINUTES_PER_DAY))
}

/// Turns a negative same-day difference into the forward duration across midnight.
pub fn overnight(delta: ClockDelta) -> ClockDelta {
    if delta.is_negative() {
        ClockDelta::from_minutes(delta.total_minutes() + MINUTES_PER_DAY)
    } else {
        delta
    }
}
