//! Hijri calendar bridge.
//!
//! Wraps an external Gregorian-to-Hijri converter behind [`HijriConverter`] and
//! exposes the month, weekday and sunset-aware date queries the schedule needs.

pub mod bridge;
pub mod names;

pub use bridge::{CalendarBridge, HijriConverter, HijriDate, TabularConverter};
pub use names::{HijriMonth, IslamicWeekday};
