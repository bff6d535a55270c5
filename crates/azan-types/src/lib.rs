//! Core types shared by the `azan` crates.

pub mod error;
pub mod time;
pub mod types;

pub use error::AzanError;
pub use time::{ClockDelta, TimeOfDay, MINUTES_PER_DAY};
pub use types::{Institution, Location, Prayer, RawPrayerHours};
