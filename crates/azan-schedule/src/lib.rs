//! Daily prayer schedule engine.
//!
//! Turns raw fractional prayer hours into an ordered [`DailySchedule`] and
//! answers which prayer window is active at a given time of day.

pub mod builder;
pub mod context;
pub mod provider;
pub mod resolver;
pub mod time;

pub use builder::{build_schedule, DailySchedule, FormattedSchedule};
pub use context::{IshaOverride, ScheduleContext, ScheduleContextBuilder};
pub use provider::{FixedHours, HoursFn, PrayerHoursProvider};
pub use resolver::{current_prayer, next_prayer};
