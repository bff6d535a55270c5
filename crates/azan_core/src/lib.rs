//! Islamic prayer schedule engine.
//!
//! Ties a [`PrayerHoursProvider`] and a [`HijriConverter`] to a fixed
//! [`Location`] and answers daily schedule, current/next prayer and
//! date-range queries.

pub mod config;
pub mod engine;
pub mod extension;
pub mod range;

pub use azan_calendar::{CalendarBridge, HijriConverter, HijriDate, HijriMonth, IslamicWeekday, TabularConverter};
pub use azan_schedule::{
    build_schedule, current_prayer, next_prayer, time, DailySchedule, FixedHours, FormattedSchedule, HoursFn,
    IshaOverride, PrayerHoursProvider, ScheduleContext, ScheduleContextBuilder,
};
pub use azan_types::{AzanError, ClockDelta, Institution, Location, Prayer, RawPrayerHours, TimeOfDay};
pub use config::AzanConfig;
pub use engine::PrayerSchedule;
pub use extension::PrayerScheduleExt;
pub use range::{time_difference_between, time_difference_to_arbitrary, ScheduleIter};

pub mod prelude {
    pub use crate::{
        AzanConfig, AzanError, DailySchedule, FormattedSchedule, HijriMonth, Institution, Location, Prayer,
        PrayerHoursProvider, PrayerSchedule, PrayerScheduleExt, TimeOfDay,
    };
}

use chrono::NaiveDate;

/// One-shot schedule for `date` with the default calendar and rules.
pub fn daily_schedule<P: PrayerHoursProvider>(
    date: NaiveDate,
    location: Location,
    provider: P,
) -> Result<DailySchedule, AzanError> {
    PrayerSchedule::new(location, provider).daily(date)
}
