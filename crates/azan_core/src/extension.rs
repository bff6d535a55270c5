//! Extension trait for `NaiveDate`.

use azan_calendar::HijriConverter;
use azan_schedule::{DailySchedule, FormattedSchedule, PrayerHoursProvider};
use azan_types::{AzanError, Prayer, TimeOfDay};
use chrono::NaiveDate;

use crate::engine::PrayerSchedule;

/// Extends `NaiveDate` with schedule lookups against an engine.
pub trait PrayerScheduleExt {
    /// The full schedule for this date.
    fn prayer_schedule_with<P, C>(&self, engine: &PrayerSchedule<P, C>) -> Result<DailySchedule, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter;

    fn formatted_schedule_with<P, C>(&self, engine: &PrayerSchedule<P, C>) -> Result<FormattedSchedule, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter;

    fn prayer_time_with<P, C>(&self, prayer: Prayer, engine: &PrayerSchedule<P, C>) -> Result<TimeOfDay, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter;

    /// Finds the next Friday on or after this date (up to a week ahead).
    fn next_jumuah(&self) -> Option<NaiveDate>;
}

impl PrayerScheduleExt for NaiveDate {
    fn prayer_schedule_with<P, C>(&self, engine: &PrayerSchedule<P, C>) -> Result<DailySchedule, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter,
    {
        engine.daily(*self)
    }

    fn formatted_schedule_with<P, C>(&self, engine: &PrayerSchedule<P, C>) -> Result<FormattedSchedule, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter,
    {
        engine.formatted(*self)
    }

    fn prayer_time_with<P, C>(&self, prayer: Prayer, engine: &PrayerSchedule<P, C>) -> Result<TimeOfDay, AzanError>
    where
        P: PrayerHoursProvider,
        C: HijriConverter,
    {
        engine.prayer_time(*self, prayer)
    }

    fn next_jumuah(&self) -> Option<NaiveDate> {
        use chrono::{Datelike, Weekday};
        let mut d = *self;
        for _ in 0..7 {
            if d.weekday() == Weekday::Fri {
                return Some(d);
            }
            d = d.succ_opt()?;
        }
        None
    }
}
