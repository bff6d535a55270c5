//! Source of raw astronomical prayer hours.

use azan_types::{AzanError, Location, RawPrayerHours};
use chrono::NaiveDate;
use std::fmt;

/// Astronomical prayer-hours provider.
///
/// Implementations compute Fajr through Isha as fractional hours in the
/// location's local time. How they do so is opaque to the schedule engine.
pub trait PrayerHoursProvider: fmt::Debug + Send + Sync {
    fn raw_hours(&self, date: NaiveDate, location: &Location) -> Result<RawPrayerHours, AzanError>;
}

impl<P: PrayerHoursProvider + ?Sized> PrayerHoursProvider for &P {
    fn raw_hours(&self, date: NaiveDate, location: &Location) -> Result<RawPrayerHours, AzanError> {
        (**self).raw_hours(date, location)
    }
}

impl<P: PrayerHoursProvider + ?Sized> PrayerHoursProvider for Box<P> {
    fn raw_hours(&self, date: NaiveDate, location: &Location) -> Result<RawPrayerHours, AzanError> {
        (**self).raw_hours(date, location)
    }
}

/// Same hours for every date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHours(RawPrayerHours);

impl FixedHours {
    pub fn new(hours: RawPrayerHours) -> Self {
        Self(hours)
    }
}

impl PrayerHoursProvider for FixedHours {
    fn raw_hours(&self, _date: NaiveDate, _location: &Location) -> Result<RawPrayerHours, AzanError> {
        Ok(self.0)
    }
}

/// Adapts a closure into a provider.
pub struct HoursFn<F>(pub F);

impl<F> fmt::Debug for HoursFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HoursFn")
    }
}

impl<F> PrayerHoursProvider for HoursFn<F>
where
    F: Fn(NaiveDate, &Location) -> Result<RawPrayerHours, AzanError> + Send + Sync,
{
    fn raw_hours(&self, date: NaiveDate, location: &Location) -> Result<RawPrayerHours, AzanError> {
        (self.0)(date, location)
    }
}
