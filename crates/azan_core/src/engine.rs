//! The schedule engine for one fixed location.

use azan_calendar::{CalendarBridge, HijriConverter, HijriDate, IslamicWeekday, TabularConverter};
use azan_schedule::{build_schedule, resolver, DailySchedule, FormattedSchedule, PrayerHoursProvider, ScheduleContext};
use azan_types::{AzanError, Location, Prayer, RawPrayerHours, TimeOfDay};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

/// Prayer schedule engine bound to a location and calculation convention.
///
/// Holds no per-date state: every query takes its date explicitly, so one
/// engine can be shared between threads.
#[derive(Debug, Clone)]
pub struct PrayerSchedule<P, C = TabularConverter> {
    location: Location,
    provider: P,
    calendar: CalendarBridge<C>,
    context: ScheduleContext,
}

impl<P: PrayerHoursProvider> PrayerSchedule<P, TabularConverter> {
    /// Engine using the tabular Hijri calendar without adjustment.
    pub fn new(location: Location, provider: P) -> Self {
        Self::with_converter(location, provider, TabularConverter::default())
    }
}

impl<P: PrayerHoursProvider, C: HijriConverter> PrayerSchedule<P, C> {
    pub fn with_converter(location: Location, provider: P, converter: C) -> Self {
        Self {
            location,
            provider,
            calendar: CalendarBridge::new(converter),
            context: ScheduleContext::default(),
        }
    }

    pub fn context(mut self, context: ScheduleContext) -> Self {
        self.context = context;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn calendar(&self) -> &CalendarBridge<C> {
        &self.calendar
    }

    pub fn schedule_context(&self) -> &ScheduleContext {
        &self.context
    }

    /// Raw fractional hours from the provider.
    pub fn raw_hours(&self, date: NaiveDate) -> Result<RawPrayerHours, AzanError> {
        self.provider.raw_hours(date, &self.location)
    }

    /// The full schedule for `date`.
    pub fn daily(&self, date: NaiveDate) -> Result<DailySchedule, AzanError> {
        let raw = self.raw_hours(date)?;
        let hijri = self.calendar.hijri_date(date)?;
        let month = hijri.month_of_year()?;
        let weekday = IslamicWeekday::from_number(hijri.weekday)?.weekday();
        build_schedule(date, &raw, self.location.institution, month, weekday, &self.context)
    }

    /// The schedule for `date` rendered as `hh:mm AM/PM`.
    pub fn formatted(&self, date: NaiveDate) -> Result<FormattedSchedule, AzanError> {
        self.daily(date).map(|s| s.formatted())
    }

    pub fn prayer_time(&self, date: NaiveDate, prayer: Prayer) -> Result<TimeOfDay, AzanError> {
        self.daily(date)?.time(prayer)
    }

    pub fn current_prayer(&self, date: NaiveDate, now: NaiveTime) -> Result<Prayer, AzanError> {
        resolver::current_prayer(now, &self.daily(date)?)
    }

    pub fn next_prayer(&self, date: NaiveDate, now: NaiveTime) -> Result<Prayer, AzanError> {
        resolver::next_prayer(now, &self.daily(date)?)
    }

    /// Current prayer at an instant, read on the location's wall clock.
    pub fn current_prayer_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<Prayer, AzanError> {
        let local = self.local(instant);
        self.current_prayer(local.date(), local.time())
    }

    /// Next prayer at an instant, read on the location's wall clock.
    pub fn next_prayer_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<Prayer, AzanError> {
        let local = self.local(instant);
        self.next_prayer(local.date(), local.time())
    }

    /// Hijri date for `date` as seen at `now_hour`, rolling over after Maghrib.
    pub fn hijri_date_at(&self, date: NaiveDate, now_hour: u32) -> Result<HijriDate, AzanError> {
        let maghrib = self.raw_hours(date)?.maghrib;
        self.calendar.hijri_date_at(date, maghrib, now_hour)
    }

    /// Hijri date at an instant on the location's wall clock.
    pub fn hijri_date_now<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<HijriDate, AzanError> {
        let local = self.local(instant);
        self.hijri_date_at(local.date(), local.hour())
    }

    fn local<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> NaiveDateTime {
        instant.with_timezone(&self.location.timezone).naive_local()
    }
}
