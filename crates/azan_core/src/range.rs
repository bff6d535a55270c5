//! Schedules over a span of dates, and distances between prayers.
//!
//! Every range here is half-open: `from` is included, `till` is not.

use std::collections::BTreeMap;

use azan_calendar::HijriConverter;
use azan_schedule::{time::difference, DailySchedule, FormattedSchedule, PrayerHoursProvider};
use azan_types::{AzanError, ClockDelta, Prayer, RawPrayerHours, TimeOfDay, MINUTES_PER_DAY};
use chrono::NaiveDate;
use tracing::trace;

use crate::engine::PrayerSchedule;

/// Lazily builds one schedule per day in `[from, till)`.
///
/// Stops after yielding the first error.
pub struct ScheduleIter<'a, P, C> {
    engine: &'a PrayerSchedule<P, C>,
    current: NaiveDate,
    till: NaiveDate,
    failed: bool,
}

impl<'a, P: PrayerHoursProvider, C: HijriConverter> ScheduleIter<'a, P, C> {
    pub fn new(engine: &'a PrayerSchedule<P, C>, from: NaiveDate, till: NaiveDate) -> Self {
        Self { engine, current: from, till, failed: false }
    }
}

impl<P: PrayerHoursProvider, C: HijriConverter> Iterator for ScheduleIter<'_, P, C> {
    type Item = Result<DailySchedule, AzanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.current >= self.till {
            return None;
        }
        let date = self.current;
        self.current = date.succ_opt()?;

        trace!(%date, "building schedule in range");
        let result = self.engine.daily(date);
        self.failed = result.is_err();
        Some(result)
    }
}

impl<P: PrayerHoursProvider, C: HijriConverter> PrayerSchedule<P, C> {
    /// Iterates the daily schedules in `[from, till)`.
    pub fn iter_range(&self, from: NaiveDate, till: NaiveDate) -> ScheduleIter<'_, P, C> {
        ScheduleIter::new(self, from, till)
    }

    /// Date to schedule for every day in `[from, till)`.
    ///
    /// Empty when `till <= from`.
    pub fn schedule_over_range(
        &self,
        from: NaiveDate,
        till: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, DailySchedule>, AzanError> {
        self.iter_range(from, till).map(|r| r.map(|s| (s.date(), s))).collect()
    }

    /// Same as [`schedule_over_range`](Self::schedule_over_range), rendered in 12-hour form.
    pub fn formatted_over_range(
        &self,
        from: NaiveDate,
        till: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, FormattedSchedule>, AzanError> {
        self.iter_range(from, till).map(|r| r.map(|s| (s.date(), s.formatted()))).collect()
    }

    /// Raw provider hours for every day in `[from, till)`.
    pub fn hours_over_range(
        &self,
        from: NaiveDate,
        till: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, RawPrayerHours>, AzanError> {
        let mut out = BTreeMap::new();
        let mut date = from;
        while date < till {
            trace!(%date, "raw hours in range");
            out.insert(date, self.raw_hours(date)?);
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        Ok(out)
    }
}

/// Absolute time between two prayers of the same schedule.
///
/// # Errors
/// Returns `PrayerNotScheduled` if either prayer is missing, e.g. Jumuah on a weekday.
pub fn time_difference_between(
    schedule: &DailySchedule,
    first: Prayer,
    second: Prayer,
) -> Result<ClockDelta, AzanError> {
    Ok(difference(schedule.time(first)?, schedule.time(second)?).abs())
}

/// Time between a prayer and an arbitrary clock reading.
///
/// Fajr and Tahajjud probed from the afternoon or evening are counted forward
/// through midnight when they fall earlier on the clock than the probe.
pub fn time_difference_to_arbitrary(
    schedule: &DailySchedule,
    prayer: Prayer,
    clock: TimeOfDay,
) -> Result<ClockDelta, AzanError> {
    let at = schedule.time(prayer)?;
    let overnight = matches!(prayer, Prayer::Fajr | Prayer::Tahajjud) && clock.is_pm() && at < clock;
    if overnight {
        let minutes = MINUTES_PER_DAY - clock.minutes_since_midnight() + at.minutes_since_midnight();
        return Ok(ClockDelta::from_minutes(minutes));
    }
    Ok(difference(at, clock).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use azan_schedule::FixedHours;
    use azan_types::{Institution, Location};
    use chrono_tz::Tz;

    fn engine() -> PrayerSchedule<FixedHours> {
        let location = Location::new(22.805618, 86.2029, Tz::Asia__Kolkata, Institution::default()).unwrap();
        PrayerSchedule::new(location, FixedHours::new(RawPrayerHours::new(5.033, 12.25, 15.75, 18.0, 19.25)))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_range_is_half_open() {
        let e = engine();
        let map = e.schedule_over_range(ymd(2024, 6, 1), ymd(2024, 6, 8)).unwrap();
        assert_eq!(map.len(), 7);
        assert!(map.contains_key(&ymd(2024, 6, 1)));
        assert!(!map.contains_key(&ymd(2024, 6, 8)));
        assert_eq!(map.values().filter(|s| s.is_friday()).count(), 1);
        assert!(e.schedule_over_range(ymd(2024, 6, 8), ymd(2024, 6, 8)).unwrap().is_empty());
        assert!(e.schedule_over_range(ymd(2024, 6, 8), ymd(2024, 6, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_sibling_ranges_agree() {
        let e = engine();
        let (from, till) = (ymd(2024, 6, 1), ymd(2024, 6, 4));
        let schedules = e.schedule_over_range(from, till).unwrap();
        let formatted = e.formatted_over_range(from, till).unwrap();
        let hours = e.hours_over_range(from, till).unwrap();
        assert!(schedules.keys().eq(formatted.keys()));
        assert!(schedules.keys().eq(hours.keys()));
    }

    #[test]
    fn test_iter_stops_after_error() {
        let e = engine();
        let results: Vec<_> = e.iter_range(ymd(2076, 12, 20), ymd(2077, 1, 10)).collect();
        assert!(results.last().unwrap().is_err());
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
    }

    #[test]
    fn test_difference_between_prayers() {
        let s = engine().daily(ymd(2024, 6, 10)).unwrap();
        assert_eq!(time_difference_between(&s, Prayer::Duhur, Prayer::Asr).unwrap(), ClockDelta::new(3, 30));
        assert_eq!(time_difference_between(&s, Prayer::Asr, Prayer::Duhur).unwrap(), ClockDelta::new(3, 30));
        assert!(time_difference_between(&s, Prayer::Jumuah, Prayer::Asr).is_err());
    }

    #[test]
    fn test_difference_to_clock() {
        let s = engine().daily(ymd(2024, 6, 10)).unwrap();
        // 22:00 to Fajr at 05:02 runs through midnight.
        assert_eq!(time_difference_to_arbitrary(&s, Prayer::Fajr, hm(22, 0)).unwrap(), ClockDelta::new(7, 2));
        assert_eq!(time_difference_to_arbitrary(&s, Prayer::Fajr, hm(3, 0)).unwrap(), ClockDelta::new(2, 2));
        assert_eq!(time_difference_to_arbitrary(&s, Prayer::Tahajjud, hm(22, 0)).unwrap(), ClockDelta::new(1, 31));
        assert_eq!(time_difference_to_arbitrary(&s, Prayer::Asr, hm(13, 0)).unwrap(), ClockDelta::new(2, 45));
        assert_eq!(time_difference_to_arbitrary(&s, Prayer::Maghrib, hm(20, 30)).unwrap(), ClockDelta::new(2, 30));
    }
}
