//! Assembles the ordered daily schedule from raw prayer hours.

use azan_calendar::HijriMonth;
use azan_types::{AzanError, Institution, Prayer, RawPrayerHours, TimeOfDay};
use chrono::{NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::context::ScheduleContext;
use crate::time::{add_offset, difference, overnight, to_time_of_day};

/// Prayer times for one calendar date, in schedule order.
///
/// Friday schedules hold seven entries (Jumuah after Duhur), other days six.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct DailySchedule {
    date: NaiveDate,
    weekday: Weekday,
    entries: SmallVec<[(Prayer, TimeOfDay); 7]>,
}

impl DailySchedule {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn is_friday(&self) -> bool {
        self.weekday == Weekday::Fri
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, TimeOfDay)> + '_ {
        self.entries.iter().copied()
    }

    pub fn prayers(&self) -> impl Iterator<Item = Prayer> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn get(&self, prayer: Prayer) -> Option<TimeOfDay> {
        self.entries.iter().find(|(p, _)| *p == prayer).map(|(_, t)| *t)
    }

    /// # Errors
    /// Returns `PrayerNotScheduled` for Jumuah on any day but Friday.
    pub fn time(&self, prayer: Prayer) -> Result<TimeOfDay, AzanError> {
        self.get(prayer).ok_or(AzanError::PrayerNotScheduled { prayer, date: self.date })
    }

    /// 12-hour rendering of every entry, same order.
    pub fn formatted(&self) -> FormattedSchedule {
        FormattedSchedule {
            entries: self.entries.iter().map(|(p, t)| (*p, t.format_12h())).collect(),
        }
    }
}

/// Prayer name to `hh:mm AM/PM`, in schedule order.
///
/// Serializes as a map whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSchedule {
    entries: SmallVec<[(Prayer, String); 7]>,
}

impl FormattedSchedule {
    pub fn get(&self, prayer: Prayer) -> Option<&str> {
        self.entries.iter().find(|(p, _)| *p == prayer).map(|(_, s)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        self.entries.iter().map(|(p, s)| (*p, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormattedSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prayer, time) in &self.entries {
            map.serialize_entry(prayer.name(), time)?;
        }
        map.end()
    }
}

/// Builds the schedule for `date`.
///
/// Fajr, Duhur, Asr and Maghrib come straight from `raw`. Isha comes from
/// `raw` unless an override in `ctx` matches the institution and Hijri month.
/// Fridays add Jumuah after Duhur. Tahajjud is placed at the midpoint of the
/// night between Maghrib and the next Fajr.
///
/// # Errors
/// Returns `Provider` when a raw value is not a finite hour in `0.0..=24.0`.
pub fn build_schedule(
    date: NaiveDate,
    raw: &RawPrayerHours,
    institution: Institution,
    month: HijriMonth,
    weekday: Weekday,
    ctx: &ScheduleContext,
) -> Result<DailySchedule, AzanError> {
    if let Some((prayer, value)) = raw.first_invalid() {
        return Err(AzanError::Provider(format!("{} hour {} for {} is not a valid hour of day", prayer, value, date)));
    }

    let fajr = to_time_of_day(raw.fajr);
    let duhur = to_time_of_day(raw.duhur);
    let asr = to_time_of_day(raw.asr);
    let maghrib = to_time_of_day(raw.maghrib);

    let isha = match ctx.isha_override(institution, month) {
        Some(rule) => {
            debug!(%date, %institution, %month, offset = %rule.after_maghrib, "isha fixed after maghrib");
            add_offset(maghrib, rule.after_maghrib.hours, rule.after_maghrib.minutes)
        }
        None => to_time_of_day(raw.isha),
    };

    let mut entries: SmallVec<[(Prayer, TimeOfDay); 7]> = SmallVec::new();
    entries.push((Prayer::Fajr, fajr));
    entries.push((Prayer::Duhur, duhur));
    if weekday == Weekday::Fri {
        let offset = ctx.jumuah_offset;
        entries.push((Prayer::Jumuah, add_offset(duhur, offset.hours, offset.minutes)));
    }
    entries.push((Prayer::Asr, asr));
    entries.push((Prayer::Maghrib, maghrib));
    entries.push((Prayer::Isha, isha));
    entries.push((Prayer::Tahajjud, tahajjud(maghrib, fajr)));

    debug!(%date, ?weekday, entries = entries.len(), "schedule built");
    Ok(DailySchedule { date, weekday, entries })
}

/// Midpoint of the night from Maghrib to the following Fajr, truncated to the minute.
///
/// Although Tahajjud is traditionally the last third of the night, this is
/// the half-way point; existing consumers rely on that value.
fn tahajjud(maghrib: TimeOfDay, fajr: TimeOfDay) -> TimeOfDay {
    let night = overnight(difference(fajr, maghrib));
    let hours = night.hours / 2;
    let minutes = (night.hours % 2) * 30 + night.minutes / 2;
    add_offset(maghrib, hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    fn raw() -> RawPrayerHours {
        RawPrayerHours::new(5.033, 12.25, 15.75, 18.0, 19.25)
    }

    fn build(weekday: Weekday, institution: Institution, month: HijriMonth) -> DailySchedule {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        build_schedule(date, &raw(), institution, month, weekday, &ScheduleContext::default()).unwrap()
    }

    #[test]
    fn test_weekday_schedule() {
        let s = build(Weekday::Mon, Institution::UniversityOfIslamicSciencesKarachi, HijriMonth::Shaban);
        let got: Vec<_> = s.iter().collect();
        assert_eq!(
            got,
            vec![
                (Prayer::Fajr, hm(5, 2)),
                (Prayer::Duhur, hm(12, 15)),
                (Prayer::Asr, hm(15, 45)),
                (Prayer::Maghrib, hm(18, 0)),
                (Prayer::Isha, hm(19, 15)),
                (Prayer::Tahajjud, hm(23, 31)),
            ]
        );
        assert!(s.get(Prayer::Jumuah).is_none());
        assert!(matches!(s.time(Prayer::Jumuah), Err(AzanError::PrayerNotScheduled { .. })));
    }

    #[test]
    fn test_friday_adds_jumuah() {
        let s = build(Weekday::Fri, Institution::UniversityOfIslamicSciencesKarachi, HijriMonth::Shaban);
        assert_eq!(s.len(), 7);
        assert_eq!(s.get(Prayer::Duhur), Some(hm(12, 15)));
        assert_eq!(s.get(Prayer::Jumuah), Some(hm(13, 15)));
        let order: Vec<_> = s.prayers().collect();
        assert_eq!(&order[..4], &[Prayer::Fajr, Prayer::Duhur, Prayer::Jumuah, Prayer::Asr]);
    }

    #[test]
    fn test_ramadan_umm_al_qura_isha() {
        let s = build(Weekday::Mon, Institution::UmmAlQuraUniversityMecca, HijriMonth::Ramadan);
        assert_eq!(s.get(Prayer::Isha), Some(hm(20, 0)));
    }

    #[test]
    fn test_isha_rule_needs_both_conditions() {
        let outside = build(Weekday::Mon, Institution::UmmAlQuraUniversityMecca, HijriMonth::Shawwal);
        assert_eq!(outside.get(Prayer::Isha), Some(hm(19, 15)));
        let other = build(Weekday::Mon, Institution::MuslimWorldLeague, HijriMonth::Ramadan);
        assert_eq!(other.get(Prayer::Isha), Some(hm(19, 15)));
    }

    #[test]
    fn test_tahajjud_is_night_midpoint() {
        assert_eq!(tahajjud(hm(18, 0), hm(5, 2)), hm(23, 31));
        assert_eq!(tahajjud(hm(19, 0), hm(5, 0)), hm(0, 0));
        assert_eq!(tahajjud(hm(20, 30), hm(3, 15)), hm(23, 52));
    }

    #[test]
    fn test_invalid_raw_hours() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let bad = RawPrayerHours::new(5.0, 12.0, 15.0, f64::INFINITY, 19.0);
        let err = build_schedule(date, &bad, Institution::default(), HijriMonth::Rajab, Weekday::Mon, &ScheduleContext::default());
        assert!(matches!(err, Err(AzanError::Provider(_))));
    }

    #[test]
    fn test_formatted_keeps_order() {
        let s = build(Weekday::Fri, Institution::UniversityOfIslamicSciencesKarachi, HijriMonth::Shaban);
        let f = s.formatted();
        assert_eq!(f.get(Prayer::Fajr), Some("05:02 AM"));
        assert_eq!(f.get(Prayer::Jumuah), Some("01:15 PM"));
        assert_eq!(f.get(Prayer::Tahajjud), Some("11:31 PM"));
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(
            json,
            r#"{"Fajr":"05:02 AM","Duhur":"12:15 PM","Jumuah":"01:15 PM","Asr":"03:45 PM","Maghrib":"06:00 PM","Isha":"07:15 PM","Tahajjud":"11:31 PM"}"#
        );
        assert_eq!(s.get(Prayer::Jumuah), Some(hm(13, 15)));
    }
}
