use azan_core::prelude::*;
use azan_core::{
    time_difference_between, time_difference_to_arbitrary, CalendarBridge, ClockDelta, FixedHours, HoursFn,
    RawPrayerHours, ScheduleContext, TabularConverter,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use std::collections::HashMap;

fn hours() -> FixedHours {
    FixedHours::new(RawPrayerHours::new(5.033, 12.25, 15.75, 18.0, 19.25))
}

fn location(institution: Institution) -> Location {
    Location::new(22.805618, 86.2029, Tz::Asia__Kolkata, institution).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn first_weekday(weekday: Weekday) -> NaiveDate {
    let mut d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    while d.weekday() != weekday {
        d = d.succ_opt().unwrap();
    }
    d
}

// Brute force keeps the test independent of the calendar table's exact month starts.
fn find_month(month: HijriMonth, weekday: Weekday) -> NaiveDate {
    let bridge = CalendarBridge::new(TabularConverter::default());
    let mut d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for _ in 0..2000 {
        if d.weekday() == weekday && bridge.hijri_month(d).unwrap() == month {
            return d;
        }
        d = d.succ_opt().unwrap();
    }
    panic!("no {} {:?} found", month, weekday);
}

#[test]
fn test_monday_schedule_scenario() -> anyhow::Result<()> {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let s = engine.daily(first_weekday(Weekday::Mon))?;

    let rendered: Vec<(Prayer, String)> = s.iter().map(|(p, t)| (p, t.to_string())).collect();
    let expected = [
        (Prayer::Fajr, "05:02"),
        (Prayer::Duhur, "12:15"),
        (Prayer::Asr, "15:45"),
        (Prayer::Maghrib, "18:00"),
        (Prayer::Isha, "19:15"),
        (Prayer::Tahajjud, "23:31"),
    ];
    assert_eq!(rendered.len(), expected.len());
    for ((p, got), (q, want)) in rendered.iter().zip(expected) {
        assert_eq!(*p, q);
        assert_eq!(got, want);
    }
    assert!(s.get(Prayer::Jumuah).is_none());
    Ok(())
}

#[test]
fn test_friday_schedule_scenario() -> anyhow::Result<()> {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let s = engine.daily(first_weekday(Weekday::Fri))?;
    assert_eq!(s.len(), 7);
    assert_eq!(s.time(Prayer::Duhur)?.to_string(), "12:15");
    assert_eq!(s.time(Prayer::Jumuah)?.to_string(), "13:15");
    Ok(())
}

#[test]
fn test_current_and_next_at_one_pm() {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());

    let monday = first_weekday(Weekday::Mon);
    assert_eq!(engine.current_prayer(monday, t(13, 0)).unwrap(), Prayer::Duhur);
    assert_eq!(engine.next_prayer(monday, t(13, 0)).unwrap(), Prayer::Asr);

    let friday = first_weekday(Weekday::Fri);
    assert_eq!(engine.current_prayer(friday, t(13, 0)).unwrap(), Prayer::Jumuah);
    assert_eq!(engine.next_prayer(friday, t(13, 0)).unwrap(), Prayer::Asr);
}

#[test]
fn test_ramadan_umm_al_qura_isha() {
    let date = find_month(HijriMonth::Ramadan, Weekday::Tue);
    // Raw Isha is deliberately far from Maghrib + 2:00.
    let raw = RawPrayerHours::new(4.5, 12.0, 15.5, 18.5, 23.0);

    let umm_al_qura = PrayerSchedule::new(location(Institution::UmmAlQuraUniversityMecca), FixedHours::new(raw));
    assert_eq!(umm_al_qura.prayer_time(date, Prayer::Isha).unwrap().to_string(), "20:30");

    let karachi = PrayerSchedule::new(location(Institution::default()), FixedHours::new(raw));
    assert_eq!(karachi.prayer_time(date, Prayer::Isha).unwrap().to_string(), "23:00");

    let shawwal = find_month(HijriMonth::Shawwal, Weekday::Tue);
    assert_eq!(umm_al_qura.prayer_time(shawwal, Prayer::Isha).unwrap().to_string(), "23:00");
}

#[test]
fn test_isha_override_can_be_disabled() {
    let date = find_month(HijriMonth::Ramadan, Weekday::Wed);
    let engine = PrayerSchedule::new(location(Institution::UmmAlQuraUniversityMecca), hours())
        .context(ScheduleContext::new().without_isha_overrides());
    assert_eq!(engine.prayer_time(date, Prayer::Isha).unwrap().to_string(), "19:15");
}

#[test]
fn test_jumuah_on_non_friday_is_an_error() {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let err = engine.prayer_time(first_weekday(Weekday::Sat), Prayer::Jumuah).unwrap_err();
    assert!(matches!(err, AzanError::PrayerNotScheduled { prayer: Prayer::Jumuah, .. }));
    assert!(err.to_string().contains("Jumuah"));
}

#[test]
fn test_formatted_output_contract() -> anyhow::Result<()> {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let json = serde_json::to_string(&engine.formatted(first_weekday(Weekday::Mon))?)?;
    assert_eq!(
        json,
        r#"{"Fajr":"05:02 AM","Duhur":"12:15 PM","Asr":"03:45 PM","Maghrib":"06:00 PM","Isha":"07:15 PM","Tahajjud":"11:31 PM"}"#
    );
    Ok(())
}

#[test]
fn test_range_uses_per_day_hours() {
    // Maghrib drifts one minute later per day of the month.
    let provider = HoursFn(|date: NaiveDate, _: &Location| {
        Ok::<_, AzanError>(RawPrayerHours::new(5.0, 12.0, 15.5, 18.0 + f64::from(date.day()) / 60.0, 19.5))
    });
    let engine = PrayerSchedule::new(location(Institution::default()), provider);
    let from = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let till = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

    let schedules = engine.schedule_over_range(from, till).unwrap();
    assert_eq!(schedules.len(), 10);
    assert_eq!(schedules[&from].time(Prayer::Maghrib).unwrap().to_string(), "18:01");
    let last = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    assert_eq!(schedules[&last].time(Prayer::Maghrib).unwrap().to_string(), "18:10");

    let formatted = engine.formatted_over_range(from, till).unwrap();
    assert_eq!(formatted[&last].get(Prayer::Maghrib), Some("06:10 PM"));

    let raw = engine.hours_over_range(from, till).unwrap();
    assert_eq!(raw.len(), 10);
    assert!(!raw.contains_key(&till));
}

#[test]
fn test_time_differences() {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let s = engine.daily(first_weekday(Weekday::Fri)).unwrap();
    assert_eq!(time_difference_between(&s, Prayer::Duhur, Prayer::Jumuah).unwrap(), ClockDelta::new(1, 0));
    assert_eq!(time_difference_between(&s, Prayer::Fajr, Prayer::Maghrib).unwrap(), ClockDelta::new(12, 58));

    let clock = TimeOfDay::from_hm(23, 45).unwrap();
    // Tahajjud at 23:31 already passed: the next one is a day away less 14 minutes.
    assert_eq!(time_difference_to_arbitrary(&s, Prayer::Tahajjud, clock).unwrap(), ClockDelta::new(23, 46));
    assert_eq!(time_difference_to_arbitrary(&s, Prayer::Fajr, clock).unwrap(), ClockDelta::new(5, 17));
}

#[test]
fn test_engine_from_config() {
    let env = HashMap::from([
        ("AZAN_LATITUDE", "21.4225"),
        ("AZAN_LONGITUDE", "39.8262"),
        ("AZAN_TIMEZONE", "Asia/Riyadh"),
        ("AZAN_INSTITUTION", "umm_al_qura"),
    ]);
    let config = AzanConfig::from_getter(|key| env.get(key).map(|v| v.to_string())).unwrap();
    let engine = config.engine(hours());
    assert_eq!(engine.location().institution, Institution::UmmAlQuraUniversityMecca);
    assert_eq!(engine.calendar().converter().adjustment(), 0);

    let ramadan = find_month(HijriMonth::Ramadan, Weekday::Thu);
    assert_eq!(engine.prayer_time(ramadan, Prayer::Isha).unwrap().to_string(), "20:00");
}

#[test]
fn test_hijri_adjustment_moves_month_boundary() {
    // The last day of Sha'ban becomes Ramadan once the calendar is shifted a day ahead.
    let plain = CalendarBridge::new(TabularConverter::default());
    let ahead = CalendarBridge::new(TabularConverter::new(1));
    let mut d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while plain.hijri_month(d).unwrap() != HijriMonth::Ramadan {
        d = d.succ_opt().unwrap();
    }
    let eve = d.pred_opt().unwrap();
    assert_eq!(plain.hijri_month(eve).unwrap(), HijriMonth::Shaban);
    assert_eq!(ahead.hijri_month(eve).unwrap(), HijriMonth::Ramadan);
}

#[test]
fn test_out_of_range_dates() {
    let engine = PrayerSchedule::new(location(Institution::default()), hours());
    let too_late = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    assert!(matches!(engine.daily(too_late), Err(AzanError::DateOutOfRange { .. })));
    let too_early = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    assert!(engine.daily(too_early).is_err());
}
