//! Which prayer window contains a given time of day.
//!
//! Windows are half-open `[start, next start)` and cover the whole clock:
//! Fajr, the midday window (Duhur, carved up by Jumuah on Fridays), Asr,
//! Maghrib, Isha and Tahajjud, which runs until the next Fajr. Either Isha or
//! Tahajjud spans midnight, depending on which side of it Tahajjud falls.

use azan_types::{AzanError, Prayer, TimeOfDay};
use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::builder::DailySchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Fajr,
    Midday,
    Asr,
    Maghrib,
    Isha,
    Tahajjud,
}

struct Boundaries {
    fajr: NaiveTime,
    duhur: NaiveTime,
    jumuah: Option<NaiveTime>,
    asr: NaiveTime,
    maghrib: NaiveTime,
    isha: NaiveTime,
    tahajjud: NaiveTime,
}

impl Boundaries {
    fn of(schedule: &DailySchedule) -> Result<Self, AzanError> {
        let at = |p: Prayer| schedule.time(p).map(TimeOfDay::to_naive_time);
        Ok(Self {
            fajr: at(Prayer::Fajr)?,
            duhur: at(Prayer::Duhur)?,
            jumuah: if schedule.is_friday() { Some(at(Prayer::Jumuah)?) } else { None },
            asr: at(Prayer::Asr)?,
            maghrib: at(Prayer::Maghrib)?,
            isha: at(Prayer::Isha)?,
            tahajjud: at(Prayer::Tahajjud)?,
        })
    }

    fn locate(&self, now: NaiveTime) -> Option<Window> {
        let within = |start: NaiveTime, end: NaiveTime| now >= start && now < end;

        if within(self.fajr, self.duhur) {
            return Some(Window::Fajr);
        }
        if within(self.duhur, self.asr) {
            return Some(Window::Midday);
        }
        if within(self.asr, self.maghrib) {
            return Some(Window::Asr);
        }
        if within(self.maghrib, self.isha) {
            return Some(Window::Maghrib);
        }

        if self.isha <= self.tahajjud {
            // Tahajjud before midnight: it runs through midnight to Fajr.
            if within(self.isha, self.tahajjud) {
                return Some(Window::Isha);
            }
            if now >= self.tahajjud || now < self.fajr {
                return Some(Window::Tahajjud);
            }
        } else {
            // Tahajjud after midnight: Isha runs through midnight to Tahajjud.
            if now >= self.isha || now < self.tahajjud {
                return Some(Window::Isha);
            }
            if within(self.tahajjud, self.fajr) {
                return Some(Window::Tahajjud);
            }
        }
        None
    }
}

impl Window {
    fn active(self, now: NaiveTime, jumuah: Option<NaiveTime>) -> Prayer {
        match self {
            Window::Fajr => Prayer::Fajr,
            Window::Midday => match jumuah {
                Some(j) if now < j => Prayer::Jumuah,
                _ => Prayer::Duhur,
            },
            Window::Asr => Prayer::Asr,
            Window::Maghrib => Prayer::Maghrib,
            Window::Isha => Prayer::Isha,
            Window::Tahajjud => Prayer::Tahajjud,
        }
    }

    fn following(self, friday: bool) -> Prayer {
        match self {
            Window::Fajr if friday => Prayer::Jumuah,
            Window::Fajr => Prayer::Duhur,
            Window::Midday => Prayer::Asr,
            Window::Asr => Prayer::Maghrib,
            Window::Maghrib => Prayer::Isha,
            Window::Isha => Prayer::Tahajjud,
            Window::Tahajjud => Prayer::Fajr,
        }
    }
}

fn locate(now: NaiveTime, schedule: &DailySchedule) -> Result<(Window, Boundaries), AzanError> {
    let bounds = Boundaries::of(schedule)?;
    match bounds.locate(now) {
        Some(window) => Ok((window, bounds)),
        None => {
            warn!(date = %schedule.date(), %now, "no prayer window contains time");
            Err(AzanError::UnclassifiedTime { time: TimeOfDay::from_naive_time(now) })
        }
    }
}

/// The prayer whose window contains `now`.
///
/// On Fridays the stretch from Duhur until Jumuah reports Jumuah.
///
/// # Errors
/// Returns `UnclassifiedTime` when the schedule is out of order and no window
/// contains `now`.
pub fn current_prayer(now: NaiveTime, schedule: &DailySchedule) -> Result<Prayer, AzanError> {
    let (window, bounds) = locate(now, schedule)?;
    Ok(window.active(now, bounds.jumuah))
}

/// The prayer that starts the window after the one containing `now`.
///
/// Seconds are dropped from `now` before comparing. On Fridays Jumuah takes
/// Duhur's place as the prayer after Fajr.
///
/// # Errors
/// Returns `UnclassifiedTime` when the schedule is out of order.
pub fn next_prayer(now: NaiveTime, schedule: &DailySchedule) -> Result<Prayer, AzanError> {
    let now = now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now);
    let (window, _) = locate(now, schedule)?;
    Ok(window.following(schedule.is_friday()))
}
