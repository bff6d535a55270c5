use azan_types::error::{HIJRI_MAX_YEAR, HIJRI_MIN_YEAR};
use azan_types::AzanError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::trace;

use crate::names::{HijriMonth, IslamicWeekday};

/// Structured result of a Gregorian-to-Hijri conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: u32,
    /// 1-12.
    pub month: u32,
    pub day: u32,
    /// Gregorian weekday of the converted date, Monday = 1.
    pub weekday: u32,
}

impl HijriDate {
    pub fn month_of_year(&self) -> Result<HijriMonth, AzanError> {
        HijriMonth::from_number(self.month)
    }
}

/// External Gregorian-to-Hijri conversion capability.
pub trait HijriConverter: std::fmt::Debug + Send + Sync {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AzanError>;
}

impl<C: HijriConverter + ?Sized> HijriConverter for &C {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AzanError> {
        (**self).to_hijri(date)
    }
}

// Thread-local cache: (gregorian, adjustment) -> (hijri_year, month, day)
thread_local! {
    static HIJRI_CACHE: RefCell<Option<(NaiveDate, i64, u32, u32, u32)>> = const { RefCell::new(None) };
}

/// Tabular Umm al-Qura conversion backed by the `hijri_date` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularConverter {
    /// Day offset for local moon sighting (positive = Hijri ahead). Clamped to [-30, 30].
    adjustment: i64,
}

impl TabularConverter {
    pub fn new(adjustment: i64) -> Self {
        Self { adjustment: adjustment.clamp(-30, 30) }
    }

    pub fn adjustment(&self) -> i64 {
        self.adjustment
    }
}

impl HijriConverter for TabularConverter {
    /// # Errors
    /// Returns `DateOutOfRange` if the adjusted date is outside 1938-2076.
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AzanError> {
        let weekday = date.weekday().number_from_monday();

        let cached = HIJRI_CACHE.with(|cache| {
            cache.borrow().as_ref().and_then(|(d, adj, y, m, day)| {
                if *d == date && *adj == self.adjustment {
                    Some((*y, *m, *day))
                } else {
                    None
                }
            })
        });
        if let Some((year, month, day)) = cached {
            return Ok(HijriDate { year, month, day, weekday });
        }

        let adjusted = date
            .checked_add_signed(Duration::days(self.adjustment))
            .ok_or_else(|| AzanError::date_out_of_range(date))?;
        if adjusted.year() < HIJRI_MIN_YEAR || adjusted.year() > HIJRI_MAX_YEAR {
            return Err(AzanError::date_out_of_range(date));
        }

        let hijri = hijri_date::HijriDate::from_gr(
            adjusted.year() as usize,
            adjusted.month() as usize,
            adjusted.day() as usize,
        )
        .map_err(|_| AzanError::date_out_of_range(date))?;

        let converted = HijriDate {
            year: hijri.year() as u32,
            month: hijri.month() as u32,
            day: hijri.day() as u32,
            weekday,
        };
        trace!(%date, year = converted.year, month = converted.month, day = converted.day, "converted to hijri");

        HIJRI_CACHE.with(|cache| {
            *cache.borrow_mut() = Some((date, self.adjustment, converted.year, converted.month, converted.day));
        });
        Ok(converted)
    }
}

/// Calendar queries over a Gregorian date.
#[derive(Debug, Clone, Default)]
pub struct CalendarBridge<C> {
    converter: C,
}

impl<C: HijriConverter> CalendarBridge<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn hijri_date(&self, date: NaiveDate) -> Result<HijriDate, AzanError> {
        let hijri = self.converter.to_hijri(date)?;
        if hijri.day == 0 || hijri.day > 30 {
            return Err(AzanError::Calendar(format!(
                "converter returned day {} for {}",
                hijri.day, date
            )));
        }
        Ok(hijri)
    }

    pub fn hijri_month(&self, date: NaiveDate) -> Result<HijriMonth, AzanError> {
        self.hijri_date(date)?.month_of_year()
    }

    pub fn month_name(&self, date: NaiveDate) -> Result<&'static str, AzanError> {
        self.hijri_month(date).map(|m| m.name())
    }

    pub fn weekday(&self, date: NaiveDate) -> Result<IslamicWeekday, AzanError> {
        IslamicWeekday::from_number(self.hijri_date(date)?.weekday)
    }

    pub fn weekday_name(&self, date: NaiveDate) -> Result<&'static str, AzanError> {
        self.weekday(date).map(|w| w.name())
    }

    pub fn hijri_year(&self, date: NaiveDate) -> Result<u32, AzanError> {
        self.hijri_date(date).map(|h| h.year)
    }

    pub fn hijri_month_value(&self, date: NaiveDate) -> Result<u32, AzanError> {
        self.hijri_date(date).map(|h| h.month)
    }

    /// Hijri date as seen at `now_hour` on `date`.
    ///
    /// The Hijri day starts at sunset: once the hour is past the whole hour of
    /// Maghrib, the following Gregorian date's Hijri date is returned.
    pub fn hijri_date_at(&self, date: NaiveDate, maghrib_hour: f64, now_hour: u32) -> Result<HijriDate, AzanError> {
        if f64::from(now_hour) > maghrib_hour.floor() {
            let tomorrow = date.succ_opt().ok_or_else(|| AzanError::date_out_of_range(date))?;
            self.hijri_date(tomorrow)
        } else {
            self.hijri_date(date)
        }
    }
}
