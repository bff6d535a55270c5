use std::env;

use azan_calendar::TabularConverter;
use azan_schedule::PrayerHoursProvider;
use azan_types::{AzanError, Institution, Location};
use chrono_tz::Tz;
use tracing::debug;

use crate::engine::PrayerSchedule;

pub const DEFAULT_LATITUDE: f64 = 22.805618;
pub const DEFAULT_LONGITUDE: f64 = 86.2029;
pub const DEFAULT_TIMEZONE: Tz = Tz::Asia__Kolkata;

/// Local moon sighting rarely moves the calendar by more than two days.
pub const MAX_HIJRI_ADJUSTMENT: i64 = 2;

/// Engine settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AzanConfig {
    pub location: Location,
    /// Days added to the Gregorian date before Hijri conversion.
    pub hijri_adjustment: i64,
}

impl Default for AzanConfig {
    fn default() -> Self {
        Self {
            location: Location::new_unchecked(
                DEFAULT_LATITUDE,
                DEFAULT_LONGITUDE,
                DEFAULT_TIMEZONE,
                Institution::default(),
            ),
            hijri_adjustment: 0,
        }
    }
}

impl AzanConfig {
    pub fn from_env() -> Result<Self, AzanError> {
        dotenvy::dotenv().ok(); // .env is optional
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` naming the offending variable, or
    /// `InvalidLocation` for coordinates out of range.
    pub fn from_getter<F>(get: F) -> Result<Self, AzanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let latitude = parse_or(&get, "AZAN_LATITUDE", DEFAULT_LATITUDE)?;
        let longitude = parse_or(&get, "AZAN_LONGITUDE", DEFAULT_LONGITUDE)?;

        let timezone = match get("AZAN_TIMEZONE").filter(|s| !s.trim().is_empty()) {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| AzanError::invalid_config(format!("AZAN_TIMEZONE {:?} is not an IANA zone", name)))?,
            None => DEFAULT_TIMEZONE,
        };

        let institution = match get("AZAN_INSTITUTION").filter(|s| !s.trim().is_empty()) {
            Some(name) => name
                .parse::<Institution>()
                .map_err(|e| AzanError::invalid_config(format!("AZAN_INSTITUTION: {}", e)))?,
            None => Institution::default(),
        };

        let hijri_adjustment: i64 = parse_or(&get, "AZAN_HIJRI_ADJUSTMENT", 0)?;
        if hijri_adjustment.abs() > MAX_HIJRI_ADJUSTMENT {
            return Err(AzanError::invalid_config(format!(
                "AZAN_HIJRI_ADJUSTMENT={} outside -{max}..={max}",
                hijri_adjustment,
                max = MAX_HIJRI_ADJUSTMENT
            )));
        }

        let location = Location::new(latitude, longitude, timezone, institution)?;
        debug!(latitude, longitude, %timezone, %institution, hijri_adjustment, "configuration loaded");
        Ok(Self { location, hijri_adjustment })
    }

    pub fn converter(&self) -> TabularConverter {
        TabularConverter::new(self.hijri_adjustment)
    }

    /// Engine for the configured location around `provider`.
    pub fn engine<P: PrayerHoursProvider>(&self, provider: P) -> PrayerSchedule<P> {
        PrayerSchedule::with_converter(self.location, provider, self.converter())
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> Result<T, AzanError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key).filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AzanError::invalid_config(format!("{} must be a number, got {:?}", key, raw))),
        None => Ok(default),
    }
}
