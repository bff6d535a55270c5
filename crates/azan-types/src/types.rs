use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AzanError;

/// A named prayer in the daily schedule.
///
/// Declaration order is schedule order; `Jumuah` sits between `Duhur` and `Asr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    /// Dawn prayer.
    Fajr,
    /// Midday prayer.
    Duhur,
    /// Friday congregational prayer, scheduled in addition to Duhur.
    Jumuah,
    /// Afternoon prayer.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer.
    Isha,
    /// Voluntary late-night prayer.
    Tahajjud,
}

impl Prayer {
    /// The five prayers whose times come straight from the astronomical source.
    pub const OBLIGATORY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Duhur,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Duhur => "Duhur",
            Prayer::Jumuah => "Jumuah",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Tahajjud => "Tahajjud",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculation authority whose angle conventions produced the raw prayer hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Institution {
    UniversityOfIslamicSciencesKarachi,
    IslamicSocietyOfNorthAmerica,
    MuslimWorldLeague,
    UmmAlQuraUniversityMecca,
    EgyptianGeneralAuthorityOfSurvey,
    InstituteOfGeophysicsTehran,
    ShiaIthnaAshari,
}

impl Default for Institution {
    fn default() -> Self {
        Self::UniversityOfIslamicSciencesKarachi
    }
}

impl Institution {
    pub const ALL: [Institution; 7] = [
        Institution::UniversityOfIslamicSciencesKarachi,
        Institution::IslamicSocietyOfNorthAmerica,
        Institution::MuslimWorldLeague,
        Institution::UmmAlQuraUniversityMecca,
        Institution::EgyptianGeneralAuthorityOfSurvey,
        Institution::InstituteOfGeophysicsTehran,
        Institution::ShiaIthnaAshari,
    ];

    /// Short configuration key, e.g. `umm_al_qura`.
    pub fn key(&self) -> &'static str {
        match self {
            Institution::UniversityOfIslamicSciencesKarachi => "karachi",
            Institution::IslamicSocietyOfNorthAmerica => "isna",
            Institution::MuslimWorldLeague => "mwl",
            Institution::UmmAlQuraUniversityMecca => "umm_al_qura",
            Institution::EgyptianGeneralAuthorityOfSurvey => "egypt",
            Institution::InstituteOfGeophysicsTehran => "tehran",
            Institution::ShiaIthnaAshari => "jafari",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Institution::UniversityOfIslamicSciencesKarachi => "University of Islamic Sciences, Karachi",
            Institution::IslamicSocietyOfNorthAmerica => "Islamic Society of North America",
            Institution::MuslimWorldLeague => "Muslim World League",
            Institution::UmmAlQuraUniversityMecca => "Umm al-Qura University, Mecca",
            Institution::EgyptianGeneralAuthorityOfSurvey => "Egyptian General Authority of Survey",
            Institution::InstituteOfGeophysicsTehran => "Institute of Geophysics, University of Tehran",
            Institution::ShiaIthnaAshari => "Shia Ithna-Ashari, Leva Institute, Qum",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Institution {
    type Err = AzanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Institution::ALL
            .into_iter()
            .find(|i| i.key() == wanted)
            .ok_or_else(|| AzanError::invalid_config(format!("Unknown institution {:?}", s)))
    }
}

/// Fixed observer position and calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees, -90..=90.
    pub latitude: f64,
    /// Degrees, -180..=180.
    pub longitude: f64,
    pub timezone: Tz,
    pub institution: Institution,
}

impl Location {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns `InvalidLocation` for non-finite or out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64, timezone: Tz, institution: Institution) -> Result<Self, AzanError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AzanError::invalid_location(format!("latitude {} outside -90..=90", latitude)));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AzanError::invalid_location(format!("longitude {} outside -180..=180", longitude)));
        }
        Ok(Self::new_unchecked(latitude, longitude, timezone, institution))
    }

    pub fn new_unchecked(latitude: f64, longitude: f64, timezone: Tz, institution: Institution) -> Self {
        Self { latitude, longitude, timezone, institution }
    }
}

/// Fractional hours (0.0-24.0) of the five obligatory prayers for one date.
///
/// Produced by an external astronomical source. Ordering is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPrayerHours {
    pub fajr: f64,
    pub duhur: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl RawPrayerHours {
    pub fn new(fajr: f64, duhur: f64, asr: f64, maghrib: f64, isha: f64) -> Self {
        Self { fajr, duhur, asr, maghrib, isha }
    }

    /// Raw value for an obligatory prayer; `None` for Jumuah and Tahajjud,
    /// which are derived.
    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        match prayer {
            Prayer::Fajr => Some(self.fajr),
            Prayer::Duhur => Some(self.duhur),
            Prayer::Asr => Some(self.asr),
            Prayer::Maghrib => Some(self.maghrib),
            Prayer::Isha => Some(self.isha),
            Prayer::Jumuah | Prayer::Tahajjud => None,
        }
    }

    /// Finds the first value that is not a finite hour in `0.0..=24.0`.
    pub fn first_invalid(&self) -> Option<(Prayer, f64)> {
        Prayer::OBLIGATORY
            .into_iter()
            .filter_map(|p| self.get(p).map(|h| (p, h)))
            .find(|(_, h)| !h.is_finite() || !(0.0..=24.0).contains(h))
    }
}
