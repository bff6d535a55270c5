use azan_types::AzanError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

const MONTHS: [HijriMonth; 12] = [
    HijriMonth::Muharram,
    HijriMonth::Safar,
    HijriMonth::RabiAlAwwal,
    HijriMonth::RabiAlThani,
    HijriMonth::JumadaAlAwwal,
    HijriMonth::JumadaAlThani,
    HijriMonth::Rajab,
    HijriMonth::Shaban,
    HijriMonth::Ramadan,
    HijriMonth::Shawwal,
    HijriMonth::DhuAlQidah,
    HijriMonth::DhuAlHijjah,
];

impl HijriMonth {
    /// Looks up a month by its 1-based number.
    ///
    /// # Errors
    /// Returns `InvalidMonth` outside `1..=12`.
    pub fn from_number(month: u32) -> Result<Self, AzanError> {
        month
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i as usize))
            .copied()
            .ok_or(AzanError::InvalidMonth(month))
    }

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-Awwal",
            HijriMonth::RabiAlThani => "Rabi' al-Thani",
            HijriMonth::JumadaAlAwwal => "Jumada al-Awwal",
            HijriMonth::JumadaAlThani => "Jumada al-Thani",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQidah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arabic weekday names, numbered from Monday = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IslamicWeekday {
    AlIthnayn,
    AthThulatha,
    AlArbia,
    AlKhamis,
    AlJumuah,
    AsSabt,
    AlAhad,
}

const WEEKDAYS: [IslamicWeekday; 7] = [
    IslamicWeekday::AlIthnayn,
    IslamicWeekday::AthThulatha,
    IslamicWeekday::AlArbia,
    IslamicWeekday::AlKhamis,
    IslamicWeekday::AlJumuah,
    IslamicWeekday::AsSabt,
    IslamicWeekday::AlAhad,
];

impl IslamicWeekday {
    /// Looks up a weekday by its Monday-based number.
    ///
    /// # Errors
    /// Returns `InvalidWeekday` outside `1..=7`.
    pub fn from_number(weekday: u32) -> Result<Self, AzanError> {
        weekday
            .checked_sub(1)
            .and_then(|i| WEEKDAYS.get(i as usize))
            .copied()
            .ok_or(AzanError::InvalidWeekday(weekday))
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        WEEKDAYS[weekday.num_days_from_monday() as usize]
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            IslamicWeekday::AlIthnayn => Weekday::Mon,
            IslamicWeekday::AthThulatha => Weekday::Tue,
            IslamicWeekday::AlArbia => Weekday::Wed,
            IslamicWeekday::AlKhamis => Weekday::Thu,
            IslamicWeekday::AlJumuah => Weekday::Fri,
            IslamicWeekday::AsSabt => Weekday::Sat,
            IslamicWeekday::AlAhad => Weekday::Sun,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IslamicWeekday::AlIthnayn => "Al-Ithnayn",
            IslamicWeekday::AthThulatha => "Ath-Thulatha",
            IslamicWeekday::AlArbia => "Al-Arbi'a",
            IslamicWeekday::AlKhamis => "Al-Khamis",
            IslamicWeekday::AlJumuah => "Al-Jumu'ah",
            IslamicWeekday::AsSabt => "As-Sabt",
            IslamicWeekday::AlAhad => "Al-Ahad",
        }
    }
}

impl fmt::Display for IslamicWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
