use azan_calendar::HijriMonth;
use azan_types::{AzanError, ClockDelta, Institution};
use serde::{Deserialize, Serialize};

/// Replaces the raw Isha time with a fixed offset after Maghrib for one
/// institution during one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IshaOverride {
    pub institution: Institution,
    pub month: HijriMonth,
    pub after_maghrib: ClockDelta,
}

impl IshaOverride {
    pub const fn new(institution: Institution, month: HijriMonth, after_maghrib: ClockDelta) -> Self {
        Self { institution, month, after_maghrib }
    }

    pub fn applies(&self, institution: Institution, month: HijriMonth) -> bool {
        self.institution == institution && self.month == month
    }
}

/// Umm al-Qura observes Isha two hours after Maghrib throughout Ramadan.
pub const DEFAULT_ISHA_OVERRIDES: [IshaOverride; 1] = [IshaOverride::new(
    Institution::UmmAlQuraUniversityMecca,
    HijriMonth::Ramadan,
    ClockDelta { hours: 2, minutes: 0 },
)];

/// Jumuah is held one hour after Duhur.
pub const DEFAULT_JUMUAH_OFFSET: ClockDelta = ClockDelta { hours: 1, minutes: 0 };

/// Schedule engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleContext {
    pub isha_overrides: Vec<IshaOverride>,
    /// Offset of Jumuah after Duhur on Fridays.
    pub jumuah_offset: ClockDelta,
}

impl Default for ScheduleContext {
    fn default() -> Self {
        Self {
            isha_overrides: DEFAULT_ISHA_OVERRIDES.to_vec(),
            jumuah_offset: DEFAULT_JUMUAH_OFFSET,
        }
    }
}

impl ScheduleContext {
    pub fn new() -> Self { Self::default() }

    pub fn add_isha_override(mut self, rule: IshaOverride) -> Self {
        self.isha_overrides.push(rule);
        self
    }

    pub fn without_isha_overrides(mut self) -> Self {
        self.isha_overrides.clear();
        self
    }

    pub fn jumuah_offset(mut self, offset: ClockDelta) -> Self {
        self.jumuah_offset = offset;
        self
    }

    /// First override matching the institution and month, if any.
    pub fn isha_override(&self, institution: Institution, month: HijriMonth) -> Option<&IshaOverride> {
        self.isha_overrides.iter().find(|r| r.applies(institution, month))
    }
}

/// Builder with validation for `ScheduleContext`.
#[derive(Debug, Default)]
pub struct ScheduleContextBuilder {
    isha_overrides: Option<Vec<IshaOverride>>,
    extra_overrides: Vec<IshaOverride>,
    jumuah_offset: Option<ClockDelta>,
}

impl ScheduleContextBuilder {
    pub fn new() -> Self { Self::default() }

    /// Replaces the built-in override table.
    pub fn isha_overrides(mut self, rules: Vec<IshaOverride>) -> Self { self.isha_overrides = Some(rules); self }
    pub fn add_isha_override(mut self, rule: IshaOverride) -> Self { self.extra_overrides.push(rule); self }
    pub fn jumuah_offset(mut self, offset: ClockDelta) -> Self { self.jumuah_offset = Some(offset); self }

    /// Builds and validates.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for negative or over-long offsets and for
    /// two overrides targeting the same institution and month.
    pub fn build(self) -> Result<ScheduleContext, AzanError> {
        let mut rules = self.isha_overrides.unwrap_or_else(|| DEFAULT_ISHA_OVERRIDES.to_vec());
        rules.extend(self.extra_overrides);
        let jumuah_offset = self.jumuah_offset.unwrap_or(DEFAULT_JUMUAH_OFFSET);

        validate_offset("Jumuah offset", jumuah_offset)?;
        for (i, rule) in rules.iter().enumerate() {
            validate_offset("Isha offset", rule.after_maghrib)?;
            if rules[..i].iter().any(|r| r.applies(rule.institution, rule.month)) {
                return Err(AzanError::invalid_config(format!(
                    "Duplicate Isha override for {} in {}",
                    rule.institution, rule.month
                )));
            }
        }

        Ok(ScheduleContext { isha_overrides: rules, jumuah_offset })
    }
}

fn validate_offset(what: &str, offset: ClockDelta) -> Result<(), AzanError> {
    if offset.hours < 0 || offset.minutes < 0 || offset.minutes >= 60 {
        return Err(AzanError::invalid_config(format!("{} {} must be non-negative with minutes below 60", what, offset)));
    }
    if offset.total_minutes() >= 12 * 60 {
        return Err(AzanError::invalid_config(format!("{} {} exceeds 12 hours", what, offset)));
    }
    Ok(())
}
