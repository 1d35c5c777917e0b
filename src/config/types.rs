//! Rule-set types for duration calculation.
//!
//! This module contains the strongly-typed legal constants the calculator
//! runs on. Every value has a statutory default, so a rule set file only
//! needs to name what it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Credit for a higher education entrance qualification (§ 8 Abs. 1 BBiG).
pub const HIGHER_EDUCATION_ENTRY_CREDIT_MONTHS: u32 = 12;
/// Credit for an intermediate school leaving certificate (§ 8 Abs. 1 BBiG).
pub const INTERMEDIATE_SCHOOL_CREDIT_MONTHS: u32 = 6;
/// Credit for trainees older than 21 (§ 8 Abs. 1 BBiG).
pub const OVER_21_CREDIT_MONTHS: u32 = 12;
/// Credit for family or care responsibility.
pub const FAMILY_CARE_CREDIT_MONTHS: u32 = 12;
/// Flat credit for any positive amount of prior occupational experience.
pub const PRIOR_EXPERIENCE_CREDIT_MONTHS: u32 = 12;
/// Ceiling on the summed shortening credits (policy of the competent body).
pub const MAX_TOTAL_SHORTENING_MONTHS: u32 = 12;

/// Legal minimum part-time share (§ 7a Abs. 1 Satz 3 BBiG).
pub const MIN_PART_TIME_PERCENTAGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// A part-time share can never exceed full time.
pub const MAX_PART_TIME_PERCENTAGE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// Calendar duration is capped at 1.5x the full-time duration (§ 7a Abs. 2 Satz 1 BBiG).
pub const UPPER_BOUND_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Overruns up to this many months fall back to the full-time duration.
pub const NO_DISADVANTAGE_TOLERANCE_MONTHS: u32 = 6;

/// Shortest full-time training duration accepted.
pub const MIN_BASE_MONTHS: u32 = 24;
/// Longest full-time training duration accepted.
pub const MAX_BASE_MONTHS: u32 = 42;
/// Lowest full-time weekly hours accepted.
pub const MIN_FULL_TIME_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// Highest full-time weekly hours accepted.
pub const MAX_FULL_TIME_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Metadata about the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// Short identifier of the rule set (e.g. "BBIG-7A-8").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the rule set.
    pub version: String,
    /// Where the rules come from.
    pub source: String,
}

impl Default for RuleSetMetadata {
    fn default() -> Self {
        Self {
            code: "BBIG-7A-8".to_string(),
            name: "Part-time vocational training (BBiG §§ 7a, 8)".to_string(),
            version: "2021-06-10".to_string(),
            source: "Recommendation of the BIBB Board, 10 June 2021".to_string(),
        }
    }
}

/// Month credits per shortening ground and the cap on their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorteningRules {
    /// Credit for a higher education entrance qualification.
    pub higher_education_entry_months: u32,
    /// Credit for an intermediate school leaving certificate.
    pub intermediate_school_months: u32,
    /// Credit for trainees older than 21.
    pub over_21_months: u32,
    /// Credit for family or care responsibility.
    pub family_care_months: u32,
    /// Flat credit for positive prior experience.
    pub prior_experience_months: u32,
    /// Ceiling on the summed credits.
    pub cap_months: u32,
}

impl Default for ShorteningRules {
    fn default() -> Self {
        Self {
            higher_education_entry_months: HIGHER_EDUCATION_ENTRY_CREDIT_MONTHS,
            intermediate_school_months: INTERMEDIATE_SCHOOL_CREDIT_MONTHS,
            over_21_months: OVER_21_CREDIT_MONTHS,
            family_care_months: FAMILY_CARE_CREDIT_MONTHS,
            prior_experience_months: PRIOR_EXPERIENCE_CREDIT_MONTHS,
            cap_months: MAX_TOTAL_SHORTENING_MONTHS,
        }
    }
}

/// Part-time share bounds, the extension ceiling and the override tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartTimeRules {
    /// Lowest accepted part-time percentage.
    pub min_percentage: Decimal,
    /// Highest accepted part-time percentage.
    pub max_percentage: Decimal,
    /// Ceiling on the extended duration as a multiple of the base duration.
    pub upper_bound_factor: Decimal,
    /// Largest overrun the no-disadvantage override absorbs.
    pub no_disadvantage_tolerance_months: u32,
}

impl Default for PartTimeRules {
    fn default() -> Self {
        Self {
            min_percentage: MIN_PART_TIME_PERCENTAGE,
            max_percentage: MAX_PART_TIME_PERCENTAGE,
            upper_bound_factor: UPPER_BOUND_FACTOR,
            no_disadvantage_tolerance_months: NO_DISADVANTAGE_TOLERANCE_MONTHS,
        }
    }
}

/// Operational bounds on the request's base inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Shortest accepted base duration in months.
    pub min_base_months: u32,
    /// Longest accepted base duration in months.
    pub max_base_months: u32,
    /// Lowest accepted full-time weekly hours.
    pub min_full_time_hours: Decimal,
    /// Highest accepted full-time weekly hours.
    pub max_full_time_hours: Decimal,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_base_months: MIN_BASE_MONTHS,
            max_base_months: MAX_BASE_MONTHS,
            min_full_time_hours: MIN_FULL_TIME_HOURS,
            max_full_time_hours: MAX_FULL_TIME_HOURS,
        }
    }
}

/// The complete set of legal constants a calculator is built from.
///
/// # Example
///
/// ```
/// use training_duration_engine::config::LegalRules;
///
/// let rules = LegalRules::default();
/// assert_eq!(rules.shortening.cap_months, 12);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalRules {
    /// Shortening credits and cap.
    pub shortening: ShorteningRules,
    /// Part-time bounds, ceiling and tolerance.
    pub part_time: PartTimeRules,
    /// Input bounds.
    pub bounds: InputBounds,
}

impl LegalRules {
    /// Checks that the rules describe a usable calculation.
    pub fn validate(&self) -> EngineResult<()> {
        let part_time = &self.part_time;
        if part_time.min_percentage <= Decimal::ZERO
            || part_time.min_percentage > part_time.max_percentage
            || part_time.max_percentage > MAX_PART_TIME_PERCENTAGE
        {
            return Err(invalid(format!(
                "part-time percentage bounds must satisfy 0 < min <= max <= 100, got {}..{}",
                part_time.min_percentage, part_time.max_percentage
            )));
        }
        if part_time.upper_bound_factor < Decimal::ONE {
            return Err(invalid(format!(
                "upper bound factor must be at least 1, got {}",
                part_time.upper_bound_factor
            )));
        }

        let bounds = &self.bounds;
        if bounds.min_base_months == 0 || bounds.min_base_months > bounds.max_base_months {
            return Err(invalid(format!(
                "base month bounds must satisfy 0 < min <= max, got {}..{}",
                bounds.min_base_months, bounds.max_base_months
            )));
        }
        if bounds.min_full_time_hours <= Decimal::ZERO
            || bounds.min_full_time_hours > bounds.max_full_time_hours
        {
            return Err(invalid(format!(
                "full-time hour bounds must satisfy 0 < min <= max, got {}..{}",
                bounds.min_full_time_hours, bounds.max_full_time_hours
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statutory_defaults() {
        let rules = LegalRules::default();
        assert_eq!(rules.shortening.higher_education_entry_months, 12);
        assert_eq!(rules.shortening.intermediate_school_months, 6);
        assert_eq!(rules.shortening.over_21_months, 12);
        assert_eq!(rules.shortening.family_care_months, 12);
        assert_eq!(rules.shortening.prior_experience_months, 12);
        assert_eq!(rules.shortening.cap_months, 12);
        assert_eq!(rules.part_time.min_percentage, Decimal::from(50));
        assert_eq!(rules.part_time.upper_bound_factor, Decimal::new(15, 1));
        assert_eq!(rules.part_time.no_disadvantage_tolerance_months, 6);
        assert_eq!(rules.bounds.min_base_months, 24);
        assert_eq!(rules.bounds.max_full_time_hours, Decimal::from(48));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let rules: LegalRules = serde_yaml::from_str("shortening:\n  cap_months: 18\n").unwrap();
        assert_eq!(rules.shortening.cap_months, 18);
        assert_eq!(rules.shortening.intermediate_school_months, 6);
        assert_eq!(rules.part_time, PartTimeRules::default());
    }

    #[test]
    fn test_validate_rejects_factor_below_one() {
        let mut rules = LegalRules::default();
        rules.part_time.upper_bound_factor = Decimal::new(9, 1);
        assert!(matches!(
            rules.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_minimum_percentage() {
        let mut rules = LegalRules::default();
        rules.part_time.min_percentage = Decimal::ZERO;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut rules = LegalRules::default();
        rules.bounds.min_base_months = 48;
        assert!(rules.validate().is_err());

        let mut rules = LegalRules::default();
        rules.bounds.min_full_time_hours = Decimal::from(60);
        assert!(rules.validate().is_err());
    }
}
