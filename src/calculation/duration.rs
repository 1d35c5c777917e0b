//! The duration calculator.
//!
//! [`DurationCalculator`] validates a request and runs the pipeline stages in
//! their fixed order: part-time normalization, shortening, automatic
//! extension, upper bound, rounding, no-disadvantage override. Each stage
//! only sees the output of the stages before it.

use rust_decimal::Decimal;

use crate::config::LegalRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, DurationRequest, DurationResult, InputKind, Operand,
    ShorteningGrounds,
};

use super::extension::apply_part_time_extension;
use super::no_disadvantage::apply_no_disadvantage;
use super::part_time::normalize_part_time;
use super::rounding::floor_to_months;
use super::shortening::apply_shortening;
use super::upper_bound::apply_upper_bound;
use super::validation::{
    BASE_MONTHS_FIELD, FULL_TIME_HOURS_FIELD, PART_TIME_INPUT_FIELD, require_number,
    validate_base_months, validate_full_time_hours, validate_part_time_input,
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes part-time training durations under a fixed set of legal rules.
///
/// Holds no state besides its rules, so one instance can serve any number
/// of concurrent callers.
///
/// # Example
///
/// ```
/// use training_duration_engine::calculation::DurationCalculator;
/// use training_duration_engine::models::{Operand, ShorteningGrounds};
///
/// let calculator = DurationCalculator::default();
/// let result = calculator
///     .compute(
///         &Operand::from(36),
///         &Operand::from(40),
///         &Operand::from(75),
///         &ShorteningGrounds::default(),
///         "percentage",
///     )
///     .unwrap();
/// assert_eq!(result.final_months, 48);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DurationCalculator {
    rules: LegalRules,
}

impl DurationCalculator {
    /// Creates a calculator for the given rules.
    pub fn new(rules: LegalRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this calculator applies.
    pub fn rules(&self) -> &LegalRules {
        &self.rules
    }

    /// Computes the duration from untyped operands.
    ///
    /// Fails with `TypeMismatch` if any operand is not a number, with
    /// `RangeError` if a value is out of bounds, and with `InvalidInputKind`
    /// if `input_kind` is neither `percentage` nor `hours`. Validation
    /// happens field by field in that order, before any arithmetic.
    pub fn compute(
        &self,
        base_months: &Operand,
        full_time_hours: &Operand,
        part_time_input: &Operand,
        shortening_grounds: &ShorteningGrounds,
        input_kind: &str,
    ) -> EngineResult<DurationResult> {
        let base_months = require_number(BASE_MONTHS_FIELD, base_months)?;
        let full_time_hours = require_number(FULL_TIME_HOURS_FIELD, full_time_hours)?;
        let part_time_input = require_number(PART_TIME_INPUT_FIELD, part_time_input)?;

        validate_base_months(base_months, &self.rules.bounds)?;
        validate_full_time_hours(full_time_hours, &self.rules.bounds)?;
        let input_kind: InputKind = input_kind.parse()?;

        self.calculate(&DurationRequest {
            base_months,
            full_time_hours,
            part_time_input,
            input_kind,
            shortening_grounds: *shortening_grounds,
        })
    }

    /// Computes the duration from a typed request.
    pub fn calculate(&self, request: &DurationRequest) -> EngineResult<DurationResult> {
        let rules = &self.rules;

        let base_months = validate_base_months(request.base_months, &rules.bounds)?;
        validate_full_time_hours(request.full_time_hours, &rules.bounds)?;
        validate_part_time_input(
            request.input_kind,
            request.part_time_input,
            request.full_time_hours,
            &rules.part_time,
        )?;

        let share = normalize_part_time(
            request.input_kind,
            request.part_time_input,
            request.full_time_hours,
            1,
        )?;
        let shortening = apply_shortening(
            base_months,
            &request.shortening_grounds,
            &rules.shortening,
            2,
        );
        let extension = apply_part_time_extension(shortening.shortened_months, &share, 3)?;
        let upper_bound = apply_upper_bound(
            extension.extended_months,
            base_months,
            rules.part_time.upper_bound_factor,
            4,
        );
        let rounding = floor_to_months(upper_bound.clamped_months, 5)?;
        let no_disadvantage = apply_no_disadvantage(
            rounding.final_months,
            base_months,
            rules.part_time.no_disadvantage_tolerance_months,
            6,
        );

        let shortened_months = shortening.shortened_months;
        let final_months = no_disadvantage.final_months;

        // Literal difference after the override; the override can make it
        // smaller than the extension part time alone would cause.
        let extension_months = i64::from(final_months) - i64::from(shortened_months);
        let extension_months =
            i32::try_from(extension_months).map_err(|_| EngineError::CalculationError {
                message: format!("extension of {} months is out of range", extension_months),
            })?;

        let mut warnings = Vec::new();
        if shortening.aggregate.raw_months > shortening.aggregate.capped_months {
            warnings.push(AuditWarning::new(
                "shortening_capped",
                format!(
                    "Shortening credits of {} months exceed the cap; {} months applied",
                    shortening.aggregate.raw_months, shortening.aggregate.capped_months
                ),
                "low",
            ));
        }
        if upper_bound.applied {
            warnings.push(AuditWarning::new(
                "upper_bound_applied",
                format!(
                    "Extended duration was capped at {} months",
                    upper_bound.upper_bound_months.normalize()
                ),
                "medium",
            ));
        }
        if no_disadvantage.applied && shortened_months < base_months {
            warnings.push(AuditWarning::new(
                "override_reduced_extension",
                format!(
                    "No-disadvantage override reset {} to {} months after shortening; \
                     the reported extension is {} months",
                    rounding.final_months, base_months, extension_months
                ),
                "low",
            ));
        }

        Ok(DurationResult {
            original_months: base_months,
            shortened_months,
            part_time_percentage: share.percentage,
            part_time_hours: share.hours,
            after_extension_months: extension.extended_months,
            after_upper_bound_months: upper_bound.clamped_months,
            final_months,
            final_years: (Decimal::from(final_months) / MONTHS_PER_YEAR).round_dp(1),
            extension_months,
            total_shortening_months: base_months - shortened_months,
            raw_shortening_months: shortening.aggregate.raw_months,
            no_disadvantage_applied: no_disadvantage.applied,
            audit_trace: AuditTrace {
                steps: vec![
                    share.audit_step,
                    shortening.audit_step,
                    extension.audit_step,
                    upper_bound.audit_step,
                    rounding.audit_step,
                    no_disadvantage.audit_step,
                ],
                warnings,
            },
        })
    }
}
