//! Input validation for duration calculations.
//!
//! Every check runs before any arithmetic. Type checks raise
//! [`EngineError::TypeMismatch`], bound checks raise
//! [`EngineError::RangeError`] with a message naming the violated bound.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{InputBounds, PartTimeRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{InputKind, Operand};

use super::display_decimal;

/// Field name of the full-time reference duration.
pub const BASE_MONTHS_FIELD: &str = "base_duration_months";
/// Field name of the full-time weekly hours.
pub const FULL_TIME_HOURS_FIELD: &str = "full_time_hours";
/// Field name of the part-time commitment.
pub const PART_TIME_INPUT_FIELD: &str = "part_time_input";

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Returns the numeric value of an operand or a `TypeMismatch` naming the field.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::require_number;
/// use training_duration_engine::error::EngineError;
/// use training_duration_engine::models::Operand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(require_number("hours", &Operand::from(40)).unwrap(), Decimal::from(40));
/// assert!(matches!(
///     require_number("hours", &Operand::from(true)),
///     Err(EngineError::TypeMismatch { .. })
/// ));
/// ```
pub fn require_number(field: &str, operand: &Operand) -> EngineResult<Decimal> {
    operand.as_number().ok_or_else(|| EngineError::TypeMismatch {
        field: field.to_string(),
        message: format!("expected a number, got {}", operand.describe()),
    })
}

/// Checks the full-time reference duration and returns it as whole months.
pub fn validate_base_months(value: Decimal, bounds: &InputBounds) -> EngineResult<u32> {
    if !value.fract().is_zero() {
        return Err(EngineError::TypeMismatch {
            field: BASE_MONTHS_FIELD.to_string(),
            message: format!(
                "expected a whole number of months, got {}",
                value.normalize()
            ),
        });
    }

    let min = Decimal::from(bounds.min_base_months);
    let max = Decimal::from(bounds.max_base_months);
    if value < min || value > max {
        return Err(EngineError::RangeError {
            field: BASE_MONTHS_FIELD.to_string(),
            message: format!(
                "training duration must be between {} and {} months, got {}",
                bounds.min_base_months,
                bounds.max_base_months,
                value.normalize()
            ),
        });
    }

    value.to_u32().ok_or_else(|| EngineError::CalculationError {
        message: format!("base duration {} does not fit into whole months", value),
    })
}

/// Checks the full-time weekly hours.
pub fn validate_full_time_hours(value: Decimal, bounds: &InputBounds) -> EngineResult<()> {
    if value < bounds.min_full_time_hours || value > bounds.max_full_time_hours {
        return Err(EngineError::RangeError {
            field: FULL_TIME_HOURS_FIELD.to_string(),
            message: format!(
                "full-time weekly hours must be between {} and {}, got {}",
                bounds.min_full_time_hours.normalize(),
                bounds.max_full_time_hours.normalize(),
                value.normalize()
            ),
        });
    }
    Ok(())
}

/// Checks the part-time commitment against its legal bounds.
///
/// A percentage must lie within the configured percentage bounds. Hours
/// must lie between the same share of the full-time hours (half of them
/// under the statutory rules) and the full-time hours themselves.
pub fn validate_part_time_input(
    kind: InputKind,
    value: Decimal,
    full_time_hours: Decimal,
    rules: &PartTimeRules,
) -> EngineResult<()> {
    match kind {
        InputKind::Percentage => {
            if value < rules.min_percentage || value > rules.max_percentage {
                return Err(range_error(format!(
                    "part-time share must be between {}% and {}% (legal minimum of {}% under \
                     § 7a Abs. 1 Satz 3 BBiG), got {}%",
                    rules.min_percentage.normalize(),
                    rules.max_percentage.normalize(),
                    rules.min_percentage.normalize(),
                    value.normalize()
                )));
            }
        }
        InputKind::Hours => {
            let min_hours = full_time_hours * rules.min_percentage / ONE_HUNDRED;
            let max_hours = full_time_hours * rules.max_percentage / ONE_HUNDRED;
            if value < min_hours {
                return Err(range_error(format!(
                    "part-time hours are below the minimum hours of {} per week \
                     ({}% of full-time hours, § 7a Abs. 1 Satz 3 BBiG), got {}",
                    display_decimal(min_hours),
                    rules.min_percentage.normalize(),
                    value.normalize()
                )));
            }
            if value > max_hours {
                return Err(range_error(format!(
                    "part-time hours of {} exceeds full-time hours of {}",
                    value.normalize(),
                    display_decimal(max_hours)
                )));
            }
        }
    }
    Ok(())
}

fn range_error(message: String) -> EngineError {
    EngineError::RangeError {
        field: PART_TIME_INPUT_FIELD.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_range_error(result: EngineResult<()>, field: &str, fragment: &str) {
        match result {
            Err(EngineError::RangeError { field: f, message }) => {
                assert_eq!(f, field);
                assert!(
                    message.contains(fragment),
                    "Expected '{}' in message, got: {}",
                    fragment,
                    message
                );
            }
            other => panic!("Expected RangeError, got {:?}", other),
        }
    }

    #[test]
    fn test_require_number_rejects_non_numbers() {
        for operand in [
            Operand::from(true),
            Operand::from("36"),
            Operand::Other("null"),
        ] {
            match require_number(BASE_MONTHS_FIELD, &operand) {
                Err(EngineError::TypeMismatch { field, .. }) => {
                    assert_eq!(field, BASE_MONTHS_FIELD)
                }
                other => panic!("Expected TypeMismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_base_months_bounds_are_inclusive() {
        let bounds = InputBounds::default();
        assert_eq!(validate_base_months(dec("24"), &bounds).unwrap(), 24);
        assert_eq!(validate_base_months(dec("42"), &bounds).unwrap(), 42);
        assert_eq!(validate_base_months(dec("36.0"), &bounds).unwrap(), 36);
    }

    #[test]
    fn test_base_months_out_of_range() {
        let bounds = InputBounds::default();
        for value in ["23", "43", "0", "-36"] {
            match validate_base_months(dec(value), &bounds) {
                Err(EngineError::RangeError { message, .. }) => {
                    assert!(message.contains("between 24 and 42 months"))
                }
                other => panic!("Expected RangeError for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_fractional_base_months_is_a_type_mismatch() {
        let result = validate_base_months(dec("36.5"), &InputBounds::default());
        assert!(matches!(result, Err(EngineError::TypeMismatch { .. })));
    }

    #[test]
    fn test_full_time_hours_bounds() {
        let bounds = InputBounds::default();
        assert!(validate_full_time_hours(dec("10"), &bounds).is_ok());
        assert!(validate_full_time_hours(dec("48"), &bounds).is_ok());
        assert!(validate_full_time_hours(dec("39.5"), &bounds).is_ok());
        assert_range_error(
            validate_full_time_hours(dec("9.99"), &bounds),
            FULL_TIME_HOURS_FIELD,
            "between 10 and 48",
        );
        assert_range_error(
            validate_full_time_hours(dec("49"), &bounds),
            FULL_TIME_HOURS_FIELD,
            "between 10 and 48",
        );
    }

    #[test]
    fn test_percentage_bounds() {
        let rules = PartTimeRules::default();
        let full = dec("40");
        assert!(validate_part_time_input(InputKind::Percentage, dec("50"), full, &rules).is_ok());
        assert!(validate_part_time_input(InputKind::Percentage, dec("100"), full, &rules).is_ok());
        assert_range_error(
            validate_part_time_input(InputKind::Percentage, dec("49.9"), full, &rules),
            PART_TIME_INPUT_FIELD,
            "legal minimum of 50%",
        );
        assert_range_error(
            validate_part_time_input(InputKind::Percentage, dec("101"), full, &rules),
            PART_TIME_INPUT_FIELD,
            "between 50% and 100%",
        );
    }

    #[test]
    fn test_hours_below_half_of_full_time() {
        let rules = PartTimeRules::default();
        assert!(
            validate_part_time_input(InputKind::Hours, dec("20"), dec("40"), &rules).is_ok()
        );
        assert_range_error(
            validate_part_time_input(InputKind::Hours, dec("19.5"), dec("40"), &rules),
            PART_TIME_INPUT_FIELD,
            "minimum hours",
        );
    }

    #[test]
    fn test_hours_above_full_time() {
        let rules = PartTimeRules::default();
        assert!(
            validate_part_time_input(InputKind::Hours, dec("40"), dec("40"), &rules).is_ok()
        );
        assert_range_error(
            validate_part_time_input(InputKind::Hours, dec("40.5"), dec("40"), &rules),
            PART_TIME_INPUT_FIELD,
            "exceeds full-time hours",
        );
    }

    #[test]
    fn test_minimum_hours_message_uses_half_of_odd_full_time() {
        let rules = PartTimeRules::default();
        match validate_part_time_input(InputKind::Hours, dec("19"), dec("39"), &rules) {
            Err(EngineError::RangeError { message, .. }) => {
                assert!(message.contains("19.5"), "got: {}", message)
            }
            other => panic!("Expected RangeError, got {:?}", other),
        }
    }
}
