//! Calculation logic for part-time training durations.
//!
//! One module per pipeline stage: input validation, part-time
//! normalization, shortening aggregation, automatic part-time extension,
//! the statutory upper bound, rounding down to whole months and the
//! no-disadvantage override. [`DurationCalculator`] chains them in that
//! order. None of these modules perform I/O or keep state.

mod duration;
mod extension;
mod no_disadvantage;
mod part_time;
mod rounding;
mod shortening;
mod summary;
mod upper_bound;
mod validation;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

pub use duration::DurationCalculator;
pub use extension::{ExtensionResult, apply_part_time_extension};
pub use no_disadvantage::{NoDisadvantageResult, apply_no_disadvantage};
pub use part_time::{PartTimeShare, hours_from_percentage, normalize_part_time, percentage_from_hours};
pub use rounding::{RoundingResult, floor_to_months};
pub use shortening::{
    ShorteningAggregate, ShorteningResult, aggregate_shortening, apply_shortening,
    shortening_credits,
};
pub use summary::format_summary;
pub use upper_bound::{UpperBoundResult, apply_upper_bound};
pub use validation::{
    BASE_MONTHS_FIELD, FULL_TIME_HOURS_FIELD, PART_TIME_INPUT_FIELD, require_number,
    validate_base_months, validate_full_time_hours, validate_part_time_input,
};

/// Divides, turning a zero divisor or overflow into a `CalculationError`.
pub(crate) fn checked_divide(
    numerator: Decimal,
    denominator: Decimal,
    what: &str,
) -> EngineResult<Decimal> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot divide {} by {} of {}", numerator, what, denominator),
        })
}

/// Formats a decimal for reasoning text: at most two places, no trailing zeros.
pub(crate) fn display_decimal(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}
