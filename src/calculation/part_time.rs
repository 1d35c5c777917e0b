//! Part-time input normalization.
//!
//! A part-time commitment arrives either as a percentage of full time or as
//! weekly hours. This module derives the other representation so both are
//! always available.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditStep, InputKind};

use super::{checked_divide, display_decimal};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Both representations of a part-time commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartTimeShare {
    /// Full-time weekly hours the share refers to.
    pub full_time_hours: Decimal,
    /// Share of full time, in percent.
    pub percentage: Decimal,
    /// Weekly part-time hours.
    pub hours: Decimal,
    /// The audit step recording the conversion.
    pub audit_step: AuditStep,
}

/// Converts weekly part-time hours into a percentage of full time.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::percentage_from_hours;
/// use rust_decimal::Decimal;
///
/// let pct = percentage_from_hours(Decimal::from(40), Decimal::from(30)).unwrap();
/// assert_eq!(pct, Decimal::from(75));
/// ```
pub fn percentage_from_hours(full_time_hours: Decimal, hours: Decimal) -> EngineResult<Decimal> {
    checked_divide(hours * ONE_HUNDRED, full_time_hours, "full-time hours")
}

/// Converts a percentage of full time into weekly part-time hours.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::hours_from_percentage;
/// use rust_decimal::Decimal;
///
/// let hours = hours_from_percentage(Decimal::from(40), Decimal::from(75));
/// assert_eq!(hours, Decimal::from(30));
/// ```
pub fn hours_from_percentage(full_time_hours: Decimal, percentage: Decimal) -> Decimal {
    full_time_hours * percentage / ONE_HUNDRED
}

/// Populates both percentage and hours from whichever one was given.
///
/// Expects `full_time_hours` to have been validated as positive.
pub fn normalize_part_time(
    kind: InputKind,
    input: Decimal,
    full_time_hours: Decimal,
    step_number: u32,
) -> EngineResult<PartTimeShare> {
    let (percentage, hours, reasoning) = match kind {
        InputKind::Percentage => {
            let hours = hours_from_percentage(full_time_hours, input);
            let reasoning = format!(
                "{}% of {} full-time hours = {} hours per week",
                display_decimal(input),
                display_decimal(full_time_hours),
                display_decimal(hours)
            );
            (input, hours, reasoning)
        }
        InputKind::Hours => {
            let percentage = percentage_from_hours(full_time_hours, input)?;
            let reasoning = format!(
                "{} of {} full-time hours = {}%",
                display_decimal(input),
                display_decimal(full_time_hours),
                display_decimal(percentage)
            );
            (percentage, input, reasoning)
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "part_time_normalization".to_string(),
        rule_name: "Part-Time Share".to_string(),
        clause_ref: "§ 7a Abs. 1 BBiG".to_string(),
        input: serde_json::json!({
            "input_kind": kind.as_str(),
            "part_time_input": input.normalize().to_string(),
            "full_time_hours": full_time_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "percentage": percentage.normalize().to_string(),
            "hours": hours.normalize().to_string()
        }),
        reasoning,
    };

    Ok(PartTimeShare {
        full_time_hours,
        percentage,
        hours,
        audit_step,
    })
}
