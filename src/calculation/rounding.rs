//! Floor rounding to whole months (§ 7a Abs. 2 Satz 2 BBiG).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::display_decimal;

/// The result of rounding the clamped duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingResult {
    /// Whole months after rounding down.
    pub final_months: u32,
    /// The audit step recording the rounding.
    pub audit_step: AuditStep,
}

/// Rounds the duration down to whole months.
///
/// Always down, never to nearest: a shorter contract favours the trainee.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::floor_to_months;
/// use rust_decimal::Decimal;
///
/// let result = floor_to_months(Decimal::new(5199, 2), 5).unwrap();
/// assert_eq!(result.final_months, 51);
/// ```
pub fn floor_to_months(clamped_months: Decimal, step_number: u32) -> EngineResult<RoundingResult> {
    let floored = clamped_months.floor();
    let final_months = floored
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("duration {} cannot be expressed in whole months", clamped_months),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "floor_rounding".to_string(),
        rule_name: "Round Down to Whole Months".to_string(),
        clause_ref: "§ 7a Abs. 2 Satz 2 BBiG".to_string(),
        input: serde_json::json!({
            "clamped_months": clamped_months.normalize().to_string()
        }),
        output: serde_json::json!({
            "final_months": final_months
        }),
        reasoning: format!(
            "floor({}) = {} months",
            display_decimal(clamped_months),
            final_months
        ),
    };

    Ok(RoundingResult {
        final_months,
        audit_step,
    })
}
