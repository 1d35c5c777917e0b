//! Automatic part-time extension (§ 7a Abs. 2 Satz 1 BBiG).
//!
//! Working a fraction of full time stretches the calendar duration by the
//! inverse of that fraction. No rounding happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::part_time::PartTimeShare;
use super::{checked_divide, display_decimal};

/// The result of the automatic part-time extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionResult {
    /// The extended duration in months, unrounded.
    pub extended_months: Decimal,
    /// The audit step recording the extension.
    pub audit_step: AuditStep,
}

/// Extends the shortened duration by the inverse of the part-time share.
///
/// `extended = shortened / (percentage / 100)`. It is evaluated as
/// `shortened * full_time_hours / part_time_hours`, which is the same ratio
/// without rounding the percentage first when it was derived from hours.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::{apply_part_time_extension, normalize_part_time};
/// use training_duration_engine::models::InputKind;
/// use rust_decimal::Decimal;
///
/// let share = normalize_part_time(InputKind::Percentage, Decimal::from(75), Decimal::from(40), 1)
///     .unwrap();
/// let result = apply_part_time_extension(36, &share, 3).unwrap();
/// assert_eq!(result.extended_months, Decimal::from(48));
/// ```
pub fn apply_part_time_extension(
    shortened_months: u32,
    share: &PartTimeShare,
    step_number: u32,
) -> EngineResult<ExtensionResult> {
    let shortened = Decimal::from(shortened_months);
    let extended_months = checked_divide(
        shortened * share.full_time_hours,
        share.hours,
        "part-time hours",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "part_time_extension".to_string(),
        rule_name: "Automatic Part-Time Extension".to_string(),
        clause_ref: "§ 7a Abs. 2 Satz 1 BBiG".to_string(),
        input: serde_json::json!({
            "shortened_months": shortened_months,
            "percentage": share.percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "extended_months": extended_months.normalize().to_string()
        }),
        reasoning: format!(
            "{} months / {}% = {} months",
            shortened_months,
            display_decimal(share.percentage),
            display_decimal(extended_months)
        ),
    };

    Ok(ExtensionResult {
        extended_months,
        audit_step,
    })
}
