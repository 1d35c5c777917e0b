//! Statutory upper-bound clamp (§ 7a Abs. 2 Satz 1 BBiG).
//!
//! The calendar duration of a part-time arrangement never exceeds a fixed
//! multiple of the full-time reference duration, however low the share.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::display_decimal;

/// The result of applying the upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpperBoundResult {
    /// The duration after the clamp, unrounded.
    pub clamped_months: Decimal,
    /// The ceiling that was applied.
    pub upper_bound_months: Decimal,
    /// Whether the ceiling actually lowered the duration.
    pub applied: bool,
    /// The audit step recording the clamp.
    pub audit_step: AuditStep,
}

/// Caps the extended duration at `base_months * factor`.
///
/// The ceiling is measured against the base duration, not the shortened one.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::apply_upper_bound;
/// use rust_decimal::Decimal;
///
/// let result = apply_upper_bound(Decimal::from(72), 36, Decimal::new(15, 1), 4);
/// assert_eq!(result.clamped_months, Decimal::from(54));
/// assert!(result.applied);
/// ```
pub fn apply_upper_bound(
    extended_months: Decimal,
    base_months: u32,
    factor: Decimal,
    step_number: u32,
) -> UpperBoundResult {
    let upper_bound_months = Decimal::from(base_months) * factor;
    let applied = extended_months > upper_bound_months;
    let clamped_months = extended_months.min(upper_bound_months);

    let reasoning = if applied {
        format!(
            "{} months exceeds {} x {} = {} months; capped",
            display_decimal(extended_months),
            base_months,
            display_decimal(factor),
            display_decimal(upper_bound_months)
        )
    } else {
        format!(
            "{} months is within {} x {} = {} months",
            display_decimal(extended_months),
            base_months,
            display_decimal(factor),
            display_decimal(upper_bound_months)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "upper_bound".to_string(),
        rule_name: "Statutory Upper Bound".to_string(),
        clause_ref: "§ 7a Abs. 2 Satz 1 BBiG".to_string(),
        input: serde_json::json!({
            "extended_months": extended_months.normalize().to_string(),
            "base_months": base_months,
            "factor": factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "clamped_months": clamped_months.normalize().to_string(),
            "upper_bound_months": upper_bound_months.normalize().to_string(),
            "applied": applied
        }),
        reasoning,
    };

    UpperBoundResult {
        clamped_months,
        upper_bound_months,
        applied,
        audit_step,
    }
}
