//! No-disadvantage override (§ 8 Abs. 3 BBiG).
//!
//! Runs after rounding. When the rounded duration overruns the full-time
//! reference duration by no more than the tolerance, the trainee gets the
//! reference duration instead.

use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of the no-disadvantage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoDisadvantageResult {
    /// The final duration after the check.
    pub final_months: u32,
    /// Whether the override reset the duration.
    pub applied: bool,
    /// The audit step recording the check.
    pub audit_step: AuditStep,
}

/// Resets small overruns of the base duration to the base duration.
///
/// Compares against `base_months` only. Durations at or below the base are
/// left alone, whatever produced them.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::apply_no_disadvantage;
///
/// assert_eq!(apply_no_disadvantage(42, 36, 6, 6).final_months, 36);
/// assert_eq!(apply_no_disadvantage(43, 36, 6, 6).final_months, 43);
/// ```
pub fn apply_no_disadvantage(
    rounded_months: u32,
    base_months: u32,
    tolerance_months: u32,
    step_number: u32,
) -> NoDisadvantageResult {
    let overrun = rounded_months.saturating_sub(base_months);
    let applied = overrun > 0 && overrun <= tolerance_months;
    let final_months = if applied { base_months } else { rounded_months };

    let reasoning = if overrun == 0 {
        format!(
            "{} months does not exceed the full-time duration of {} months",
            rounded_months, base_months
        )
    } else if applied {
        format!(
            "Overrun of {} months is within {} months; reset to {} months",
            overrun, tolerance_months, base_months
        )
    } else {
        format!(
            "Overrun of {} months exceeds {} months; {} months stands",
            overrun, tolerance_months, rounded_months
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "no_disadvantage".to_string(),
        rule_name: "No Disadvantage for Part-Time".to_string(),
        clause_ref: "§ 8 Abs. 3 BBiG".to_string(),
        input: serde_json::json!({
            "rounded_months": rounded_months,
            "base_months": base_months,
            "tolerance_months": tolerance_months
        }),
        output: serde_json::json!({
            "final_months": final_months,
            "overrun_months": overrun,
            "applied": applied
        }),
        reasoning,
    };

    NoDisadvantageResult {
        final_months,
        applied,
        audit_step,
    }
}
