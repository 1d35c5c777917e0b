//! Duration result models.
//!
//! This module contains the [`DurationResult`] type and the audit structures
//! that record how each pipeline stage arrived at its value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use training_duration_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 5,
///     rule_id: "floor_rounding".to_string(),
///     rule_name: "Floor to Whole Months".to_string(),
///     clause_ref: "§ 7a Abs. 2 Satz 2 BBiG".to_string(),
///     input: serde_json::json!({"clamped_months": "51.43"}),
///     output: serde_json::json!({"final_months": 51}),
///     reasoning: "floor(51.43) = 51".to_string(),
/// };
/// assert_eq!(step.rule_id, "floor_rounding");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A noteworthy condition found during calculation.
///
/// Warnings never change the result; they point out where a rule bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Finds the step recorded for a rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete result of a duration calculation.
///
/// Immutable once produced. Contains no clock readings or identifiers, so
/// equal inputs always produce equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Full-time reference duration in months.
    pub original_months: u32,
    /// Duration after shortening grounds, in months.
    pub shortened_months: u32,
    /// Part-time share as a percentage of full time.
    pub part_time_percentage: Decimal,
    /// Part-time weekly hours.
    pub part_time_hours: Decimal,
    /// Duration after the automatic part-time extension (fractional).
    pub after_extension_months: Decimal,
    /// Duration after the statutory upper-bound clamp (fractional).
    pub after_upper_bound_months: Decimal,
    /// Final contract duration in whole months.
    pub final_months: u32,
    /// Final contract duration in years, one decimal place.
    pub final_years: Decimal,
    /// `final_months - shortened_months`, taken after the no-disadvantage
    /// override. After a shortening the override can make this smaller than
    /// the part-time extension alone.
    pub extension_months: i32,
    /// Shortening actually applied (capped).
    pub total_shortening_months: u32,
    /// Sum of all shortening credits before the cap.
    pub raw_shortening_months: u32,
    /// Whether the no-disadvantage override reset the final duration.
    pub no_disadvantage_applied: bool,
    /// How every stage reached its value.
    pub audit_trace: AuditTrace,
}
