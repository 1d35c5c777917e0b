//! Shortening aggregation (§ 8 Abs. 1 BBiG).
//!
//! Each qualifying ground earns a fixed month credit. The credits are summed
//! and the sum is capped before it is taken off the base duration. The raw
//! sum is kept next to the capped one so the cap stays visible.

use serde::{Deserialize, Serialize};

use crate::config::ShorteningRules;
use crate::models::{AuditStep, ShorteningGrounds};

/// Raw and capped shortening totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShorteningAggregate {
    /// Sum of all credits before the cap.
    pub raw_months: u32,
    /// Sum after the cap.
    pub capped_months: u32,
}

/// The result of applying shortening grounds to a base duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShorteningResult {
    /// The totals that were applied.
    pub aggregate: ShorteningAggregate,
    /// Base duration minus the capped shortening, never below zero.
    pub shortened_months: u32,
    /// The audit step recording the aggregation.
    pub audit_step: AuditStep,
}

/// Lists the credit each qualifying ground earns, in a fixed order.
///
/// Prior experience is a threshold, not a scale: one month of experience
/// and forty months earn the same flat credit.
pub fn shortening_credits(
    grounds: &ShorteningGrounds,
    rules: &ShorteningRules,
) -> Vec<(&'static str, u32)> {
    let mut credits = Vec::new();
    if grounds.higher_education_entry {
        credits.push(("higher_education_entry", rules.higher_education_entry_months));
    }
    if grounds.intermediate_school {
        credits.push(("intermediate_school", rules.intermediate_school_months));
    }
    if grounds.over_21 {
        credits.push(("over_21", rules.over_21_months));
    }
    if grounds.family_care_responsibility {
        credits.push(("family_care_responsibility", rules.family_care_months));
    }
    if grounds.has_prior_experience() {
        credits.push(("prior_experience", rules.prior_experience_months));
    }
    credits
}

/// Sums the credits of all qualifying grounds and applies the cap.
///
/// # Examples
///
/// ```
/// use training_duration_engine::calculation::aggregate_shortening;
/// use training_duration_engine::config::ShorteningRules;
/// use training_duration_engine::models::ShorteningGrounds;
///
/// let grounds = ShorteningGrounds {
///     higher_education_entry: true,
///     intermediate_school: true,
///     ..ShorteningGrounds::default()
/// };
/// let aggregate = aggregate_shortening(&grounds, &ShorteningRules::default());
/// assert_eq!(aggregate.raw_months, 18);
/// assert_eq!(aggregate.capped_months, 12);
/// ```
pub fn aggregate_shortening(
    grounds: &ShorteningGrounds,
    rules: &ShorteningRules,
) -> ShorteningAggregate {
    let raw_months: u32 = shortening_credits(grounds, rules)
        .iter()
        .map(|(_, months)| months)
        .sum();

    ShorteningAggregate {
        raw_months,
        capped_months: raw_months.min(rules.cap_months),
    }
}

/// Applies the capped shortening to the base duration.
pub fn apply_shortening(
    base_months: u32,
    grounds: &ShorteningGrounds,
    rules: &ShorteningRules,
    step_number: u32,
) -> ShorteningResult {
    let credits = shortening_credits(grounds, rules);
    let aggregate = aggregate_shortening(grounds, rules);
    let shortened_months = base_months.saturating_sub(aggregate.capped_months);

    let reasoning = if credits.is_empty() {
        format!("No shortening grounds apply; duration stays {} months", base_months)
    } else {
        let terms: Vec<String> = credits.iter().map(|(_, months)| months.to_string()).collect();
        let capped_note = if aggregate.raw_months > aggregate.capped_months {
            format!(", capped at {}", rules.cap_months)
        } else {
            String::new()
        };
        format!(
            "Credits {} = {} months{}; {} - {} = {} months",
            terms.join(" + "),
            aggregate.raw_months,
            capped_note,
            base_months,
            aggregate.capped_months,
            shortened_months
        )
    };

    let credit_map: serde_json::Map<String, serde_json::Value> = credits
        .iter()
        .map(|(ground, months)| (ground.to_string(), serde_json::json!(months)))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "shortening".to_string(),
        rule_name: "Shortening Grounds".to_string(),
        clause_ref: "§ 8 Abs. 1 BBiG".to_string(),
        input: serde_json::json!({
            "base_months": base_months,
            "credits": credit_map,
            "cap_months": rules.cap_months
        }),
        output: serde_json::json!({
            "raw_shortening_months": aggregate.raw_months,
            "capped_shortening_months": aggregate.capped_months,
            "shortened_months": shortened_months
        }),
        reasoning,
    };

    ShorteningResult {
        aggregate,
        shortened_months,
        audit_step,
    }
}
