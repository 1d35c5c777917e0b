//! Shortening grounds model.
//!
//! A fixed-size record of the qualifying facts that shorten the nominal
//! training duration before part-time extension is computed (§ 8 Abs. 1 BBiG).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The qualifying facts a trainee can bring into a shortening decision.
///
/// Each ground is independent. The credit each one earns and the cap on
/// their sum live in [`ShorteningRules`](crate::config::ShorteningRules),
/// not here.
///
/// # Example
///
/// ```
/// use training_duration_engine::models::ShorteningGrounds;
///
/// let grounds = ShorteningGrounds {
///     higher_education_entry: true,
///     ..ShorteningGrounds::default()
/// };
/// assert!(grounds.any());
/// assert!(!ShorteningGrounds::default().any());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorteningGrounds {
    /// Holds a higher education entrance qualification (Abitur).
    pub higher_education_entry: bool,
    /// Holds an intermediate school leaving certificate (Realschulabschluss).
    pub intermediate_school: bool,
    /// Is older than 21 at the start of training.
    pub over_21: bool,
    /// Carries family or care responsibility.
    pub family_care_responsibility: bool,
    /// Months of prior relevant occupational experience.
    ///
    /// Only the sign matters: any positive value earns the full experience
    /// credit, zero or less earns nothing.
    pub prior_experience_months: Decimal,
}

impl ShorteningGrounds {
    /// Returns true if prior experience qualifies for the experience credit.
    pub fn has_prior_experience(&self) -> bool {
        self.prior_experience_months > Decimal::ZERO
    }

    /// Returns true if at least one ground qualifies.
    pub fn any(&self) -> bool {
        self.higher_education_entry
            || self.intermediate_school
            || self.over_21
            || self.family_care_responsibility
            || self.has_prior_experience()
    }
}
