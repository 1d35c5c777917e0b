//! Request-side models for a duration calculation.
//!
//! [`Operand`] carries a numeric input exactly as it arrived so the
//! calculator can reject non-numeric values itself. [`DurationRequest`] is
//! the typed form the pipeline runs on.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::ShorteningGrounds;

/// A numeric input before type checking.
///
/// # Example
///
/// ```
/// use training_duration_engine::models::Operand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Operand::from(36), Operand::Number(Decimal::from(36)));
/// assert_eq!(Operand::from(true), Operand::Bool(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A number.
    Number(Decimal),
    /// A boolean. Never accepted where a number is expected.
    Bool(bool),
    /// Text that could not be read as a number.
    Text(String),
    /// Any other kind of value, described by name (e.g. "null", "array").
    Other(&'static str),
}

impl Operand {
    /// Returns the numeric value, if this operand is a number.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Operand::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Describes the kind of value received, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Operand::Number(value) => format!("number {}", value.normalize()),
            Operand::Bool(value) => format!("boolean {}", value),
            Operand::Text(text) => format!("text '{}'", text),
            Operand::Other(kind) => (*kind).to_string(),
        }
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(Decimal::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Decimal::from_f64(value)
            .map(Operand::Number)
            .unwrap_or(Operand::Other("non-finite number"))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

/// How the part-time commitment is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// A share of full-time hours, 50 to 100.
    Percentage,
    /// Weekly hours, between half of and all of the full-time hours.
    Hours,
}

impl InputKind {
    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Percentage => "percentage",
            InputKind::Hours => "hours",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = EngineError;

    /// Parses the discriminator. The German spellings used by older
    /// clients (`prozent`, `stunden`) are accepted as aliases.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percentage" | "prozent" => Ok(InputKind::Percentage),
            "hours" | "stunden" => Ok(InputKind::Hours),
            other => Err(EngineError::InvalidInputKind {
                value: other.to_string(),
            }),
        }
    }
}

/// A type-checked calculation request.
///
/// Ranges are not checked yet; that happens inside the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Full-time reference duration in months.
    pub base_months: Decimal,
    /// Full-time weekly hours.
    pub full_time_hours: Decimal,
    /// The part-time commitment, interpreted according to `input_kind`.
    pub part_time_input: Decimal,
    /// Whether `part_time_input` is a percentage or hours.
    pub input_kind: InputKind,
    /// The qualifying shortening grounds.
    #[serde(default)]
    pub shortening_grounds: ShorteningGrounds,
}

impl DurationRequest {
    /// Creates a request with a percentage commitment and no shortening grounds.
    pub fn percentage(base_months: u32, full_time_hours: u32, percentage: u32) -> Self {
        Self {
            base_months: Decimal::from(base_months),
            full_time_hours: Decimal::from(full_time_hours),
            part_time_input: Decimal::from(percentage),
            input_kind: InputKind::Percentage,
            shortening_grounds: ShorteningGrounds::default(),
        }
    }

    /// Creates a request with an hours commitment and no shortening grounds.
    pub fn hours(base_months: u32, full_time_hours: Decimal, hours: Decimal) -> Self {
        Self {
            base_months: Decimal::from(base_months),
            full_time_hours,
            part_time_input: hours,
            input_kind: InputKind::Hours,
            shortening_grounds: ShorteningGrounds::default(),
        }
    }

    /// Replaces the shortening grounds.
    pub fn with_grounds(mut self, grounds: ShorteningGrounds) -> Self {
        self.shortening_grounds = grounds;
        self
    }
}
