//! Request parsing for the training duration API.
//!
//! Turns a raw JSON body into a [`CalculationRequest`]. This layer checks
//! the payload's shape (required fields, the shortening-grounds schema) and
//! coerces numbers. Value ranges are left to the calculator.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::models::{Operand, ShorteningGrounds};

/// Top-level fields every calculation request must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "base_duration_months",
    "full_time_hours",
    "part_time_input",
    "input_kind",
    "shortening_grounds",
];

const GROUNDS_FIELD: &str = "shortening_grounds";

const GROUND_BOOL_KEYS: [&str; 11] = [
    "higher_education_entry",
    "intermediate_school",
    "over_21",
    "family_care_responsibility",
    "childcare_responsibility",
    "experience_q1",
    "experience_q2",
    "experience_q3",
    "experience_q4",
    "experience_q5",
    "experience_q6",
];

const GROUND_NUMBER_KEYS: [&str; 3] = [
    "prior_experience_months",
    "experience_q2_months",
    "occupational_shortening_months",
];

/// A transport-level problem with a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The body is not a JSON object or could not be read at all.
    InvalidRequest {
        /// What was wrong with the body.
        message: String,
    },
    /// One or more required fields are absent.
    MissingFields {
        /// The missing field names, in [`REQUIRED_FIELDS`] order.
        fields: Vec<String>,
    },
    /// The body has the right fields but an invalid structure.
    InvalidPayload {
        /// What was wrong with the payload.
        message: String,
        /// Structured details, e.g. the offending field.
        details: Option<Value>,
    },
}

/// Answers to the occupational-experience questionnaire.
///
/// Older clients send these alongside the shortening grounds. They are
/// validated and kept for the record but do not change the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceAnswers {
    /// Childcare responsibility, superseded by `family_care_responsibility`.
    pub childcare_responsibility: bool,
    /// Yes/no answers to the six experience questions.
    pub questions: [bool; 6],
    /// Duration given for question two, in months.
    pub q2_months: Decimal,
    /// A shortening the client computed itself, in months.
    pub occupational_shortening_months: Decimal,
}

/// A parsed calculation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// Full-time reference duration, as received.
    pub base_duration_months: Operand,
    /// Full-time weekly hours, as received.
    pub full_time_hours: Operand,
    /// Part-time percentage or hours, as received.
    pub part_time_input: Operand,
    /// The input kind discriminator, as text.
    pub input_kind: String,
    /// The qualifying shortening grounds.
    pub shortening_grounds: ShorteningGrounds,
    /// Legacy questionnaire answers.
    pub experience_answers: ExperienceAnswers,
}

impl CalculationRequest {
    /// Parses a request body.
    ///
    /// Numeric fields are coerced but not validated: a value that is not a
    /// number reaches the calculator as a non-numeric [`Operand`] and is
    /// rejected there.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let object = body.as_object().ok_or_else(|| RequestError::InvalidRequest {
            message: "Request body must be a JSON object".to_string(),
        })?;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(RequestError::MissingFields { fields: missing });
        }

        let grounds = object[GROUNDS_FIELD]
            .as_object()
            .ok_or_else(|| RequestError::InvalidPayload {
                message: format!("{} must be an object", GROUNDS_FIELD),
                details: Some(serde_json::json!({ "field": GROUNDS_FIELD })),
            })?;
        let (shortening_grounds, experience_answers) = parse_grounds(grounds)?;

        Ok(Self {
            base_duration_months: operand_from_value(&object["base_duration_months"]),
            full_time_hours: operand_from_value(&object["full_time_hours"]),
            part_time_input: operand_from_value(&object["part_time_input"]),
            input_kind: match &object["input_kind"] {
                Value::String(kind) => kind.clone(),
                other => other.to_string(),
            },
            shortening_grounds,
            experience_answers,
        })
    }
}

fn parse_grounds(
    grounds: &Map<String, Value>,
) -> Result<(ShorteningGrounds, ExperienceAnswers), RequestError> {
    let mut unexpected: Vec<&str> = grounds
        .keys()
        .map(String::as_str)
        .filter(|key| !GROUND_BOOL_KEYS.contains(key) && !GROUND_NUMBER_KEYS.contains(key))
        .collect();
    if !unexpected.is_empty() {
        unexpected.sort_unstable();
        return Err(RequestError::InvalidPayload {
            message: format!("Unknown keys in {}", GROUNDS_FIELD),
            details: Some(serde_json::json!({
                "field": GROUNDS_FIELD,
                "unexpected": unexpected
            })),
        });
    }

    let flag = |key: &str| -> Result<bool, RequestError> {
        match grounds.get(key) {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(ground_type_error(key, "a boolean")),
        }
    };
    let months = |key: &str| -> Result<Decimal, RequestError> {
        match grounds.get(key) {
            None => Ok(Decimal::ZERO),
            Some(Value::Number(number)) => {
                decimal_from_number(number).ok_or_else(|| ground_type_error(key, "a finite number"))
            }
            Some(_) => Err(ground_type_error(key, "a number")),
        }
    };

    let shortening_grounds = ShorteningGrounds {
        higher_education_entry: flag("higher_education_entry")?,
        intermediate_school: flag("intermediate_school")?,
        over_21: flag("over_21")?,
        family_care_responsibility: flag("family_care_responsibility")?,
        prior_experience_months: months("prior_experience_months")?,
    };
    let experience_answers = ExperienceAnswers {
        childcare_responsibility: flag("childcare_responsibility")?,
        questions: [
            flag("experience_q1")?,
            flag("experience_q2")?,
            flag("experience_q3")?,
            flag("experience_q4")?,
            flag("experience_q5")?,
            flag("experience_q6")?,
        ],
        q2_months: months("experience_q2_months")?,
        occupational_shortening_months: months("occupational_shortening_months")?,
    };

    Ok((shortening_grounds, experience_answers))
}

fn ground_type_error(key: &str, expected: &str) -> RequestError {
    RequestError::InvalidPayload {
        message: format!("{} must be {}", key, expected),
        details: Some(serde_json::json!({
            "field": format!("{}.{}", GROUNDS_FIELD, key)
        })),
    }
}

fn decimal_from_number(number: &Number) -> Option<Decimal> {
    if let Some(value) = number.as_i64() {
        return Some(Decimal::from(value));
    }
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| number.as_f64().and_then(Decimal::from_f64))
}

/// Parses a number written with either German or English separators.
///
/// The right-most of `,` and `.` is the decimal separator and the other one
/// groups thousands. A lone comma is always decimal.
///
/// # Examples
///
/// ```
/// use training_duration_engine::api::parse_locale_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_locale_number("1.234,5"), Some(Decimal::new(12345, 1)));
/// assert_eq!(parse_locale_number("37,5"), Some(Decimal::new(375, 1)));
/// assert_eq!(parse_locale_number("40.5"), Some(Decimal::new(405, 1)));
/// assert_eq!(parse_locale_number("vierzig"), None);
/// ```
pub fn parse_locale_number(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.chars().any(char::is_whitespace) || text.contains('_') {
        return None;
    }
    let normalized = match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    };
    Decimal::from_str(&normalized).ok()
}

/// Converts a JSON value into a calculator operand.
///
/// Numbers and numeric strings become [`Operand::Number`]. Booleans stay
/// booleans so the calculator can reject them by name.
pub fn operand_from_value(value: &Value) -> Operand {
    match value {
        Value::Number(number) => decimal_from_number(number)
            .map(Operand::Number)
            .unwrap_or(Operand::Other("number out of range")),
        Value::String(text) => parse_locale_number(text)
            .map(Operand::Number)
            .unwrap_or_else(|| Operand::Text(text.clone())),
        Value::Bool(value) => Operand::Bool(*value),
        Value::Null => Operand::Other("null"),
        Value::Array(_) => Operand::Other("array"),
        Value::Object(_) => Operand::Other("object"),
    }
}
