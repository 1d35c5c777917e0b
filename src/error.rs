//! Error types for the training duration engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a part-time
//! training duration or loading a rule set.

use thiserror::Error;

/// The main error type for the training duration engine.
///
/// The first three variants are caller errors raised by the calculator
/// before any arithmetic happens. The remaining variants are internal and
/// must never be shown verbatim to an API caller.
///
/// # Example
///
/// ```
/// use training_duration_engine::error::EngineError;
///
/// let error = EngineError::InvalidInputKind {
///     value: "weeks".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input kind 'weeks': expected 'percentage' or 'hours'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A numeric field received a non-numeric value (including a boolean).
    #[error("Type mismatch for '{field}': {message}")]
    TypeMismatch {
        /// The offending field.
        field: String,
        /// A description of what was received.
        message: String,
    },

    /// A numeric field is outside its legally or operationally valid range.
    #[error("Value out of range for '{field}': {message}")]
    RangeError {
        /// The offending field.
        field: String,
        /// A description naming the violated bound.
        message: String,
    },

    /// The part-time input discriminator is neither percentage nor hours.
    #[error("Invalid input kind '{value}': expected 'percentage' or 'hours'")]
    InvalidInputKind {
        /// The value that was received.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule set parsed but contains values the calculator cannot work with.
    #[error("Invalid rule set: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::TypeMismatch { .. }
                | EngineError::RangeError { .. }
                | EngineError::InvalidInputKind { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
