//! Structured error reports
//!
//! Errors never crash a caller. They are values carrying a machine-readable
//! code, a message meant for the person who asked for the conversion, and
//! an optional hint on how to fix the request.

use crate::InputError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
}

/// Which conversion the error belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Raw value text as supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertorError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ConvertorError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the unit pair the request named
    pub fn with_units(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.from = Some(from.into());
        ctx.to = Some(to.into());
        self
    }

    /// Builder: record the raw value text
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.input = Some(input.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn empty_input() -> Self {
        Self::new(codes::EMPTY_INPUT, "Please enter a value to perform conversion.")
    }

    pub fn invalid_number(text: &str) -> Self {
        Self::new(codes::INVALID_NUMBER, format!("'{}' is not a valid number.", text))
            .with_suggestion("Enter a plain decimal number such as 12.5")
            .with_input(text)
    }

    /// Unknown unit. The message names both selected units, like the
    /// incompatible case, since the caller cannot tell them apart visually.
    pub fn unknown_unit(from: &str, to: &str, unknown: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, not_possible(from, to))
            .with_suggestion(format!("'{}' is not a known unit; use list_units to see valid names", unknown))
            .with_units(from, to)
    }

    pub fn incompatible_units(from: &str, to: &str) -> Self {
        Self::new(codes::INCOMPATIBLE_UNITS, not_possible(from, to))
            .with_suggestion("Pick two units measuring the same thing (distance, weight or temperature)")
            .with_units(from, to)
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, format!("Invalid parameters: {}", details.into()))
    }
}

fn not_possible(from: &str, to: &str) -> String {
    format!("The conversion between {} and {} is not possible. Please reselect.", from, to)
}

impl std::fmt::Display for ConvertorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertorError {}

impl From<InputError> for ConvertorError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Empty => Self::empty_input(),
            InputError::Invalid(text) => Self::invalid_number(&text),
        }
    }
}
