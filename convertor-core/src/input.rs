//! Raw value parsing
//!
//! Callers collect the value as text. Empty text is a distinct case that
//! must be reported before any numeric parse is attempted.

use thiserror::Error;

/// Error type for raw value input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no value was entered")]
    Empty,

    #[error("'{0}' is not a valid number")]
    Invalid(String),
}

/// Parse raw caller text into a value.
///
/// Whitespace around the number is ignored. Text that is empty after
/// trimming yields `InputError::Empty` without attempting a parse.
/// "NaN" and infinities are not measurements and are rejected.
pub fn parse_value(raw: &str) -> Result<f64, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::Invalid(text.to_string())),
    }
}
