//! Measurement requests - the entry points used by callers
//!
//! `convert_measurement` validates the unit pair before running the
//! engine. `convert_text` also handles the raw value text a caller
//! collects, so empty and non-numeric input are rejected first.

use std::fmt;
use serde::Serialize;
use convertor_core::{parse_value, InputError};
use crate::{check_units, convert, ConversionError, FailureReason};

/// Decimal places used when rendering a result
pub const DEFAULT_DECIMALS: usize = 4;

/// Convert a value between two named units.
///
/// Fails with `UnknownUnit` when the source name is not a registered
/// source or the destination name is not a registered destination, and
/// with `IncompatibleUnits` when both are known but measure different
/// things.
pub fn convert_measurement(value: f64, source: &str, dest: &str) -> Result<f64, ConversionError> {
    check_units(source, dest)?;
    Ok(convert(value, source, dest))
}

/// Parse raw value text, then convert it.
///
/// Empty text short-circuits before any parse or unit lookup.
pub fn convert_text(raw: &str, source: &str, dest: &str) -> Result<Conversion, ConversionError> {
    let value = parse_value(raw)?;
    let result = convert_measurement(value, source, dest)?;

    Ok(Conversion {
        value,
        source: source.to_string(),
        dest: dest.to_string(),
        result,
    })
}

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub source: String,
    pub dest: String,
    pub result: f64,
}

impl Conversion {
    /// Result followed by the destination unit name, e.g. "328.0840 Feet"
    pub fn display(&self, decimals: usize) -> String {
        format!("{:.*} {}", decimals, self.result, self.dest)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(DEFAULT_DECIMALS))
    }
}

/// Serialisable outcome of `convert_measurement`:
/// `{"ok": true, "result": 32.0}` or `{"ok": false, "reason": "UnknownUnit"}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl MeasurementOutcome {
    pub fn success(result: f64) -> Self {
        MeasurementOutcome { ok: true, result: Some(result), reason: None }
    }

    pub fn failure(reason: FailureReason) -> Self {
        MeasurementOutcome { ok: false, result: None, reason: Some(reason) }
    }
}

/// Failed outcome for a unit error. Input errors are raised before the
/// core runs and have no outcome; they are handed back unchanged.
impl TryFrom<&ConversionError> for MeasurementOutcome {
    type Error = InputError;

    fn try_from(err: &ConversionError) -> Result<Self, Self::Error> {
        match err {
            ConversionError::UnknownUnit { .. } => Ok(Self::failure(FailureReason::UnknownUnit)),
            ConversionError::IncompatibleUnits { .. } => Ok(Self::failure(FailureReason::IncompatibleUnits)),
            ConversionError::Input(e) => Err(e.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_convert_measurement() {
        let feet = convert_measurement(100.0, "Metres", "Feet").unwrap();
        assert!((feet - 328.084).abs() < 1e-4);

        assert_eq!(convert_measurement(0.0, "Celsius", "Kelvin"), Ok(273.15));
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert_measurement(21.5, "Celsius", "Celsius"), Ok(21.5));
    }

    #[test]
    fn test_convert_measurement_failures() {
        assert!(matches!(
            convert_measurement(1.0, "Metres", "Bogus"),
            Err(ConversionError::UnknownUnit { role: Role::Destination, .. })
        ));
        assert!(matches!(
            convert_measurement(1.0, "Celsius", "Feet"),
            Err(ConversionError::IncompatibleUnits { .. })
        ));
        // Kilograms is only offered as a source
        assert!(matches!(
            convert_measurement(1000.0, "Grams", "Kilograms"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_convert_text() {
        let conversion = convert_text("100", "Metres", "Feet").unwrap();
        assert_eq!(conversion.value, 100.0);
        assert_eq!(conversion.display(4), "328.0840 Feet");
        assert_eq!(conversion.to_string(), "328.0840 Feet");
    }

    #[test]
    fn test_convert_text_empty_short_circuits() {
        // Unit names are never consulted for empty input
        assert_eq!(
            convert_text("", "Bogus", "Bogus"),
            Err(ConversionError::Input(InputError::Empty))
        );
    }

    #[test]
    fn test_convert_text_invalid_number() {
        assert_eq!(
            convert_text("ten", "Metres", "Feet"),
            Err(ConversionError::Input(InputError::Invalid("ten".to_string())))
        );
    }

    #[test]
    fn test_display_decimals() {
        let conversion = convert_text("0", "Kelvin", "Fahrenheit").unwrap();
        assert_eq!(conversion.display(4), "-459.6700 Fahrenheit");
        assert_eq!(conversion.display(1), "-459.7 Fahrenheit");
    }

    #[test]
    fn test_outcome_from_unit_errors() {
        let err = convert_measurement(1.0, "Celsius", "Metres").unwrap_err();
        assert_eq!(
            MeasurementOutcome::try_from(&err),
            Ok(MeasurementOutcome::failure(FailureReason::UnknownUnit))
        );

        let err = convert_measurement(1.0, "Celsius", "Miles").unwrap_err();
        assert_eq!(
            MeasurementOutcome::try_from(&err),
            Ok(MeasurementOutcome::failure(FailureReason::IncompatibleUnits))
        );
    }

    #[test]
    fn test_input_error_has_no_outcome() {
        let err = ConversionError::Input(InputError::Empty);
        assert_eq!(MeasurementOutcome::try_from(&err), Err(InputError::Empty));

        let err = convert_text("ten", "Metres", "Feet").unwrap_err();
        assert_eq!(
            MeasurementOutcome::try_from(&err),
            Err(InputError::Invalid("ten".to_string()))
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(MeasurementOutcome::success(32.0)).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "result": 32.0}));

        let json = serde_json::to_value(MeasurementOutcome::failure(FailureReason::IncompatibleUnits)).unwrap();
        assert_eq!(json, serde_json::json!({"ok": false, "reason": "IncompatibleUnits"}));
    }
}
