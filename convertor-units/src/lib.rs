//! Convertor Units - Unit registry and conversion engine
//!
//! Converts a value between units of the same category:
//! - Distance (Centimetres, Metres, Kilometres ↔ Inches, Feet, Yards, Miles)
//! - Weight (Milligrams, Grams, Kilograms ↔ Ounces, Pounds, Tonnes)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//!
//! Source and destination units live in two separate registries. A name
//! offered as a source is not necessarily valid as a destination.

mod category;
mod unit;
mod registry;
mod rules;
mod engine;
mod measurement;

pub use category::Category;
pub use unit::{Unit, Role, ConversionError, FailureReason};
pub use registry::{UnitRegistry, SOURCE_UNITS, DESTINATION_UNITS, are_compatible, check_units};
pub use rules::{ConversionRule, rule_for};
pub use engine::convert;
pub use measurement::{
    convert_measurement, convert_text, Conversion, MeasurementOutcome, DEFAULT_DECIMALS,
};
