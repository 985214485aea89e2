//! Unit representation and conversion errors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use convertor_core::{ConvertorError, InputError};
use crate::Category;

/// A named unit and the category it measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Case-sensitive unit name (e.g., "Centimetres")
    pub name: &'static str,
    pub category: Category,
}

impl Unit {
    pub const fn new(name: &'static str, category: Category) -> Self {
        Unit { name, category }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Which side of a conversion a registry serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Source,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Destination => write!(f, "destination"),
        }
    }
}

/// Why a measurement could not be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    IncompatibleUnits,
    UnknownUnit,
}

/// Errors that can occur while serving a conversion request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Name is not registered for this side of the conversion
    #[error("unknown {role} unit: {unit}")]
    UnknownUnit { unit: String, role: Role },

    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): incompatible categories")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl ConversionError {
    /// Structured report for a request naming `from` and `to`
    pub fn report(&self, from: &str, to: &str) -> ConvertorError {
        match self {
            ConversionError::UnknownUnit { unit, .. } => ConvertorError::unknown_unit(from, to, unit),
            ConversionError::IncompatibleUnits { .. } => ConvertorError::incompatible_units(from, to),
            ConversionError::Input(e) => ConvertorError::from(e.clone()).with_units(from, to),
        }
    }

    /// Message shown to the person who asked for the conversion
    pub fn user_message(&self, from: &str, to: &str) -> String {
        self.report(from, to).message
    }
}
