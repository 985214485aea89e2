//! Convertor Core - Fundamental types
//!
//! This crate provides the types shared by every Convertor crate:
//! - `parse_value`: turns raw caller text into an `f64`
//! - `InputError`: why raw text could not be used as a value
//! - `ConvertorError`: structured, serialisable error report

mod input;
mod error;

pub use input::{parse_value, InputError};
pub use error::{ConvertorError, ErrorContext, codes};
