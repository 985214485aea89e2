//! Conversion engine

use tracing::debug;
use crate::rules::rule_for;

/// Convert `value` from `source` to `dest`.
///
/// The engine is total: it never fails. Callers are expected to have
/// checked the pair with [`crate::check_units`] first.
///
/// A pair with no rule returns `value` unchanged. This includes
/// `source == dest` and pairs that were never validated, such as
/// `Grams → Kilograms`. Callers that need to know whether a real
/// conversion happened should ask [`crate::rule_for`].
pub fn convert(value: f64, source: &str, dest: &str) -> f64 {
    match rule_for(source, dest) {
        Some(rule) => rule.apply(value),
        None => {
            debug!(source, dest, "no conversion rule, returning value unchanged");
            value
        }
    }
}
