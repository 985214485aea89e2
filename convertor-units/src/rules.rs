//! Conversion rule table
//!
//! One rule per ordered (source, destination) pair. Distance and weight
//! rules are scale factors; temperature rules are affine formulas. The
//! table is built on first use and never modified afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// How to turn a value in one unit into a value in another
#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    /// value * factor
    Scale(f64),
    /// Named affine formula (temperature)
    Formula(fn(f64) -> f64),
}

impl ConversionRule {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            ConversionRule::Scale(factor) => value * factor,
            ConversionRule::Formula(f) => f(value),
        }
    }
}

type RuleTable = HashMap<&'static str, HashMap<&'static str, ConversionRule>>;

/// Rules keyed by source name, then destination name
static RULES: LazyLock<RuleTable> = LazyLock::new(build_rules);

/// Rule for an ordered pair, if one is defined
pub fn rule_for(source: &str, dest: &str) -> Option<ConversionRule> {
    RULES.get(source)
        .and_then(|targets| targets.get(dest))
        .copied()
}

// ========== Temperature Formulas ==========

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + 273.15
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - 273.15) * 9.0 / 5.0 + 32.0
}

// ========== Table ==========

/// (metric, imperial, metric → imperial, imperial → metric)
///
/// Factors are rounded published values, so a pair and its inverse are
/// not exact reciprocals.
const DISTANCE_FACTORS: [(&str, &str, f64, f64); 12] = [
    ("Centimetres", "Inches", 0.393701, 2.54),
    ("Metres", "Inches", 39.3701, 0.0254),
    ("Kilometres", "Inches", 39370.1, 0.0000254),
    ("Centimetres", "Feet", 0.0328084, 30.48),
    ("Metres", "Feet", 3.28084, 0.3048),
    ("Kilometres", "Feet", 3280.84, 0.0003048),
    ("Centimetres", "Yards", 0.0109361, 91.44),
    ("Metres", "Yards", 1.09361, 0.9144),
    ("Kilometres", "Yards", 1093.61, 0.0009144),
    ("Centimetres", "Miles", 0.0000062137, 160934.0),
    ("Metres", "Miles", 0.000621371, 1609.34),
    ("Kilometres", "Miles", 0.621371, 1.60934),
];

const WEIGHT_FACTORS: [(&str, &str, f64, f64); 9] = [
    ("Milligrams", "Ounces", 0.000035274, 28349.5),
    ("Grams", "Ounces", 0.035274, 28.3495),
    ("Kilograms", "Ounces", 35.274, 0.0283495),
    ("Milligrams", "Pounds", 0.00000220462, 453592.0),
    ("Grams", "Pounds", 0.00220462, 453.592),
    ("Kilograms", "Pounds", 2.20462, 0.453592),
    ("Milligrams", "Tonnes", 0.000000001, 1000000000.0),
    ("Grams", "Tonnes", 0.000001, 1000000.0),
    ("Kilograms", "Tonnes", 0.001, 1000.0),
];

const TEMPERATURE_FORMULAS: [(&str, &str, fn(f64) -> f64); 6] = [
    ("Celsius", "Fahrenheit", celsius_to_fahrenheit),
    ("Fahrenheit", "Celsius", fahrenheit_to_celsius),
    ("Celsius", "Kelvin", celsius_to_kelvin),
    ("Kelvin", "Celsius", kelvin_to_celsius),
    ("Fahrenheit", "Kelvin", fahrenheit_to_kelvin),
    ("Kelvin", "Fahrenheit", kelvin_to_fahrenheit),
];

fn build_rules() -> RuleTable {
    let mut table = RuleTable::new();
    let mut insert = |source: &'static str, dest: &'static str, rule: ConversionRule| {
        table.entry(source).or_default().insert(dest, rule);
    };

    for (metric, imperial, forward, inverse) in DISTANCE_FACTORS.into_iter().chain(WEIGHT_FACTORS) {
        insert(metric, imperial, ConversionRule::Scale(forward));
        insert(imperial, metric, ConversionRule::Scale(inverse));
    }

    for (source, dest, formula) in TEMPERATURE_FORMULAS {
        insert(source, dest, ConversionRule::Formula(formula));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-4, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_rule_count() {
        let count: usize = RULES.values().map(|targets| targets.len()).sum();
        // 24 distance + 18 weight + 6 temperature
        assert_eq!(count, 48);
    }

    #[test]
    fn test_scale_rule() {
        let rule = rule_for("Metres", "Feet").unwrap();
        assert!(matches!(rule, ConversionRule::Scale(_)));
        assert_close(rule.apply(100.0), 328.084);
    }

    #[test]
    fn test_inverse_rules_exist() {
        for (metric, imperial, _, _) in DISTANCE_FACTORS.iter().chain(WEIGHT_FACTORS.iter()) {
            assert!(rule_for(metric, imperial).is_some(), "{} -> {}", metric, imperial);
            assert!(rule_for(imperial, metric).is_some(), "{} -> {}", imperial, metric);
        }
    }

    #[test]
    fn test_temperature_rules_are_formulas() {
        for (source, dest, _) in TEMPERATURE_FORMULAS {
            let rule = rule_for(source, dest).unwrap();
            assert!(matches!(rule, ConversionRule::Formula(_)));
        }
    }

    #[test]
    fn test_formulas() {
        assert_close(celsius_to_fahrenheit(100.0), 212.0);
        assert_close(fahrenheit_to_celsius(212.0), 100.0);
        assert_close(celsius_to_kelvin(-273.15), 0.0);
        assert_close(kelvin_to_celsius(0.0), -273.15);
        assert_close(fahrenheit_to_kelvin(32.0), 273.15);
        assert_close(kelvin_to_fahrenheit(0.0), -459.67);
    }

    #[test]
    fn test_missing_rules() {
        assert!(rule_for("Grams", "Kilograms").is_none());
        assert!(rule_for("Metres", "Metres").is_none());
        assert!(rule_for("Celsius", "Celsius").is_none());
        assert!(rule_for("Bogus", "Feet").is_none());
        // Rules are ordered pairs; metric to metric is never defined
        assert!(rule_for("Centimetres", "Metres").is_none());
    }
}
