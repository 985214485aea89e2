//! Unit registries - which names exist and what they measure
//!
//! Source and destination names are kept in two registries. Temperature
//! units appear in both; distance and weight units are split between
//! metric (source) and imperial (destination) names.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, ConversionError, Role, Unit};

/// Units that may be converted from
pub static SOURCE_UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| UnitRegistry::new(Role::Source));

/// Units that may be converted to
pub static DESTINATION_UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| UnitRegistry::new(Role::Destination));

/// Registry of the units offered for one side of a conversion
#[derive(Debug)]
pub struct UnitRegistry {
    role: Role,
    /// Declaration order is the order units are listed to callers
    units: Vec<Unit>,
    index: HashMap<&'static str, usize>,
}

impl UnitRegistry {
    pub fn new(role: Role) -> Self {
        let mut registry = UnitRegistry {
            role,
            units: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by its exact name
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.index.get(name).map(|&i| &self.units[i])
    }

    /// Look up the category of a unit name
    pub fn category_of(&self, name: &str) -> Result<Category, ConversionError> {
        self.get(name)
            .map(|u| u.category)
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: name.to_string(),
                role: self.role,
            })
    }

    /// Units of one category, in declaration order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// All unit names, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }

    fn register(&mut self, name: &'static str, category: Category) {
        if self.index.contains_key(name) {
            return;
        }
        self.index.insert(name, self.units.len());
        self.units.push(Unit::new(name, category));
    }

    fn register_all_units(&mut self) {
        self.register_distance_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_distance_units(&mut self) {
        let names: &[&'static str] = match self.role {
            Role::Source => &["Centimetres", "Metres", "Kilometres"],
            Role::Destination => &["Inches", "Feet", "Yards", "Miles"],
        };
        for &name in names {
            self.register(name, Category::Distance);
        }
    }

    fn register_weight_units(&mut self) {
        let names: &[&'static str] = match self.role {
            Role::Source => &["Milligrams", "Grams", "Kilograms"],
            Role::Destination => &["Ounces", "Pounds", "Tonnes"],
        };
        for &name in names {
            self.register(name, Category::Weight);
        }
    }

    fn register_temperature_units(&mut self) {
        for name in ["Celsius", "Fahrenheit", "Kelvin"] {
            self.register(name, Category::Temperature);
        }
    }
}

/// True iff both names resolve (source in the source registry, destination
/// in the destination registry) and share a category.
///
/// Unknown names and mismatched categories both yield `false`. Use
/// [`check_units`] to tell them apart.
pub fn are_compatible(source: &str, dest: &str) -> bool {
    check_units(source, dest).is_ok()
}

/// Resolve both names and return their shared category.
///
/// The source name is checked first, so a request where both names are
/// unknown reports the source.
pub fn check_units(source: &str, dest: &str) -> Result<Category, ConversionError> {
    let from_category = SOURCE_UNITS.category_of(source)?;
    let to_category = DESTINATION_UNITS.category_of(dest)?;

    if from_category != to_category {
        return Err(ConversionError::IncompatibleUnits {
            from: source.to_string(),
            to: dest.to_string(),
            from_category,
            to_category,
        });
    }

    Ok(from_category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_registry() {
        let reg = UnitRegistry::new(Role::Source);

        assert_eq!(reg.category_of("Metres"), Ok(Category::Distance));
        assert_eq!(reg.category_of("Grams"), Ok(Category::Weight));
        assert_eq!(reg.category_of("Celsius"), Ok(Category::Temperature));

        // Imperial names are destination-only
        assert!(reg.get("Feet").is_none());
        assert!(reg.get("Pounds").is_none());
    }

    #[test]
    fn test_destination_registry() {
        let reg = UnitRegistry::new(Role::Destination);

        assert_eq!(reg.category_of("Miles"), Ok(Category::Distance));
        assert_eq!(reg.category_of("Tonnes"), Ok(Category::Weight));
        assert_eq!(reg.category_of("Kelvin"), Ok(Category::Temperature));

        assert!(reg.get("Kilograms").is_none());
    }

    #[test]
    fn test_unknown_unit() {
        let err = SOURCE_UNITS.category_of("Bogus").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit { unit: "Bogus".to_string(), role: Role::Source });
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(SOURCE_UNITS.get("metres").is_none());
        assert!(DESTINATION_UNITS.get("FEET").is_none());
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(
            SOURCE_UNITS.names(),
            vec!["Centimetres", "Metres", "Kilometres", "Milligrams", "Grams", "Kilograms",
                 "Celsius", "Fahrenheit", "Kelvin"]
        );
        assert_eq!(
            DESTINATION_UNITS.names(),
            vec!["Inches", "Feet", "Yards", "Miles", "Ounces", "Pounds", "Tonnes",
                 "Celsius", "Fahrenheit", "Kelvin"]
        );
    }

    #[test]
    fn test_by_category() {
        let weights = DESTINATION_UNITS.by_category(Category::Weight);
        let names: Vec<_> = weights.iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Ounces", "Pounds", "Tonnes"]);

        for unit in SOURCE_UNITS.by_category(Category::Temperature) {
            assert_eq!(unit.category, Category::Temperature);
        }
    }

    #[test]
    fn test_are_compatible() {
        assert!(are_compatible("Celsius", "Fahrenheit"));
        assert!(are_compatible("Metres", "Feet"));
        assert!(are_compatible("Kilograms", "Pounds"));

        assert!(!are_compatible("Celsius", "Metres"));
        assert!(!are_compatible("Metres", "Bogus"));
        assert!(!are_compatible("Grams", "Miles"));
        // Kilograms is not offered as a destination
        assert!(!are_compatible("Grams", "Kilograms"));
    }

    #[test]
    fn test_check_units_distinguishes_failures() {
        assert_eq!(check_units("Metres", "Yards"), Ok(Category::Distance));

        assert!(matches!(
            check_units("Metres", "Bogus"),
            Err(ConversionError::UnknownUnit { role: Role::Destination, .. })
        ));
        assert!(matches!(
            check_units("Bogus", "Also Bogus"),
            Err(ConversionError::UnknownUnit { role: Role::Source, .. })
        ));
        assert!(matches!(
            check_units("Celsius", "Ounces"),
            Err(ConversionError::IncompatibleUnits {
                from_category: Category::Temperature,
                to_category: Category::Weight,
                ..
            })
        ));
    }
}
