//! Measurement categories
//!
//! A category partitions units into disjoint compatibility classes.
//! Conversion is only defined between two units of the same category.

use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Distance,
    Weight,
    Temperature,
}

impl Category {
    /// All categories, in the order they are listed to callers
    pub const ALL: [Category; 3] = [Category::Distance, Category::Weight, Category::Temperature];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Distance => "Distance",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
