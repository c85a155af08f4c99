//! Ingredient records.
//!
//! The same record shape is used in two places: inside a station's stock,
//! where `quantity` is what is on hand, and inside a dish's requirement list,
//! where `required_quantity` is what one preparation consumes.

use serde::{Deserialize, Serialize};

/// An ingredient, either as a stock entry or as a dish requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Quantity on hand (stock entries)
    #[serde(default)]
    pub quantity: u32,
    /// Quantity consumed per preparation (requirement entries)
    #[serde(default)]
    pub required_quantity: u32,
    /// Price per unit
    #[serde(default)]
    pub price: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: u32, required_quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            required_quantity,
            price,
        }
    }

    /// A stock entry with no requirement attached.
    pub fn stock(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self::new(name, quantity, 0, price)
    }

    /// A requirement entry with nothing on hand.
    pub fn requirement(name: impl Into<String>, required_quantity: u32) -> Self {
        Self::new(name, 0, required_quantity, 0.0)
    }

    /// Whether this stock entry covers the given requirement.
    pub fn covers(&self, requirement: &Ingredient) -> bool {
        self.name == requirement.name && self.quantity >= requirement.required_quantity
    }
}

impl Default for Ingredient {
    fn default() -> Self {
        Self::new("UNKNOWN", 0, 0, 0.0)
    }
}
