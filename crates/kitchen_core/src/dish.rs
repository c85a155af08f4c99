//! Dish definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ingredient::Ingredient;

/// Cuisine category of a dish.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    #[default]
    Other,
}

impl CuisineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::Mexican => "mexican",
            Self::Chinese => "chinese",
            Self::Indian => "indian",
            Self::American => "american",
            Self::French => "french",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Identity of a dish.
///
/// Two dishes with the same name are still distinct dishes; stations compare
/// dishes by id, never by name, when checking for duplicate assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(Uuid);

impl DishId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DishId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dish and the ingredients one preparation of it requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub price: f64,
    pub cuisine: CuisineType,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DishId::new(),
            name: name.into(),
            ingredients: Vec::new(),
            prep_time: 0,
            price: 0.0,
            cuisine: CuisineType::default(),
        }
    }

    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn cuisine(mut self, cuisine: CuisineType) -> Self {
        self.cuisine = cuisine;
        self
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients consumed by one preparation, in recipe order.
    pub fn required_ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_builder() {
        let dish = Dish::new("Cake")
            .ingredient(Ingredient::requirement("flour", 5))
            .ingredient(Ingredient::requirement("sugar", 10))
            .prep_time(30)
            .price(20.99)
            .cuisine(CuisineType::American);

        assert_eq!(dish.name(), "Cake");
        assert_eq!(dish.required_ingredients().len(), 2);
        assert_eq!(dish.prep_time, 30);
        assert_eq!(dish.cuisine, CuisineType::American);
    }

    #[test]
    fn test_same_name_distinct_identity() {
        let a = Dish::new("Soup");
        let b = Dish::new("Soup");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_cuisine_names() {
        assert_eq!(CuisineType::French.to_string(), "french");
        assert_eq!(format!("{:<8}|", CuisineType::Indian), "indian  |");
        assert_eq!(CuisineType::default(), CuisineType::Other);

        let parsed: CuisineType = serde_json::from_str("\"italian\"").unwrap();
        assert_eq!(parsed, CuisineType::Italian);
    }
}
