//! Kitchen layout configuration.
//!
//! A layout file describes the dishes on the menu and the stations that
//! prepare them, and is turned into a ready-to-use `StationRegistry`.
//!
//! ```yaml
//! dishes:
//!   - name: Cake
//!     cuisine: american
//!     prep_time: 30
//!     price: 20.99
//!     ingredients:
//!       - { name: flour, required: 5 }
//! stations:
//!   - name: Station 1
//!     dishes: [Cake]
//!     stock:
//!       - { name: flour, quantity: 10, price: 6.99 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dish::{CuisineType, Dish};
use crate::error::{KitchenError, KitchenResult};
use crate::ingredient::Ingredient;
use crate::registry::StationRegistry;
use crate::station::Station;

/// Root of a layout file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenConfig {
    #[serde(default)]
    pub dishes: Vec<DishConfig>,
    #[serde(default)]
    pub stations: Vec<StationConfig>,
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishConfig {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<RequirementConfig>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cuisine: CuisineType,
}

/// One ingredient requirement of a dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementConfig {
    pub name: String,
    pub required: u32,
}

/// A station, the dishes it prepares (by name) and its opening stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub name: String,
    #[serde(default)]
    pub dishes: Vec<String>,
    #[serde(default)]
    pub stock: Vec<StockConfig>,
}

/// A stock entry of a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockConfig {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl KitchenConfig {
    /// Load a layout file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> KitchenResult<Self> {
        let path = path.as_ref();
        debug!("Reading kitchen layout from {:?}", path);

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let content = match extension.as_str() {
            "yaml" | "yml" | "toml" | "json" => fs::read_to_string(path)?,
            _ => return Err(KitchenError::UnsupportedFormat(path.to_path_buf())),
        };

        match extension.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn from_yaml_str(content: &str) -> KitchenResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> KitchenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> KitchenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build a registry from this layout.
    ///
    /// Station dish lists refer to dishes by name; when several dishes share
    /// a name the first one listed is used.
    pub fn build(&self) -> KitchenResult<StationRegistry> {
        let mut registry = StationRegistry::new();

        for dish in &self.dishes {
            registry.add_dish(dish.to_dish());
        }

        for station in &self.stations {
            registry.try_add(Station::new(&station.name))?;

            for dish_name in &station.dishes {
                let id = registry
                    .menu()
                    .find_by_name(dish_name)
                    .map(|d| d.id())
                    .ok_or_else(|| KitchenError::UnknownDish(dish_name.clone()))?;
                registry.try_assign_dish(&station.name, id)?;
            }

            for stock in &station.stock {
                registry.try_replenish(
                    &station.name,
                    Ingredient::stock(&stock.name, stock.quantity, stock.price),
                )?;
            }
        }

        debug!(
            "Built kitchen with {} dishes and {} stations",
            registry.menu().len(),
            registry.len()
        );
        Ok(registry)
    }

    /// The bundled bistro layout: a cake station stocked for one order and
    /// an unstocked pasta station.
    pub fn demo() -> Self {
        let requirements = || {
            vec![
                RequirementConfig::new("flour", 5),
                RequirementConfig::new("sugar", 10),
                RequirementConfig::new("eggs", 2),
                RequirementConfig::new("butter", 3),
            ]
        };

        Self {
            dishes: vec![
                DishConfig {
                    name: "Cake".to_string(),
                    ingredients: requirements(),
                    prep_time: 30,
                    price: 20.99,
                    cuisine: CuisineType::American,
                },
                DishConfig {
                    name: "Pasta".to_string(),
                    ingredients: requirements(),
                    prep_time: 20,
                    price: 15.99,
                    cuisine: CuisineType::Italian,
                },
            ],
            stations: vec![
                StationConfig {
                    name: "Station 1".to_string(),
                    dishes: vec!["Cake".to_string()],
                    stock: vec![
                        StockConfig::new("flour", 10, 6.99),
                        StockConfig::new("sugar", 20, 3.99),
                        StockConfig::new("eggs", 12, 4.99),
                        StockConfig::new("butter", 6, 4.99),
                    ],
                },
                StationConfig {
                    name: "Station 2".to_string(),
                    dishes: vec!["Pasta".to_string()],
                    stock: Vec::new(),
                },
            ],
        }
    }
}

impl DishConfig {
    fn to_dish(&self) -> Dish {
        Dish::new(&self.name)
            .ingredients(
                self.ingredients
                    .iter()
                    .map(|r| Ingredient::requirement(&r.name, r.required))
                    .collect(),
            )
            .prep_time(self.prep_time)
            .price(self.price)
            .cuisine(self.cuisine)
    }
}

impl RequirementConfig {
    pub fn new(name: impl Into<String>, required: u32) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }
}

impl StockConfig {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}
