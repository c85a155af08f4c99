//! # kitchen_core
//!
//! Station and inventory management for kitchen operations.
//!
//! This crate tracks a set of named kitchen stations, the dishes each one can
//! prepare and the ingredient stock each one holds, and routes orders to them.
//!
//! # Architecture
//!
//! - **Menu**: Owns every dish; stations refer to dishes by `DishId`
//! - **Stations**: Match a dish's requirements against their stock and consume it
//! - **Registry**: Ordered, uniquely named stations plus the menu they share
//! - **Config**: YAML/TOML/JSON kitchen layouts that build a registry
//!
//! # Example
//!
//! ```rust
//! use kitchen_core::{Dish, Ingredient, Station, StationRegistry};
//!
//! let mut registry = StationRegistry::new();
//! let cake = registry.add_dish(
//!     Dish::new("Cake").ingredient(Ingredient::requirement("flour", 5)),
//! );
//!
//! registry.add(Station::new("Pastry"));
//! registry.assign_dish("Pastry", cake);
//! registry.replenish("Pastry", Ingredient::stock("flour", 10, 6.99));
//!
//! assert!(registry.can_complete_order("Cake"));
//! assert!(registry.prepare_at("Pastry", "Cake"));
//! ```

pub mod config;
pub mod dish;
pub mod error;
pub mod ingredient;
pub mod menu;
pub mod registry;
pub mod station;

// Re-export main types for convenience
pub use config::{DishConfig, KitchenConfig, RequirementConfig, StationConfig, StockConfig};
pub use dish::{CuisineType, Dish, DishId};
pub use error::{KitchenError, KitchenResult};
pub use ingredient::Ingredient;
pub use menu::Menu;
pub use registry::StationRegistry;
pub use station::Station;
