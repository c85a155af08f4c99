//! Error types for the kitchen core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kitchen operations.
pub type KitchenResult<T> = Result<T, KitchenError>;

/// Errors that can occur during kitchen operations.
///
/// The boolean operations on `Station` and `StationRegistry` collapse these
/// into `false`; the `try_*` variants return them as-is.
#[derive(Error, Debug)]
pub enum KitchenError {
    #[error("Station not found: {0}")]
    StationNotFound(String),

    #[error("Station already exists: {0}")]
    DuplicateStation(String),

    #[error("Dish already assigned to station {station}: {dish}")]
    DuplicateDish { station: String, dish: String },

    #[error("Dish not assigned to station {station}: {dish}")]
    DishNotAssigned { station: String, dish: String },

    #[error("Unknown dish: {0}")]
    UnknownDish(String),

    #[error("Missing ingredient for {dish}: {ingredient}")]
    MissingIngredient { dish: String, ingredient: String },

    #[error("Insufficient stock of {ingredient}: required {required}, on hand {on_hand}")]
    InsufficientStock {
        ingredient: String,
        required: u32,
        on_hand: u32,
    },

    #[error("Cannot merge station into itself: {0}")]
    SelfMerge(String),

    #[error("Unsupported layout format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl KitchenError {
    /// Whether the error means an order could not be fulfilled from stock,
    /// as opposed to a lookup failure.
    pub fn is_stock_shortage(&self) -> bool {
        matches!(
            self,
            KitchenError::MissingIngredient { .. } | KitchenError::InsufficientStock { .. }
        )
    }
}
