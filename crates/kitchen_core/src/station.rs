//! Kitchen stations.
//!
//! A station is a named unit that can prepare the dishes assigned to it,
//! using its own ingredient stock.
//!
//! # Matching
//!
//! A station can complete an order for a dish name when:
//!
//! 1. One of its assigned dishes has that name. When several assigned dishes
//!    share a name, the first one in assignment order is used.
//! 2. Every required ingredient of that dish has a stock entry with the same
//!    name and at least the required quantity on hand.
//!
//! Preparing a dish consumes the required quantity of every ingredient.
//! A stock entry that reaches zero is removed from the stock altogether.

use serde::Serialize;
use tracing::{debug, trace};

use crate::dish::{Dish, DishId};
use crate::error::{KitchenError, KitchenResult};
use crate::ingredient::Ingredient;
use crate::menu::Menu;

/// A named kitchen station with assigned dishes and an ingredient stock.
///
/// Stations are built through `new`, `assign_dish` and `replenish` only;
/// the registry is the way to load them from a serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    name: String,
    dishes: Vec<DishId>,
    stock: Vec<Ingredient>,
}

impl Station {
    /// Create an empty station.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dishes: Vec::new(),
            stock: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Assigned dishes, in assignment order.
    pub fn dishes(&self) -> &[DishId] {
        &self.dishes
    }

    /// Ingredient stock, in insertion order.
    pub fn stock(&self) -> &[Ingredient] {
        &self.stock
    }

    /// First stock entry with the given ingredient name.
    pub fn stock_of(&self, ingredient: &str) -> Option<&Ingredient> {
        self.stock.iter().find(|i| i.name == ingredient)
    }

    pub fn has_dish(&self, dish: DishId) -> bool {
        self.dishes.contains(&dish)
    }

    /// Assign a dish to this station.
    ///
    /// Returns `false` without changing anything if this exact dish is
    /// already assigned. A different dish with the same name is accepted.
    pub fn assign_dish(&mut self, dish: DishId) -> bool {
        self.try_assign_dish(dish).is_ok()
    }

    pub fn try_assign_dish(&mut self, dish: DishId) -> KitchenResult<()> {
        if self.has_dish(dish) {
            return Err(KitchenError::DuplicateDish {
                station: self.name.clone(),
                dish: dish.to_string(),
            });
        }
        debug!("Assigning dish {} to station {}", dish, self.name);
        self.dishes.push(dish);
        Ok(())
    }

    /// Add stock.
    ///
    /// If an entry with the same name exists its quantity is increased and its
    /// unit price kept; otherwise the ingredient becomes a new entry.
    pub fn replenish(&mut self, ingredient: Ingredient) {
        match self.stock.iter_mut().find(|i| i.name == ingredient.name) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(ingredient.quantity);
                debug!(
                    "Replenished {} at {}: now {}",
                    entry.name, self.name, entry.quantity
                );
            }
            None => {
                debug!(
                    "New stock entry {} at {}: {}",
                    ingredient.name, self.name, ingredient.quantity
                );
                self.stock.push(ingredient);
            }
        }
    }

    /// First assigned dish with the given name.
    ///
    /// Ids that the menu does not know are skipped.
    pub fn find_dish<'m>(&self, menu: &'m Menu, dish_name: &str) -> Option<&'m Dish> {
        self.dishes
            .iter()
            .filter_map(|id| menu.get(*id))
            .find(|dish| dish.name() == dish_name)
    }

    /// Check whether an order for `dish_name` can be completed, and why not.
    pub fn check_order<'m>(&self, menu: &'m Menu, dish_name: &str) -> KitchenResult<&'m Dish> {
        let dish = self
            .find_dish(menu, dish_name)
            .ok_or_else(|| KitchenError::DishNotAssigned {
                station: self.name.clone(),
                dish: dish_name.to_string(),
            })?;

        for required in dish.required_ingredients() {
            if self.stock.iter().any(|entry| entry.covers(required)) {
                continue;
            }
            trace!("{} cannot cover {} for {}", self.name, required.name, dish_name);
            return Err(match self.stock_of(&required.name) {
                Some(entry) => KitchenError::InsufficientStock {
                    ingredient: required.name.clone(),
                    required: required.required_quantity,
                    on_hand: entry.quantity,
                },
                None => KitchenError::MissingIngredient {
                    dish: dish_name.to_string(),
                    ingredient: required.name.clone(),
                },
            });
        }

        Ok(dish)
    }

    /// Whether the station has the dish assigned and enough of every
    /// required ingredient.
    pub fn can_complete(&self, menu: &Menu, dish_name: &str) -> bool {
        self.check_order(menu, dish_name).is_ok()
    }

    /// Prepare one unit of a dish, consuming stock.
    ///
    /// Nothing is consumed unless every requirement is satisfiable.
    pub fn prepare(&mut self, menu: &Menu, dish_name: &str) -> bool {
        self.try_prepare(menu, dish_name).is_ok()
    }

    pub fn try_prepare(&mut self, menu: &Menu, dish_name: &str) -> KitchenResult<()> {
        let dish = self.check_order(menu, dish_name)?;
        for required in dish.required_ingredients() {
            self.consume(required);
        }
        debug!("Prepared {} at {}", dish_name, self.name);
        Ok(())
    }

    /// Move every dish and stock entry of `other` into this station.
    ///
    /// Entries are appended as-is: duplicate dishes and same-named stock
    /// entries are not coalesced.
    pub fn absorb(&mut self, other: Station) {
        debug!(
            "Station {} absorbing {} dishes and {} stock entries from {}",
            self.name,
            other.dishes.len(),
            other.stock.len(),
            other.name
        );
        self.dishes.extend(other.dishes);
        self.stock.extend(other.stock);
    }

    fn consume(&mut self, required: &Ingredient) {
        let pos = self
            .stock
            .iter()
            .position(|entry| entry.covers(required))
            .or_else(|| self.stock.iter().position(|entry| entry.name == required.name));

        let Some(pos) = pos else {
            return;
        };

        let entry = &mut self.stock[pos];
        entry.quantity = entry.quantity.saturating_sub(required.required_quantity);
        if entry.quantity == 0 {
            debug!("{} depleted at {}", entry.name, self.name);
            self.stock.remove(pos);
        }
    }
}

impl Default for Station {
    fn default() -> Self {
        Self::new("UNKNOWN")
    }
}
