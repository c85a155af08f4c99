//! Dish catalog.
//!
//! The menu is the single owner of every `Dish`. Stations only hold
//! `DishId` handles into it, so removing or merging stations never drops a
//! dish, and a dish shared by several stations is dropped exactly once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dish::{Dish, DishId};

/// Owning catalog of dishes, keyed by id and kept in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    dishes: Vec<Dish>,
    #[serde(skip)]
    index: HashMap<DishId, usize>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dish and return its handle.
    ///
    /// Adding a dish whose id is already present replaces the stored dish.
    pub fn add(&mut self, dish: Dish) -> DishId {
        let id = dish.id();
        debug!("Adding dish to menu: {} ({})", dish.name(), id);
        match self.position(id) {
            Some(pos) => self.dishes[pos] = dish,
            None => {
                self.index.insert(id, self.dishes.len());
                self.dishes.push(dish);
            }
        }
        id
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.position(id).map(|pos| &self.dishes[pos])
    }

    /// First dish with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.name() == name)
    }

    pub fn contains(&self, id: DishId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    fn position(&self, id: DishId) -> Option<usize> {
        // The index is not serialized; fall back to a scan after deserializing.
        match self.index.get(&id) {
            Some(&pos) => Some(pos),
            None => self.dishes.iter().position(|d| d.id() == id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_add_and_get() {
        let mut menu = Menu::new();
        assert!(menu.is_empty());

        let cake = menu.add(Dish::new("Cake"));
        let pasta = menu.add(Dish::new("Pasta"));

        assert_eq!(menu.len(), 2);
        let names: Vec<_> = menu.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Cake", "Pasta"]);
        assert_eq!(menu.get(cake).unwrap().name(), "Cake");
        assert_eq!(menu.get(pasta).unwrap().name(), "Pasta");
        assert!(menu.get(DishId::new()).is_none());
    }

    #[test]
    fn test_find_by_name_returns_first() {
        let mut menu = Menu::new();
        let first = menu.add(Dish::new("Soup").prep_time(5));
        menu.add(Dish::new("Soup").prep_time(10));

        let found = menu.find_by_name("Soup").unwrap();
        assert_eq!(found.id(), first);
        assert!(menu.find_by_name("Stew").is_none());
    }

    #[test]
    fn test_readding_same_dish_replaces() {
        let mut menu = Menu::new();
        let dish = Dish::new("Cake");
        let id = menu.add(dish.clone());
        menu.add(dish.price(9.5));

        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get(id).unwrap().price, 9.5);
    }

    #[test]
    fn test_lookup_after_deserialize() {
        let mut menu = Menu::new();
        let id = menu.add(Dish::new("Cake"));

        let json = serde_json::to_string(&menu).unwrap();
        let restored: Menu = serde_json::from_str(&json).unwrap();
        assert!(restored.contains(id));
    }
}
