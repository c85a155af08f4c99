//! Station registry for managing kitchen stations.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::dish::{Dish, DishId};
use crate::error::{KitchenError, KitchenResult};
use crate::ingredient::Ingredient;
use crate::menu::Menu;
use crate::station::Station;

/// An ordered registry of uniquely named stations.
///
/// The registry owns its stations and the menu of dishes they reference.
/// Station order is meaningful: new stations go to the back and
/// `move_to_front` promotes one to the front.
///
/// Every operation comes in two forms. The boolean form answers "did it
/// happen"; the `try_*` form says why it did not.
///
/// Deserializing rebuilds the registry through `try_add`, so duplicate
/// station names are rejected and same-named stock entries are coalesced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StationRegistry {
    stations: Vec<Station>,
    menu: Menu,
}

impl StationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Add a dish to the menu and return its handle.
    pub fn add_dish(&mut self, dish: Dish) -> DishId {
        self.menu.add(dish)
    }

    /// Add a station at the back. Fails if the name is taken.
    pub fn add(&mut self, station: Station) -> bool {
        self.try_add(station).is_ok()
    }

    pub fn try_add(&mut self, station: Station) -> KitchenResult<()> {
        if self.contains(station.name()) {
            return Err(KitchenError::DuplicateStation(station.name().to_string()));
        }
        debug!("Adding station: {}", station.name());
        self.stations.push(station);
        Ok(())
    }

    /// Remove a station by name.
    pub fn remove(&mut self, name: &str) -> bool {
        self.try_remove(name).is_ok()
    }

    /// Remove a station by name, handing it back to the caller.
    ///
    /// The menu is untouched: dishes outlive the stations they were
    /// assigned to.
    pub fn try_remove(&mut self, name: &str) -> KitchenResult<Station> {
        let pos = self.position_required(name)?;
        debug!("Removing station: {}", name);
        Ok(self.stations.remove(pos))
    }

    /// Get a station by name.
    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name() == name)
    }

    /// Get a station by name, returning an error if not found.
    pub fn find_required(&self, name: &str) -> KitchenResult<&Station> {
        self.find(name)
            .ok_or_else(|| KitchenError::StationNotFound(name.to_string()))
    }

    /// Position of a station in registry order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.name() == name)
    }

    /// Station at the given position.
    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Station names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Rename a station, keeping names unique.
    pub fn rename(&mut self, name: &str, new_name: &str) -> bool {
        self.try_rename(name, new_name).is_ok()
    }

    pub fn try_rename(&mut self, name: &str, new_name: &str) -> KitchenResult<()> {
        let pos = self.position_required(name)?;
        if name != new_name && self.contains(new_name) {
            return Err(KitchenError::DuplicateStation(new_name.to_string()));
        }
        debug!("Renaming station {} to {}", name, new_name);
        self.stations[pos].set_name(new_name);
        Ok(())
    }

    /// Move a station to the front, keeping the others in order.
    pub fn move_to_front(&mut self, name: &str) -> bool {
        self.try_move_to_front(name).is_ok()
    }

    pub fn try_move_to_front(&mut self, name: &str) -> KitchenResult<()> {
        let pos = self.position_required(name)?;
        debug!("Moving station {} to front (was {})", name, pos);
        let station = self.stations.remove(pos);
        self.stations.insert(0, station);
        Ok(())
    }

    /// Merge station `from` into station `into`.
    ///
    /// Every dish and stock entry of `from` is appended to `into` without
    /// coalescing, then `from` is removed.
    pub fn merge(&mut self, into: &str, from: &str) -> bool {
        self.try_merge(into, from).is_ok()
    }

    pub fn try_merge(&mut self, into: &str, from: &str) -> KitchenResult<()> {
        self.position_required(into)?;
        self.position_required(from)?;
        if into == from {
            return Err(KitchenError::SelfMerge(into.to_string()));
        }

        let source = self.try_remove(from)?;
        let target = self.position_required(into)?;
        self.stations[target].absorb(source);
        debug!("Merged station {} into {}", from, into);
        Ok(())
    }

    /// Assign a dish to a station.
    ///
    /// Returns the station's own answer, so assigning a dish that is already
    /// there yields `false` even though the station exists.
    pub fn assign_dish(&mut self, station: &str, dish: DishId) -> bool {
        self.try_assign_dish(station, dish).is_ok()
    }

    pub fn try_assign_dish(&mut self, station: &str, dish: DishId) -> KitchenResult<()> {
        let pos = self.position_required(station)?;
        match self.stations[pos].try_assign_dish(dish) {
            Err(KitchenError::DuplicateDish { station, .. }) => {
                let dish = self
                    .menu
                    .get(dish)
                    .map(|d| d.name().to_string())
                    .unwrap_or_else(|| dish.to_string());
                Err(KitchenError::DuplicateDish { station, dish })
            }
            other => other,
        }
    }

    /// Replenish an ingredient at a station. Fails only if the station is
    /// missing.
    pub fn replenish(&mut self, station: &str, ingredient: Ingredient) -> bool {
        self.try_replenish(station, ingredient).is_ok()
    }

    pub fn try_replenish(&mut self, station: &str, ingredient: Ingredient) -> KitchenResult<()> {
        let pos = self.position_required(station)?;
        self.stations[pos].replenish(ingredient);
        Ok(())
    }

    /// Whether any station can complete an order for the dish.
    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        self.stations
            .iter()
            .any(|s| s.can_complete(&self.menu, dish_name))
    }

    /// Names of the stations that can currently complete the dish, in
    /// registry order.
    pub fn stations_for(&self, dish_name: &str) -> Vec<&str> {
        self.stations
            .iter()
            .filter(|s| s.can_complete(&self.menu, dish_name))
            .map(|s| s.name())
            .collect()
    }

    /// Prepare a dish at a station.
    ///
    /// Returns whether the dish was actually prepared, not merely whether
    /// the station exists.
    pub fn prepare_at(&mut self, station: &str, dish_name: &str) -> bool {
        self.try_prepare_at(station, dish_name).is_ok()
    }

    pub fn try_prepare_at(&mut self, station: &str, dish_name: &str) -> KitchenResult<()> {
        let pos = self.position_required(station)?;
        self.stations[pos].try_prepare(&self.menu, dish_name)
    }

    fn position_required(&self, name: &str) -> KitchenResult<usize> {
        self.position(name)
            .ok_or_else(|| KitchenError::StationNotFound(name.to_string()))
    }
}

/// Serialized form of a registry, validated on the way in.
#[derive(Deserialize)]
struct RegistryRecord {
    #[serde(default)]
    stations: Vec<StationRecord>,
    #[serde(default)]
    menu: Menu,
}

#[derive(Deserialize)]
struct StationRecord {
    name: String,
    #[serde(default)]
    dishes: Vec<DishId>,
    #[serde(default)]
    stock: Vec<Ingredient>,
}

impl<'de> Deserialize<'de> for StationRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = RegistryRecord::deserialize(deserializer)?;
        StationRegistry::from_record(record).map_err(serde::de::Error::custom)
    }
}

impl StationRegistry {
    fn from_record(record: RegistryRecord) -> KitchenResult<Self> {
        let mut registry = StationRegistry {
            stations: Vec::new(),
            menu: record.menu,
        };

        for station in record.stations {
            registry.try_add(Station::new(&station.name))?;
            for dish in station.dishes {
                registry.try_assign_dish(&station.name, dish)?;
            }
            for ingredient in station.stock {
                registry.try_replenish(&station.name, ingredient)?;
            }
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(names: &[&str]) -> StationRegistry {
        let mut registry = StationRegistry::new();
        for name in names {
            assert!(registry.add(Station::new(*name)));
        }
        registry
    }

    #[test]
    fn test_registry_add() {
        let mut registry = StationRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.add(Station::new("Grill")));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Grill"));
    }

    #[test]
    fn test_registry_add_duplicate() {
        let mut registry = registry_with(&["Grill"]);

        assert!(!registry.add(Station::new("Grill")));
        assert_eq!(registry.len(), 1);
        assert!(matches!(
            registry.try_add(Station::new("Grill")),
            Err(KitchenError::DuplicateStation(_))
        ));
    }

    #[test]
    fn test_registry_names_are_case_sensitive() {
        let mut registry = registry_with(&["Grill"]);
        assert!(registry.add(Station::new("grill")));
        assert!(registry.find("GRILL").is_none());
    }

    #[test]
    fn test_registry_find() {
        let registry = registry_with(&["Grill", "Pastry"]);

        let station = registry.find("Pastry");
        assert!(station.is_some());
        assert_eq!(station.unwrap().name(), "Pastry");

        assert!(registry.find("Fryer").is_none());
        assert!(matches!(
            registry.find_required("Fryer"),
            Err(KitchenError::StationNotFound(_))
        ));
    }

    #[test]
    fn test_registry_remove() {
        let mut registry = registry_with(&["Grill", "Pastry"]);

        assert!(registry.remove("Grill"));
        assert!(!registry.contains("Grill"));
        assert!(!registry.remove("Grill"));
        assert_eq!(registry.names(), vec!["Pastry"]);
    }

    #[test]
    fn test_remove_keeps_menu() {
        let mut registry = registry_with(&["Grill"]);
        let steak = registry.add_dish(Dish::new("Steak"));
        registry.assign_dish("Grill", steak);

        assert!(registry.remove("Grill"));
        assert!(registry.menu().contains(steak));
    }

    #[test]
    fn test_move_to_front() {
        let mut registry = registry_with(&["A", "B", "C", "D"]);

        assert!(registry.move_to_front("C"));
        assert_eq!(registry.get(0).unwrap().name(), "C");
        assert_eq!(registry.names(), vec!["C", "A", "B", "D"]);

        assert!(registry.move_to_front("C"));
        assert_eq!(registry.names(), vec!["C", "A", "B", "D"]);

        assert!(!registry.move_to_front("Z"));
    }

    #[test]
    fn test_rename() {
        let mut registry = registry_with(&["A", "B"]);

        assert!(!registry.rename("A", "B"));
        assert!(!registry.rename("Z", "Y"));
        assert!(registry.rename("A", "A"));
        assert!(registry.rename("A", "Front"));
        assert_eq!(registry.names(), vec!["Front", "B"]);
    }

    #[test]
    fn test_merge() {
        let mut registry = registry_with(&["A", "B", "C"]);
        let soup = registry.add_dish(Dish::new("Soup"));
        let stew = registry.add_dish(Dish::new("Stew"));
        registry.assign_dish("A", soup);
        registry.assign_dish("C", stew);
        registry.replenish("A", Ingredient::stock("salt", 1, 0.5));
        registry.replenish("C", Ingredient::stock("salt", 2, 0.5));

        assert!(registry.merge("C", "A"));

        assert!(registry.find("A").is_none());
        let merged = registry.find("C").unwrap();
        assert_eq!(merged.dishes(), &[stew, soup]);
        assert_eq!(merged.stock().len(), 2);
        assert_eq!(registry.names(), vec!["B", "C"]);
    }

    #[test]
    fn test_merge_missing_or_self() {
        let mut registry = registry_with(&["A"]);

        assert!(!registry.merge("A", "Z"));
        assert!(!registry.merge("Z", "A"));
        assert!(matches!(
            registry.try_merge("A", "A"),
            Err(KitchenError::SelfMerge(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_assign_dish_threads_station_result() {
        let mut registry = registry_with(&["Grill"]);
        let steak = registry.add_dish(Dish::new("Steak"));

        assert!(registry.assign_dish("Grill", steak));
        assert!(!registry.assign_dish("Grill", steak));
        assert!(!registry.assign_dish("Fryer", steak));

        match registry.try_assign_dish("Grill", steak) {
            Err(KitchenError::DuplicateDish { station, dish }) => {
                assert_eq!(station, "Grill");
                assert_eq!(dish, "Steak");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_replenish_missing_station() {
        let mut registry = registry_with(&["Grill"]);
        assert!(registry.replenish("Grill", Ingredient::stock("salt", 1, 0.5)));
        assert!(!registry.replenish("Fryer", Ingredient::stock("salt", 1, 0.5)));
    }

    #[test]
    fn test_prepare_at_threads_station_result() {
        let mut registry = registry_with(&["Grill"]);
        let steak = registry.add_dish(Dish::new("Steak").ingredient(Ingredient::requirement("beef", 1)));
        registry.assign_dish("Grill", steak);

        // Station exists but has no beef.
        assert!(!registry.prepare_at("Grill", "Steak"));
        assert!(registry.try_prepare_at("Grill", "Steak").unwrap_err().is_stock_shortage());
        assert!(matches!(
            registry.try_prepare_at("Fryer", "Steak"),
            Err(KitchenError::StationNotFound(_))
        ));

        registry.replenish("Grill", Ingredient::stock("beef", 1, 12.0));
        assert!(registry.prepare_at("Grill", "Steak"));
        assert!(registry.find("Grill").unwrap().stock().is_empty());
    }

    #[test]
    fn test_can_complete_order_any_station() {
        let mut registry = registry_with(&["A", "B"]);
        let toast = registry.add_dish(Dish::new("Toast").ingredient(Ingredient::requirement("bread", 1)));
        registry.assign_dish("A", toast);
        registry.assign_dish("B", toast);

        assert!(!registry.can_complete_order("Toast"));

        registry.replenish("B", Ingredient::stock("bread", 2, 0.3));
        assert!(registry.can_complete_order("Toast"));
        assert_eq!(registry.stations_for("Toast"), vec!["B"]);
        assert!(!registry.can_complete_order("Bagel"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_station_names() {
        let json = r#"{
            "stations": [
                { "name": "A", "stock": [] },
                { "name": "A", "stock": [] }
            ]
        }"#;

        let err = serde_json::from_str::<StationRegistry>(json).unwrap_err();
        assert!(err.to_string().contains("Station already exists: A"));
    }

    #[test]
    fn test_deserialize_coalesces_stock() {
        let json = r#"{
            "stations": [
                {
                    "name": "A",
                    "stock": [
                        { "name": "salt", "quantity": 1, "price": 0.5 },
                        { "name": "salt", "quantity": 2, "price": 0.9 }
                    ]
                }
            ]
        }"#;

        let mut registry: StationRegistry = serde_json::from_str(json).unwrap();
        let station = registry.find("A").unwrap();
        assert_eq!(station.stock().len(), 1);
        assert_eq!(station.stock_of("salt").unwrap().quantity, 3);
        assert_eq!(station.stock_of("salt").unwrap().price, 0.5);

        assert!(registry.remove("A"));
        assert!(registry.find("A").is_none());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut registry = registry_with(&["Grill", "Fryer"]);
        let steak = registry.add_dish(Dish::new("Steak").ingredient(Ingredient::requirement("beef", 1)));
        registry.assign_dish("Grill", steak);
        registry.replenish("Grill", Ingredient::stock("beef", 2, 12.0));
        registry.move_to_front("Fryer");

        let json = serde_json::to_string(&registry).unwrap();
        let mut restored: StationRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.names(), vec!["Fryer", "Grill"]);
        assert_eq!(restored.find("Grill").unwrap().dishes(), &[steak]);
        assert!(restored.prepare_at("Grill", "Steak"));
        assert_eq!(restored.find("Grill").unwrap().stock_of("beef").unwrap().quantity, 1);
    }
}
