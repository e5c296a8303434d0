//! Inventory system
//!
//! Items are kept as stacks keyed by item name. The inventory owns its
//! stored form: a JSON array of `{ "item": ..., "count": n }` entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::item::Item;

/// Inventory (de)serialization errors
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("malformed inventory: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("empty stack for item {0}")]
    EmptyStack(String),
}

/// A pile of identical items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub count: u32,
}

/// Items carried by a player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInventory {
    stacks: Vec<ItemStack>,
}

impl ItemInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, stacking onto an existing pile with the same name
    pub fn add_item(&mut self, item: Item) {
        match self.stacks.iter_mut().find(|s| s.item.name == item.name) {
            Some(stack) => stack.count = stack.count.saturating_add(1),
            None => self.stacks.push(ItemStack { item, count: 1 }),
        }
    }

    /// Take one item off the named stack
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.stacks.iter().position(|s| s.item.name == name)?;
        let stack = &mut self.stacks[index];

        if stack.count > 1 {
            stack.count -= 1;
            Some(stack.item.clone())
        } else {
            Some(self.stacks.remove(index).item)
        }
    }

    /// How many of the named item are carried
    pub fn count_of(&self, name: &str) -> u32 {
        self.stacks
            .iter()
            .find(|s| s.item.name == name)
            .map_or(0, |s| s.count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.count_of(name) > 0
    }

    /// Number of distinct stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Number of items across all stacks
    pub fn total_items(&self) -> u64 {
        self.stacks.iter().map(|s| s.count as u64).sum()
    }

    /// Combined shop value of everything carried
    pub fn total_value(&self) -> u64 {
        self.stacks
            .iter()
            .map(|s| s.item.value as u64 * s.count as u64)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Stored form of the inventory
    pub fn serialise(&self) -> Value {
        Value::Array(
            self.stacks
                .iter()
                .map(|stack| {
                    serde_json::json!({
                        "item": stack.item,
                        "count": stack.count,
                    })
                })
                .collect(),
        )
    }

    /// Rebuild an inventory from its stored form.
    ///
    /// Entries naming the same item are merged into the first stack.
    pub fn deserialise(value: &Value) -> Result<Self, InventoryError> {
        let entries: Vec<ItemStack> = serde_json::from_value(value.clone())?;

        let mut inventory = Self::new();
        for entry in entries {
            if entry.count == 0 {
                return Err(InventoryError::EmptyStack(entry.item.name));
            }
            match inventory.stacks.iter_mut().find(|s| s.item.name == entry.item.name) {
                Some(stack) => stack.count = stack.count.saturating_add(entry.count),
                None => inventory.stacks.push(entry),
            }
        }

        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::templates;

    #[test]
    fn test_items_stack_by_name() {
        let mut inventory = ItemInventory::new();
        inventory.add_item(templates::health_potion());
        inventory.add_item(templates::health_potion());
        inventory.add_item(templates::lucky_coin());

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.total_items(), 3);
        assert_eq!(inventory.count_of("Health Potion"), 2);
        assert_eq!(inventory.total_value(), 5 * 2 + 20);
    }

    #[test]
    fn test_remove_pops_one() {
        let mut inventory = ItemInventory::new();
        inventory.add_item(templates::health_potion());
        inventory.add_item(templates::health_potion());

        assert!(inventory.remove_item("Health Potion").is_some());
        assert_eq!(inventory.count_of("Health Potion"), 1);
        assert!(inventory.remove_item("Health Potion").is_some());
        assert!(!inventory.contains("Health Potion"));
        assert!(inventory.is_empty());
        assert!(inventory.remove_item("Health Potion").is_none());
    }

    #[test]
    fn test_serialised_shape() {
        let mut inventory = ItemInventory::new();
        inventory.add_item(templates::rat_tail());

        let value = inventory.serialise();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["count"], 1);
        assert_eq!(entries[0]["item"]["name"], "Rat Tail");

        let restored = ItemInventory::deserialise(&value).unwrap();
        assert_eq!(restored, inventory);
    }

    #[test]
    fn test_deserialise_rejects_bad_documents() {
        let not_array = serde_json::json!({ "item": "sword" });
        assert!(matches!(
            ItemInventory::deserialise(&not_array),
            Err(InventoryError::Malformed(_))
        ));

        let empty_stack = serde_json::json!([
            { "item": { "name": "Rat Tail", "value": 1, "kind": "Junk" }, "count": 0 }
        ]);
        assert!(matches!(
            ItemInventory::deserialise(&empty_stack),
            Err(InventoryError::EmptyStack(name)) if name == "Rat Tail"
        ));
    }

    #[test]
    fn test_deserialise_merges_repeated_names() {
        let value = serde_json::json!([
            { "item": templates::health_potion(), "count": 2 },
            { "item": templates::rat_tail(), "count": 1 },
            { "item": templates::health_potion(), "count": 3 },
        ]);

        let mut inventory = ItemInventory::deserialise(&value).unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.count_of("Health Potion"), 5);
        assert_eq!(inventory.total_items(), 6);

        for _ in 0..5 {
            assert!(inventory.remove_item("Health Potion").is_some());
        }
        assert!(!inventory.contains("Health Potion"));
    }

    #[test]
    fn test_total_items_past_u32() {
        let value = serde_json::json!([
            { "item": templates::rat_tail(), "count": u32::MAX },
            { "item": templates::lucky_coin(), "count": 1 },
        ]);

        let inventory = ItemInventory::deserialise(&value).unwrap();
        assert_eq!(inventory.total_items(), u32::MAX as u64 + 1);
    }

    #[test]
    fn test_empty_inventory_roundtrip() {
        let value = ItemInventory::new().serialise();
        assert_eq!(value, serde_json::json!([]));
        assert!(ItemInventory::deserialise(&value).unwrap().is_empty());
    }
}
