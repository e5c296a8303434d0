//! Item definitions

use serde::{Deserialize, Serialize};

/// What an item does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores hit points
    Potion { heal: u32 },
    /// Keepsake with resale value only
    Trinket,
    Junk,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Potion { .. } => "Potion",
            ItemKind::Trinket => "Trinket",
            ItemKind::Junk => "Junk",
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemKind::Potion { .. })
    }
}

/// An item that can be carried, bought or sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Shop price in gold
    pub value: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }
}

/// Common item templates
pub mod templates {
    use super::*;

    pub fn health_potion() -> Item {
        Item::new("Health Potion", 5, ItemKind::Potion { heal: 10 })
    }

    pub fn greater_health_potion() -> Item {
        Item::new("Greater Health Potion", 12, ItemKind::Potion { heal: 25 })
    }

    pub fn lucky_coin() -> Item {
        Item::new("Lucky Coin", 20, ItemKind::Trinket)
    }

    pub fn rat_tail() -> Item {
        Item::new("Rat Tail", 1, ItemKind::Junk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potion_is_consumable() {
        assert!(templates::health_potion().kind.is_consumable());
        assert!(!templates::lucky_coin().kind.is_consumable());
        assert_eq!(templates::rat_tail().kind.name(), "Junk");
    }
}
