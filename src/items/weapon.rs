//! Weapon definitions and the shared weapon registry
//!
//! Every creature holds a weapon that lives in a registry keyed by name.
//! Creatures share the registry's instance instead of owning a copy.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the weapon every registry must contain
pub const UNARMED: &str = "Unarmed";

/// A weapon definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub min_damage: u32,
    pub max_damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, min_damage: u32, max_damage: u32) -> Self {
        Self {
            name: name.into(),
            min_damage,
            max_damage: max_damage.max(min_damage),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusive damage range
    pub fn damage_range(&self) -> (u32, u32) {
        (self.min_damage, self.max_damage)
    }

    pub fn is_unarmed(&self) -> bool {
        self.name == UNARMED
    }
}

/// Weapon lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeaponError {
    #[error("unknown weapon: {0}")]
    Unknown(String),
}

/// The built-in weapon table
pub fn builtin_weapons() -> Vec<Weapon> {
    vec![
        Weapon::new(UNARMED, 1, 2),
        Weapon::new("Dagger", 2, 4),
        Weapon::new("Short Sword", 3, 6),
        Weapon::new("Mace", 4, 7),
        Weapon::new("Long Sword", 5, 9),
        Weapon::new("War Axe", 6, 11),
    ]
}

/// Name to weapon lookup table
#[derive(Debug, Clone)]
pub struct WeaponRegistry {
    weapons: HashMap<String, Arc<Weapon>>,
    /// Insertion order, for stable listings
    order: Vec<String>,
}

impl WeaponRegistry {
    /// Registry holding the built-in weapons
    pub fn builtin() -> Self {
        Self::from_weapons(builtin_weapons())
    }

    /// Build a registry from a weapon list.
    ///
    /// Later entries replace earlier ones with the same name. The unarmed
    /// entry is always present afterwards.
    pub fn from_weapons(weapons: Vec<Weapon>) -> Self {
        let mut registry = Self {
            weapons: HashMap::new(),
            order: Vec::new(),
        };

        for weapon in weapons {
            registry.insert(weapon);
        }

        if !registry.weapons.contains_key(UNARMED) {
            registry.insert(Weapon::new(UNARMED, 1, 2));
        }

        registry
    }

    fn insert(&mut self, weapon: Weapon) {
        if !self.weapons.contains_key(&weapon.name) {
            self.order.push(weapon.name.clone());
        }
        self.weapons.insert(weapon.name.clone(), Arc::new(weapon));
    }

    /// Look up a weapon by name
    pub fn get(&self, name: &str) -> Result<Arc<Weapon>, WeaponError> {
        self.weapons
            .get(name)
            .cloned()
            .ok_or_else(|| WeaponError::Unknown(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weapons.contains_key(name)
    }

    /// The unarmed weapon
    pub fn unarmed(&self) -> Arc<Weapon> {
        match self.weapons.get(UNARMED) {
            Some(weapon) => Arc::clone(weapon),
            // Unreachable through the public constructors
            None => Arc::new(Weapon::new(UNARMED, 1, 2)),
        }
    }

    /// Weapon names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl Default for WeaponRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static AVAILABLE_WEAPONS: OnceLock<WeaponRegistry> = OnceLock::new();

/// The process-wide weapon registry.
///
/// Falls back to the built-in table unless [`init_available_weapons`] ran first.
pub fn available_weapons() -> &'static WeaponRegistry {
    AVAILABLE_WEAPONS.get_or_init(WeaponRegistry::builtin)
}

/// Install the process-wide registry.
///
/// Returns false if a registry was already installed or used.
pub fn init_available_weapons(registry: WeaponRegistry) -> bool {
    AVAILABLE_WEAPONS.set(registry).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = WeaponRegistry::builtin();
        let dagger = registry.get("Dagger").unwrap();
        assert_eq!(dagger.damage_range(), (2, 4));
        assert_eq!(registry.len(), builtin_weapons().len());
    }

    #[test]
    fn test_unknown_weapon() {
        let registry = WeaponRegistry::builtin();
        assert_eq!(
            registry.get("Laser Rifle"),
            Err(WeaponError::Unknown("Laser Rifle".to_string()))
        );
        // Lookups are case-sensitive
        assert!(registry.get("dagger").is_err());
    }

    #[test]
    fn test_unarmed_always_present() {
        let registry = WeaponRegistry::from_weapons(vec![Weapon::new("Club", 2, 3)]);
        assert!(registry.contains(UNARMED));
        assert!(registry.unarmed().is_unarmed());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Club", UNARMED]);
    }

    #[test]
    fn test_later_entries_replace_earlier() {
        let registry = WeaponRegistry::from_weapons(vec![
            Weapon::new("Club", 2, 3),
            Weapon::new("Club", 4, 5),
        ]);
        assert_eq!(registry.get("Club").unwrap().damage_range(), (4, 5));
        assert_eq!(registry.names().filter(|n| *n == "Club").count(), 1);
    }

    #[test]
    fn test_shared_instances() {
        let registry = WeaponRegistry::builtin();
        let a = registry.get("Mace").unwrap();
        let b = registry.get("Mace").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let weapon = Weapon::new("Odd", 5, 2);
        assert_eq!(weapon.damage_range(), (5, 5));
    }
}
