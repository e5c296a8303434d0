//! The player character
//!
//! A [`Creature`] plus ability scores, level, gold and experience. Players
//! are persisted on demand through [`Player::save`] and [`Player::load`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;

use super::creature::Creature;
use crate::combat;
use crate::items::{
    Item, ItemInventory, ItemKind, Weapon, WeaponError, WeaponRegistry, available_weapons,
};
use crate::progression::{self, BASE_HP};
use crate::save::{self, SaveError};

/// Ability score chosen when levelling up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    /// Raises no score. A level-up with it still costs experience and
    /// still adds a level.
    Other,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Other => "Other",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an ability name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ability: {0}")]
pub struct UnknownAbility(pub String);

impl FromStr for Ability {
    type Err = UnknownAbility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(Ability::Strength),
            "dex" | "dexterity" => Ok(Ability::Dexterity),
            "con" | "constitution" => Ok(Ability::Constitution),
            _ => Err(UnknownAbility(s.to_string())),
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) creature: Creature,
    pub(crate) strength: u32,
    pub(crate) dexterity: u32,
    pub(crate) constitution: u32,
    pub(crate) level: u32,
    pub(crate) gold: u32,
    pub(crate) experience: u32,
    pub(crate) inventory: ItemInventory,
}

impl Player {
    /// A fresh level 0 player: no scores, no gold, bare hands
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_weapon(name, available_weapons().unarmed())
    }

    /// A fresh player holding the given weapon
    pub fn with_weapon(name: impl Into<String>, weapon: Arc<Weapon>) -> Self {
        let mut player = Self {
            creature: Creature::new(name, BASE_HP, weapon),
            strength: 0,
            dexterity: 0,
            constitution: 0,
            level: 0,
            gold: 0,
            experience: 0,
            inventory: ItemInventory::new(),
        };
        player.restore_hp();
        player
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Load a player from a save file, resolving weapons through the
    /// process-wide registry. The name is not part of the save.
    pub fn load(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, SaveError> {
        save::load_player(name, path)
    }

    /// Replace this player's persisted fields with the ones in a save file.
    ///
    /// The name is kept. On error the player is left untouched.
    pub fn load_into(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let loaded = save::load_player(self.creature.name(), path)?;
        *self = loaded;
        Ok(())
    }

    /// Write the persisted fields to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        save::save_player(self, path)
    }

    // ------------------------------------------------------------------
    // Economy & progression
    // ------------------------------------------------------------------

    /// Spend gold. Returns false, and spends nothing, if there isn't enough.
    pub fn pay(&mut self, cost: u32) -> bool {
        if self.gold >= cost {
            self.gold -= cost;
            true
        } else {
            false
        }
    }

    /// Buy an item at its listed value
    pub fn purchase(&mut self, item: Item) -> bool {
        if !self.pay(item.value) {
            log::debug!("{} cannot afford {} ({}g)", self.name(), item.name, item.value);
            return false;
        }
        log::debug!("{} bought {} for {}g", self.name(), item.name, item.value);
        self.inventory.add_item(item);
        true
    }

    /// Experience needed for the next level
    pub fn level_up_cost(&self) -> u32 {
        progression::level_up_cost(self.level)
    }

    /// Spend experience on a level, raising one ability score
    pub fn level_up(&mut self, ability: Ability) -> bool {
        let cost = self.level_up_cost();
        if self.experience < cost {
            return false;
        }

        match ability {
            Ability::Strength => self.strength = self.strength.saturating_add(1),
            Ability::Dexterity => self.dexterity = self.dexterity.saturating_add(1),
            Ability::Constitution => self.constitution = self.constitution.saturating_add(1),
            Ability::Other => {}
        }

        self.experience -= cost;
        self.level = self.level.saturating_add(1);
        log::debug!("{} reached level {} ({})", self.name(), self.level, ability);
        true
    }

    /// Add gold and experience
    pub fn reward(&mut self, gold: u32, experience: u32) {
        self.gold = self.gold.saturating_add(gold);
        self.experience = self.experience.saturating_add(experience);
    }

    // ------------------------------------------------------------------
    // Health, equipment and items
    // ------------------------------------------------------------------

    pub fn max_hp(&self) -> u32 {
        progression::max_hp(self.creature.base_hp(), self.constitution)
    }

    pub fn current_hp(&self) -> u32 {
        self.creature.current_hp()
    }

    /// Refill hit points to the maximum
    pub fn restore_hp(&mut self) {
        let max = self.max_hp();
        self.creature.set_current_hp(max);
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.creature.take_damage(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let max = self.max_hp();
        self.creature.heal(amount, max)
    }

    pub fn is_dead(&self) -> bool {
        self.creature.is_dead()
    }

    /// Use a consumable from the inventory.
    ///
    /// Returns the hit points restored, or None if the item isn't carried or
    /// can't be used. Unusable items stay in the inventory.
    pub fn use_item(&mut self, name: &str) -> Option<u32> {
        let heal = self
            .inventory
            .iter()
            .find(|s| s.item.name == name)
            .and_then(|s| match s.item.kind {
                ItemKind::Potion { heal } => Some(heal),
                ItemKind::Trinket | ItemKind::Junk => None,
            })?;

        self.inventory.remove_item(name)?;
        Some(self.heal(heal))
    }

    /// Equip a weapon from the process-wide registry
    pub fn equip(&mut self, name: &str) -> Result<(), WeaponError> {
        self.equip_from(name, available_weapons())
    }

    /// Equip a weapon from a specific registry
    pub fn equip_from(&mut self, name: &str, registry: &WeaponRegistry) -> Result<(), WeaponError> {
        let weapon = registry.get(name)?;
        self.creature.equip(weapon);
        Ok(())
    }

    /// Roll the damage of one attack
    pub fn attack_damage(&self, rng: &mut impl Rng) -> u32 {
        combat::attack_damage(self.creature.weapon(), self.strength, rng)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        self.creature.name()
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn weapon(&self) -> &Arc<Weapon> {
        self.creature.weapon()
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn dexterity(&self) -> u32 {
        self.dexterity
    }

    pub fn constitution(&self) -> u32 {
        self.constitution
    }

    /// Score for a given ability. `Other` has no score.
    pub fn ability(&self, ability: Ability) -> Option<u32> {
        match ability {
            Ability::Strength => Some(self.strength),
            Ability::Dexterity => Some(self.dexterity),
            Ability::Constitution => Some(self.constitution),
            Ability::Other => None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn inventory(&self) -> &ItemInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut ItemInventory {
        &mut self.inventory
    }

    /// Rank name for the current level
    pub fn title(&self) -> &'static str {
        progression::level_title(self.level)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nLevel: {} | Gold: {}g | Exp: {}",
            self.creature.describe(self.max_hp()),
            self.level,
            self.gold,
            self.experience
        )
    }
}
