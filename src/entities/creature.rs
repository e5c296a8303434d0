//! Creature base shared by players and other actors

use std::sync::Arc;

use crate::items::Weapon;

/// A named actor with a hit point pool and an equipped weapon
#[derive(Debug, Clone)]
pub struct Creature {
    name: String,
    base_hp: u32,
    current_hp: u32,
    weapon: Arc<Weapon>,
}

impl Creature {
    /// Create a creature at full base health
    pub fn new(name: impl Into<String>, base_hp: u32, weapon: Arc<Weapon>) -> Self {
        Self {
            name: name.into(),
            base_hp,
            current_hp: base_hp,
            weapon,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_hp(&self) -> u32 {
        self.base_hp
    }

    pub(crate) fn set_base_hp(&mut self, base_hp: u32) {
        self.base_hp = base_hp;
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub(crate) fn set_current_hp(&mut self, hp: u32) {
        self.current_hp = hp;
    }

    pub fn weapon(&self) -> &Arc<Weapon> {
        &self.weapon
    }

    /// Equip a weapon, returning the previous one
    pub fn equip(&mut self, weapon: Arc<Weapon>) -> Arc<Weapon> {
        std::mem::replace(&mut self.weapon, weapon)
    }

    /// Lose hit points, returning how many were actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current_hp);
        self.current_hp -= actual;
        actual
    }

    /// Restore hit points up to `max_hp`, returning how many were restored
    pub fn heal(&mut self, amount: u32, max_hp: u32) -> u32 {
        let actual = amount.min(max_hp.saturating_sub(self.current_hp));
        self.current_hp += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current_hp == 0
    }

    /// One-line description for display
    pub fn describe(&self, max_hp: u32) -> String {
        format!(
            "{} | HP: {}/{} | Weapon: {}",
            self.name,
            self.current_hp,
            max_hp,
            self.weapon.name()
        )
    }
}
