//! Combat math

pub mod damage;

pub use damage::{attack_damage, roll_weapon, strength_bonus};
