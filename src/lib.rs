//! Emberfall - a small text role-playing game
//!
//! Player state, progression arithmetic, and the save files that
//! carry a character between sessions.

pub mod entities;
pub mod combat;
pub mod items;
pub mod progression;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use entities::{Ability, Creature, Player};
pub use items::{Item, ItemInventory, Weapon, WeaponRegistry, available_weapons};
pub use save::SaveError;
