//! Entity definitions

pub mod creature;
pub mod player;

pub use creature::Creature;
pub use player::{Ability, Player, UnknownAbility};
