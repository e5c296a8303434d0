//! Progression systems

pub mod xp;

pub use xp::{BASE_HP, HP_PER_CONSTITUTION, level_up_cost, total_cost_to_level, max_hp, level_title};
