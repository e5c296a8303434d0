//! Data loading and external game content
//!
//! Game data such as the weapon table can be overridden by RON files.

pub mod loader;

pub use loader::{
    DataError, DEFAULT_WEAPONS_PATH,
    load_weapons, load_weapons_or_default, export_default_weapons,
};
