//! Save/load system
//!
//! Handles player saving, loading, and save locations.

pub mod save_game;

pub use save_game::{
    PlayerRecord, SaveError,
    save_player, load_player, load_player_with,
    save_directory, ensure_save_directory,
    save_path, save_path_in, save_exists, save_exists_in, delete_save, delete_save_in,
};
