//! Emberfall - Entry Point
//!
//! Loads a character (or rolls a new one), shows it, and writes the save back.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use emberfall::data::{load_weapons_or_default, DEFAULT_WEAPONS_PATH};
use emberfall::items::init_available_weapons;
use emberfall::progression::total_cost_to_level;
use emberfall::save::{ensure_save_directory, save_path_in};
use emberfall::Player;

/// Name given to characters started from this binary
const DEFAULT_NAME: &str = "Hero";

/// Environment variable naming an alternative weapon table
const WEAPONS_ENV: &str = "EMBERFALL_WEAPONS";

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Emberfall v{}", env!("CARGO_PKG_VERSION"));

    let weapons_path = std::env::var_os(WEAPONS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WEAPONS_PATH));
    if !init_available_weapons(load_weapons_or_default(&weapons_path)) {
        log::warn!("Weapon registry was already initialised");
    }

    let path = match std::env::args_os().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            path
        }
        None => {
            let dir = ensure_save_directory().context("Failed to prepare the save directory")?;
            save_path_in(&dir, DEFAULT_NAME)
        }
    };

    let player = if path.exists() {
        Player::load(DEFAULT_NAME, &path)
            .with_context(|| format!("Failed to load {}", path.display()))?
    } else {
        log::info!("No save at {:?}, starting a new character", path);
        Player::new(DEFAULT_NAME)
    };

    println!("{}", player);
    println!(
        "Rank: {} | Next level: {} exp | Spent so far: {} exp",
        player.title(),
        player.level_up_cost(),
        total_cost_to_level(player.level())
    );

    player
        .save(&path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    log::info!("Emberfall shut down cleanly");
    Ok(())
}
