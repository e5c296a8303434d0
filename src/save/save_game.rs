//! Player save/load
//!
//! A save is a flat JSON object holding the ability scores, level, gold,
//! experience, weapon name and inventory of one player. Loading extracts
//! each key explicitly so a bad file reports which key is at fault.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::Player;
use crate::items::{InventoryError, ItemInventory, WeaponRegistry, available_weapons};
use crate::progression::BASE_HP;

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save file is not a JSON object")]
    NotAnObject,
    #[error("Missing save field `{0}`")]
    MissingField(&'static str),
    #[error("Save field `{key}` should be {expected}")]
    InvalidField {
        key: &'static str,
        expected: &'static str,
    },
    #[error("Unknown weapon in save: {0}")]
    UnknownWeapon(String),
    #[error("Invalid inventory in save: {0}")]
    Inventory(#[from] InventoryError),
}

impl SaveError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Persisted fields of a player, in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub level: u32,
    pub gold: u32,
    pub experience: u32,
    pub weapon: String,
    pub inventory: Value,
}

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            strength: player.strength,
            dexterity: player.dexterity,
            constitution: player.constitution,
            level: player.level,
            gold: player.gold,
            experience: player.experience,
            weapon: player.weapon().name().to_string(),
            inventory: player.inventory.serialise(),
        }
    }

    /// Pull every persisted key out of a parsed save document
    pub fn from_document(document: &Value) -> Result<Self, SaveError> {
        let object = document.as_object().ok_or(SaveError::NotAnObject)?;

        Ok(Self {
            strength: u32_field(object, "strength")?,
            dexterity: u32_field(object, "dexterity")?,
            constitution: u32_field(object, "constitution")?,
            level: u32_field(object, "level")?,
            gold: u32_field(object, "gold")?,
            experience: u32_field(object, "experience")?,
            weapon: str_field(object, "weapon")?.to_string(),
            inventory: field(object, "inventory")?.clone(),
        })
    }

    /// Build a player, resolving the weapon and inventory
    pub fn into_player(
        self,
        name: impl Into<String>,
        registry: &WeaponRegistry,
    ) -> Result<Player, SaveError> {
        let weapon = registry
            .get(&self.weapon)
            .map_err(|_| SaveError::UnknownWeapon(self.weapon.clone()))?;
        let inventory = ItemInventory::deserialise(&self.inventory)?;

        let mut player = Player::with_weapon(name, weapon);
        player.creature.set_base_hp(BASE_HP);
        player.strength = self.strength;
        player.dexterity = self.dexterity;
        player.constitution = self.constitution;
        player.level = self.level;
        player.gold = self.gold;
        player.experience = self.experience;
        player.inventory = inventory;
        player.restore_hp();

        Ok(player)
    }
}

fn field<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, SaveError> {
    object.get(key).ok_or(SaveError::MissingField(key))
}

fn u32_field(object: &Map<String, Value>, key: &'static str) -> Result<u32, SaveError> {
    field(object, key)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(SaveError::InvalidField {
            key,
            expected: "a non-negative 32-bit integer",
        })
}

fn str_field<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, SaveError> {
    field(object, key)?.as_str().ok_or(SaveError::InvalidField {
        key,
        expected: "a string",
    })
}

/// Write a player's save file, replacing whatever is at `path`
pub fn save_player(player: &Player, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let record = PlayerRecord::from_player(player);

    let mut json = serde_json::to_string_pretty(&record)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| SaveError::io(path, e))?;

    log::info!("Player {} saved to {:?}", player.name(), path);
    Ok(())
}

/// Load a player, resolving weapons through the process-wide registry
pub fn load_player(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Player, SaveError> {
    load_player_with(name, path, available_weapons())
}

/// Load a player, resolving weapons through `registry`
pub fn load_player_with(
    name: impl Into<String>,
    path: impl AsRef<Path>,
    registry: &WeaponRegistry,
) -> Result<Player, SaveError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| SaveError::io(path, e))?;
    let document: Value = serde_json::from_str(&data)?;

    let player = PlayerRecord::from_document(&document)?.into_player(name, registry)?;

    log::info!("Player {} loaded from {:?}", player.name(), path);
    Ok(player)
}

/// Get the save directory path
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    match ProjectDirs::from("com", "emberfall", "Emberfall") {
        Some(proj_dirs) => proj_dirs.data_local_dir().join("saves"),
        None => {
            log::warn!("No platform data directory, keeping saves in ./saves");
            PathBuf::from("./saves")
        }
    }
}

/// Create the save directory if it is missing, returning its path
pub fn ensure_save_directory() -> Result<PathBuf, SaveError> {
    let dir = save_directory();
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| SaveError::io(&dir, e))?;
        log::info!("Created save directory {:?}", dir);
    }
    Ok(dir)
}

/// File name used for a player's save
fn save_file_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();

    if slug.is_empty() {
        "player.json".to_string()
    } else {
        format!("{}.json", slug)
    }
}

/// Save path for a named player inside `dir`
pub fn save_path_in(dir: &Path, name: &str) -> PathBuf {
    dir.join(save_file_name(name))
}

/// Save path for a named player in the default save directory
pub fn save_path(name: &str) -> PathBuf {
    save_path_in(&save_directory(), name)
}

pub fn save_exists_in(dir: &Path, name: &str) -> bool {
    save_path_in(dir, name).exists()
}

/// Check if a save exists for the named player
pub fn save_exists(name: &str) -> bool {
    save_exists_in(&save_directory(), name)
}

/// Delete a named player's save from `dir`. A missing save is not an error.
pub fn delete_save_in(dir: &Path, name: &str) -> Result<(), SaveError> {
    let path = save_path_in(dir, name);
    if path.exists() {
        fs::remove_file(&path).map_err(|e| SaveError::io(&path, e))?;
        log::info!("Deleted save {:?}", path);
    }
    Ok(())
}

/// Delete a named player's save
pub fn delete_save(name: &str) -> Result<(), SaveError> {
    delete_save_in(&save_directory(), name)
}
