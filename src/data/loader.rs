//! RON data loader
//!
//! Loads the weapon table from an external RON file, with fallback to the
//! built-in table.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::items::{Weapon, WeaponRegistry};

/// Default location of the weapon table
pub const DEFAULT_WEAPONS_PATH: &str = "assets/data/weapons.ron";

/// Data file errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize weapons: {0}")]
    Serialize(#[from] ron::Error),
}

/// Load a weapon table from a RON list of weapons
pub fn load_weapons(path: impl AsRef<Path>) -> Result<WeaponRegistry, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let weapons: Vec<Weapon> = ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loaded {} weapons from {:?}", weapons.len(), path);
    Ok(WeaponRegistry::from_weapons(weapons))
}

/// Load a weapon table, falling back to the built-in one on any failure
pub fn load_weapons_or_default(path: impl AsRef<Path>) -> WeaponRegistry {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("No weapon table at {:?}, using built-in weapons", path);
        return WeaponRegistry::builtin();
    }

    load_weapons(path).unwrap_or_else(|e| {
        log::warn!("{}. Using built-in weapons.", e);
        WeaponRegistry::builtin()
    })
}

/// Write the built-in weapon table out as RON, for modding
pub fn export_default_weapons(path: impl AsRef<Path>) -> Result<(), DataError> {
    let path = path.as_ref();
    let write_err = |source| DataError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let weapons = crate::items::builtin_weapons();
    let weapons_ron = ron::ser::to_string_pretty(&weapons, ron::ser::PrettyConfig::default())?;
    fs::write(path, weapons_ron).map_err(write_err)?;

    log::info!("Exported default weapons to {:?}", path);
    Ok(())
}
