//! Item system

pub mod item;
pub mod inventory;
pub mod weapon;

pub use item::{Item, ItemKind};
pub use inventory::{ItemInventory, ItemStack, InventoryError};
pub use weapon::{
    Weapon, WeaponError, WeaponRegistry, UNARMED,
    available_weapons, init_available_weapons, builtin_weapons,
};
