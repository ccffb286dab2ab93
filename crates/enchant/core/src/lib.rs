//! Custom enchantments stored in item lore.
//!
//! `enchant-core` keeps a secondary enchantment system entirely inside an
//! item's free-text lore lines. Each applied enchantment is one line of the
//! form `<name> <roman numeral>`, and every guarantee (unique names, levels,
//! no downgrades, exact removal) follows from how those lines are encoded and
//! parsed.
//!
//! Modules, leaves first:
//! - [`numeral`] converts levels to and from Roman numerals
//! - [`parser`] splits a lore line into a candidate name and level
//! - [`registry`] maps canonical names to [`Enchantment`] definitions
//! - [`codec`] decodes an item's lore against the registry
//! - [`mutate`] adds, upgrades and removes enchantment lines
//! - [`watcher`] detects equip/unequip transitions between polls
//!
//! The crate is pure: no I/O, no logging and no global state.
pub mod codec;
pub mod config;
pub mod enchantment;
pub mod equipment;
pub mod error;
pub mod item;
pub mod mutate;
pub mod numeral;
pub mod parser;
pub mod registry;
pub mod watcher;

pub use codec::{AppliedEnchantment, AppliedEnchantments, decode, encode_line, resolve};
pub use config::EnchantConfig;
pub use enchantment::{
    BlockEvent, BlockPhase, BlockPos, DamageCause, DamageEvent, Enchantment, EntityId, HookKind,
    InteractAction, InteractEvent, SimpleEnchantment,
};
pub use equipment::{EquipmentSlot, EquipmentSnapshot};
pub use error::{HookError, HookResult, RegistryError, guard};
pub use item::{ItemMeta, ItemStack, LoreHolder};
pub use numeral::MAX_LEVEL;
pub use registry::{EnchantmentRegistry, canonical_name};
pub use watcher::{EquipmentWatcher, FiredHook, HookFailure, PollReport, SlotChange, WatchState};
