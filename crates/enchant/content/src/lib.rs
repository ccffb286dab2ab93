//! Data-driven enchantment content and loaders.
//!
//! This crate houses static content consumed by the runtime:
//! - Adapters for the host's built-in enchantments ([`native`])
//! - Lore-only enchantment catalogs (data-driven via RON)
//! - Enchantment system configuration (data-driven via TOML)
//!
//! All loaders use enchant-core types directly with serde for RON/TOML deserialization.

pub mod native;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use native::{NativeEnchantment, NativeKind, register_all};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogEntry, CatalogLoader, ConfigLoader};
