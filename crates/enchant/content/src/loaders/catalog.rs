//! Lore-only enchantment catalog loader.
//!
//! Catalog entries become [`SimpleEnchantment`]s: enchantments that exist in
//! lore and in listings but have no hooks of their own.

use std::path::Path;

use enchant_core::SimpleEnchantment;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_weight() -> u32 {
    10
}

fn default_max_level() -> u32 {
    1
}

fn default_enabled() -> bool {
    true
}

impl CatalogEntry {
    /// Builds the definition described by this entry.
    pub fn build(&self) -> SimpleEnchantment {
        let targets: Vec<&str> = self.targets.iter().map(String::as_str).collect();
        let definition = SimpleEnchantment::new(self.name.clone(), &targets)
            .with_weight(self.weight)
            .with_max_level(self.max_level);
        if self.enabled {
            definition
        } else {
            definition.disabled()
        }
    }
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantmentCatalog {
    pub enchantments: Vec<CatalogEntry>,
}

/// Loader for enchantment catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an enchantment catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SimpleEnchantment>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an enchantment catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<SimpleEnchantment>> {
        let catalog: EnchantmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enchantment catalog RON: {}", e))?;

        Ok(catalog.enchantments.iter().map(CatalogEntry::build).collect())
    }
}

#[cfg(test)]
mod tests {
    use enchant_core::Enchantment;

    use super::*;

    const CATALOG: &str = r#"(
        enchantments: [
            (name: "Soulbound", targets: ["diamond_sword", "bow"], weight: 2, max_level: 1),
            (name: "Glow"),
            (name: "Retired", enabled: false),
        ],
    )"#;

    #[test]
    fn parses_entries_with_defaults() {
        let defs = CatalogLoader::parse(CATALOG).unwrap();
        assert_eq!(defs.len(), 3);

        assert_eq!(defs[0].name(), "Soulbound");
        assert_eq!(defs[0].natural_targets(), ["diamond_sword", "bow"]);
        assert_eq!(defs[0].weight(), 2);

        assert_eq!(defs[1].weight(), 10);
        assert_eq!(defs[1].max_level(), 1);
        assert!(defs[1].is_enabled());

        assert!(!defs[2].is_enabled());
    }

    #[test]
    fn rejects_malformed_catalog() {
        let err = CatalogLoader::parse("(enchantments: [(weight: 3)])").unwrap_err();
        assert!(err.to_string().contains("Failed to parse enchantment catalog RON"));
    }
}
