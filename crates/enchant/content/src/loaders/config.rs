//! Enchantment configuration loader.

use std::path::Path;

use enchant_core::EnchantConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for enchantment configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`EnchantConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EnchantConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<EnchantConfig> {
        let config: EnchantConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
