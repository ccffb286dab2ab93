//! Extension boundary: components that contribute enchantments at startup.

use std::sync::Arc;

use enchant_core::{Enchantment, SimpleEnchantment};

use super::registry::RegistryHandle;

/// A component that registers enchantments when the runtime is enabled.
///
/// Extensions are invoked once per start, before equipment tracking begins.
/// Refused registrations are logged by [`RegistryHandle::register`] and do
/// not stop the remaining ones.
pub trait EnchantmentExtension: Send + Sync {
    /// Name used in startup logs.
    fn name(&self) -> &str;

    /// Registers this extension's enchantments.
    fn register_enchantments(&self, registry: &RegistryHandle);
}

/// Extension backed by a fixed list of definitions, e.g. a loaded catalog.
pub struct StaticExtension {
    name: String,
    definitions: Vec<Arc<dyn Enchantment>>,
}

impl StaticExtension {
    pub fn new(name: impl Into<String>, definitions: Vec<Arc<dyn Enchantment>>) -> Self {
        Self {
            name: name.into(),
            definitions,
        }
    }

    /// Wraps lore-only definitions loaded from a catalog.
    pub fn from_catalog(name: impl Into<String>, catalog: Vec<SimpleEnchantment>) -> Self {
        let definitions = catalog
            .into_iter()
            .map(|def| Arc::new(def) as Arc<dyn Enchantment>)
            .collect();
        Self::new(name, definitions)
    }
}

impl EnchantmentExtension for StaticExtension {
    fn name(&self) -> &str {
        &self.name
    }

    fn register_enchantments(&self, registry: &RegistryHandle) {
        for definition in &self.definitions {
            registry.register(Arc::clone(definition));
        }
    }
}
