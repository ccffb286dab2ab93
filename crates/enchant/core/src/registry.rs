//! Name → definition table for custom enchantments.
//!
//! Keys are canonical names: trimmed and upper-cased, so `sharpness`,
//! `Sharpness` and ` SHARPNESS ` all resolve to the same entry. The registry
//! is an owned value; hosts share it by handle rather than through a global.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::enchantment::Enchantment;
use crate::error::RegistryError;
use crate::parser;

/// Returns the registry key for an enchantment name.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Table of registered enchantments keyed by canonical name.
///
/// Cloning is cheap: definitions are shared, only the table is copied.
#[derive(Clone, Default)]
pub struct EnchantmentRegistry {
    entries: BTreeMap<String, Arc<dyn Enchantment>>,
}

impl EnchantmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, reporting why it was refused.
    ///
    /// Refused registrations leave the registry untouched.
    pub fn try_register(&mut self, definition: Arc<dyn Enchantment>) -> Result<(), RegistryError> {
        let name = definition.name();
        if name.trim().is_empty() || name.contains(['\n', '\r', parser::FORMAT_MARKER]) {
            return Err(RegistryError::InvalidName {
                name: name.to_string(),
            });
        }

        let key = canonical_name(name);
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }
        if !definition.is_enabled() {
            return Err(RegistryError::Disabled {
                name: name.to_string(),
            });
        }

        self.entries.insert(key, definition);
        Ok(())
    }

    /// Registers a definition. Returns false if the name is taken, the
    /// definition is disabled, or the name cannot be written to lore.
    pub fn register(&mut self, definition: Arc<dyn Enchantment>) -> bool {
        self.try_register(definition).is_ok()
    }

    /// Removes the definition with `name`. Returns false if it was absent.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.entries.remove(&canonical_name(name)).is_some()
    }

    /// Looks up a definition by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Enchantment>> {
        self.entries.get(&canonical_name(name)).cloned()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical_name(name))
    }

    /// Canonical names of every registered enchantment.
    pub fn list_names(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Every registered definition, ordered by canonical name.
    pub fn list_all(&self) -> Vec<Arc<dyn Enchantment>> {
        self.entries.values().cloned().collect()
    }

    /// Drops every definition.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for EnchantmentRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
