//! Shared handle to the process-wide enchantment registry.
//!
//! The registry is read on every tick by every watcher and event dispatch,
//! and written only while extensions are enabled or disabled. A
//! [`std::sync::RwLock`] fits that read-mostly pattern. Poisoned locks are
//! recovered: the registry holds no invariant a panicking reader can break.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use enchant_core::{
    AppliedEnchantments, Enchantment, EnchantmentRegistry, LoreHolder, RegistryError, codec,
};
use tracing::{debug, warn};

/// Cloneable handle to a shared [`EnchantmentRegistry`].
#[derive(Clone, Default)]
pub struct RegistryHandle {
    inner: Arc<RwLock<EnchantmentRegistry>>,
}

impl RegistryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already populated registry.
    pub fn from_registry(registry: EnchantmentRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, EnchantmentRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, EnchantmentRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Point-in-time copy of the registry.
    ///
    /// Used before invoking hooks so that no lock is held while extension
    /// code runs.
    pub fn snapshot(&self) -> EnchantmentRegistry {
        self.read().clone()
    }

    /// Registers a definition, logging refusals.
    pub fn register(&self, definition: Arc<dyn Enchantment>) -> bool {
        match self.try_register(definition) {
            Ok(()) => true,
            Err(error) => {
                warn!(
                    target: "enchant::registry",
                    code = error.error_code(),
                    "Enchantment not registered: {}", error
                );
                false
            }
        }
    }

    /// Registers a definition, returning the refusal reason without logging.
    pub fn try_register(&self, definition: Arc<dyn Enchantment>) -> Result<(), RegistryError> {
        let name = definition.name().to_string();
        self.write().try_register(definition)?;
        debug!(target: "enchant::registry", enchantment = %name, "Enchantment registered");
        Ok(())
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.write().unregister(name)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Enchantment>> {
        self.read().lookup(name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.read().is_registered(name)
    }

    pub fn list_names(&self) -> BTreeSet<String> {
        self.read().list_names()
    }

    pub fn list_all(&self) -> Vec<Arc<dyn Enchantment>> {
        self.read().list_all()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drops every definition.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Enchantments currently applied to `item`.
    pub fn resolve(&self, item: &dyn LoreHolder) -> AppliedEnchantments {
        codec::resolve(&self.read(), item)
    }
}

#[cfg(test)]
mod tests {
    use enchant_core::{ItemStack, SimpleEnchantment};

    use super::*;

    #[test]
    fn clones_share_the_same_table() {
        let handle = RegistryHandle::new();
        let other = handle.clone();
        assert!(handle.register(Arc::new(SimpleEnchantment::new("Lifesteal", &[]))));
        assert!(other.is_registered("LIFESTEAL"));
        assert!(!other.register(Arc::new(SimpleEnchantment::new("lifesteal", &[]))));

        let sword = ItemStack::new("iron_sword").with_lore(["Lifesteal II"]);
        assert_eq!(other.resolve(&sword).level("Lifesteal"), Some(2));

        other.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn snapshot_is_detached() {
        let handle = RegistryHandle::new();
        handle.register(Arc::new(SimpleEnchantment::new("Venom", &[])));
        let snapshot = handle.snapshot();
        handle.clear();
        assert!(snapshot.is_registered("Venom"));
    }
}
