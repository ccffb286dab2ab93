//! Cloneable façade for the running enchantment system.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers helpers for tracking
//! entities, editing item lore and querying the registry.
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use enchant_core::{EnchantConfig, EntityId, EquipmentSnapshot, LoreHolder, mutate};

use super::errors::{Result, RuntimeError};
use super::listing::enchant_list;
use super::registry::RegistryHandle;
use crate::dispatch::EventDispatcher;
use crate::equipment::TickSummary;
use crate::workers::Command;

/// Host-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    registry: RegistryHandle,
    config: Arc<EnchantConfig>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        registry: RegistryHandle,
        config: Arc<EnchantConfig>,
    ) -> Self {
        Self {
            command_tx,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &RegistryHandle {
        &self.registry
    }

    pub fn config(&self) -> &EnchantConfig {
        &self.config
    }

    /// Dispatcher for attack, defense, tool and interact events.
    pub fn dispatcher(&self) -> EventDispatcher {
        EventDispatcher::new(self.registry.clone())
    }

    /// Start tracking an entity that just came online.
    ///
    /// Pass the equipment seen at login so items already worn are not
    /// reported as newly equipped.
    pub async fn entity_joined(
        &self,
        entity: EntityId,
        snapshot: Option<EquipmentSnapshot>,
    ) -> Result<()> {
        self.send(Command::Join { entity, snapshot }).await
    }

    /// Stop tracking an entity that went offline.
    pub async fn entity_left(&self, entity: EntityId) -> Result<()> {
        self.send(Command::Leave { entity }).await
    }

    /// Poll all tracked entities now and return the tick totals.
    pub async fn poll_now(&self) -> Result<TickSummary> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::PollNow { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Number of entities currently tracked.
    pub async fn tracked(&self) -> Result<usize> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Tracked { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Adds the named enchantment to `item` with the configured lore prefix.
    ///
    /// Returns whether the lore changed.
    pub fn enchant(&self, item: &mut dyn LoreHolder, name: &str, level: u32) -> Result<bool> {
        let definition = self.definition(name)?;
        Ok(mutate::add_with_prefix(
            item,
            definition.as_ref(),
            level,
            &self.config.lore_prefix,
        ))
    }

    /// Removes the named enchantment from `item`.
    pub fn disenchant(&self, item: &mut dyn LoreHolder, name: &str) -> Result<bool> {
        let definition = self.definition(name)?;
        Ok(mutate::remove(item, definition.as_ref()))
    }

    /// Removes every registered enchantment from `item`.
    pub fn strip(&self, item: &mut dyn LoreHolder) -> bool {
        mutate::remove_all(&self.registry.read(), item)
    }

    /// Loose check for `name` on `item`; see [`mutate::has`].
    pub fn has(&self, item: &dyn LoreHolder, name: &str) -> bool {
        mutate::has(item, name)
    }

    /// Text of the enchantment listing command.
    pub fn enchant_list(&self) -> String {
        enchant_list(&self.registry.read())
    }

    fn definition(&self, name: &str) -> Result<Arc<dyn enchant_core::Enchantment>> {
        self.registry
            .lookup(name)
            .ok_or_else(|| RuntimeError::UnknownEnchantment {
                name: name.to_string(),
            })
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    pub(crate) async fn shutdown_worker(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }
}
