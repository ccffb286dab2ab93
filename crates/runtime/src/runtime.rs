//! High-level runtime orchestrator.
//!
//! Starting the runtime is the "enable" step of the enchantment system:
//! extensions register their enchantments, built-in adapters are added, the
//! equipment worker is spawned and every online entity is tracked. Shutting
//! down is the matching "disable" step.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use enchant_content::{ConfigLoader, native};
use enchant_core::{EnchantConfig, RegistryError};

use crate::api::{EnchantmentExtension, RegistryHandle, Result, RuntimeError, RuntimeHandle};
use crate::equipment::EquipmentSource;
use crate::workers::EquipmentWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub enchant: EnchantConfig,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    /// Loads the enchantment section from a TOML file, keeping other defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let enchant = ConfigLoader::load(path).map_err(|e| RuntimeError::Content {
            what: "configuration",
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        Ok(Self {
            enchant,
            ..Self::default()
        })
    }

    /// Worker tick period, never shorter than 1 ms.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.enchant.equip_poll_interval_ms.max(1))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            enchant: EnchantConfig::default(),
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that owns the equipment worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for hosts.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Stops the equipment worker, discarding every snapshot, and clears
    /// the registry. The registry is cleared even when the worker task
    /// ended abnormally; the join error is returned afterwards.
    pub async fn shutdown(self) -> Result<()> {
        if let Err(error) = self.handle.shutdown_worker().await {
            debug!("Equipment worker already stopped: {}", error);
        }

        let joined = self.worker_handle.await;

        self.handle.registry().clear();
        info!("Enchantment runtime disabled");
        joined.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    registry: Option<RegistryHandle>,
    extensions: Vec<Arc<dyn EnchantmentExtension>>,
    source: Option<Arc<dyn EquipmentSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            registry: None,
            extensions: Vec::new(),
            source: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing registry handle instead of a fresh one.
    pub fn registry(mut self, registry: RegistryHandle) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Add an extension whose enchantments are registered on start.
    pub fn extension(mut self, extension: impl EnchantmentExtension + 'static) -> Self {
        self.extensions.push(Arc::new(extension));
        self
    }

    /// Set the host's view of worn equipment.
    pub fn equipment_source(mut self, source: impl EquipmentSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Set the host's view of worn equipment from a shared instance.
    pub fn shared_equipment_source(mut self, source: Arc<dyn EquipmentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Registers content, spawns the equipment worker and tracks online entities.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(self) -> Result<Runtime> {
        let source = self.source.ok_or(RuntimeError::MissingEquipmentSource)?;
        let registry = self.registry.unwrap_or_default();
        let config = self.config;

        for extension in &self.extensions {
            let before = registry.len();
            extension.register_enchantments(&registry);
            info!(
                "Extension {} registered {} enchantments",
                extension.name(),
                registry.len().saturating_sub(before)
            );
        }

        if config.enchant.native_enchantments {
            let refused = native::register_all(&mut registry.write(), &config.enchant);
            for error in refused {
                match error {
                    RegistryError::Disabled { name } => {
                        debug!("Built-in enchantment {} disabled by configuration", name)
                    }
                    other => warn!(code = other.error_code(), "Built-in enchantment not registered: {}", other),
                }
            }
        }

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let mut worker = EquipmentWorker::new(
            registry.clone(),
            Arc::clone(&source),
            command_rx,
            config.poll_interval(),
        );

        // Primed before spawning; start cannot fail past this point.
        let online = source.online();
        for entity in &online {
            worker.track(*entity, source.equipment(*entity));
        }
        let worker_handle = tokio::spawn(worker.run());

        let handle = RuntimeHandle::new(command_tx, registry, Arc::new(config.enchant));

        info!(
            "Enchantment runtime enabled: {} enchantments, {} entities tracked",
            handle.registry().len(),
            online.len()
        );

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
