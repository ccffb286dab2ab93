//! Runtime orchestration for lore-encoded enchantments.
//!
//! This crate wires the pure [`enchant_core`] pieces into a running system.
//! Hosts embed [`Runtime`] to register enchantments, track worn equipment,
//! and forward gameplay events into enchantment hooks through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types hosts interact with
//! - [`equipment`] tracks per-entity watchers against the host's equipment
//! - [`dispatch`] routes host events into hooks
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod dispatch;
pub mod equipment;
pub mod runtime;

mod workers;

pub use api::{
    EnchantmentExtension, RegistryHandle, Result, RuntimeError, RuntimeHandle, StaticExtension,
    enchant_list,
};
pub use dispatch::{DispatchFailure, DispatchReport, EventDispatcher};
pub use equipment::{EquipmentSource, TickSummary, WatcherSet};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
