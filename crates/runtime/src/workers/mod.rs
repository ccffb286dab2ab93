//! Worker tasks that back the runtime orchestration.
//!
//! The equipment worker owns per-entity watchers and polls them each tick.

mod equipment;

pub use equipment::{Command, EquipmentWorker};
