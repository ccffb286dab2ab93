//! Public runtime API surface.
//!
//! This module gathers the types exposed to hosts of the runtime crate so
//! other layers can stay focused on orchestration and workers.

pub mod errors;
pub mod extension;
pub mod handle;
pub mod listing;
pub mod registry;

pub use errors::{Result, RuntimeError};
pub use extension::{EnchantmentExtension, StaticExtension};
pub use handle::RuntimeHandle;
pub use listing::enchant_list;
pub use registry::RegistryHandle;
