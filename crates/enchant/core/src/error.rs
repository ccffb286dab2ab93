//! Error types for the enchantment core.
//!
//! Core operations never fail on malformed lore; they skip or no-op instead.
//! The only typed failures are refused registrations and failing hooks, both
//! of which are reported to the caller rather than raised.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Reason a definition was not accepted by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("enchantment `{name}` is already registered")]
    Duplicate { name: String },

    #[error("enchantment `{name}` is disabled")]
    Disabled { name: String },

    #[error("enchantment name {name:?} is not a valid lore name")]
    InvalidName { name: String },
}

impl RegistryError {
    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Duplicate { .. } => "duplicate",
            Self::Disabled { .. } => "disabled",
            Self::InvalidName { .. } => "invalid_name",
        }
    }
}

/// Failure raised by an enchantment hook.
///
/// Hook failures are isolated: the caller records them and keeps invoking
/// the remaining hooks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HookError {
    pub message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Converts the payload of a panicking hook into an error.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self::new(format!("hook panicked: {detail}"))
    }
}

/// Invokes one hook, reporting a panic as a [`HookError`].
pub fn guard(hook: impl FnOnce() -> HookResult) -> HookResult {
    panic::catch_unwind(AssertUnwindSafe(hook))
        .unwrap_or_else(|payload| Err(HookError::from_panic(payload)))
}

/// Result type returned by every enchantment hook.
pub type HookResult = Result<(), HookError>;
