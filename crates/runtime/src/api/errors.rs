//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and configuration loading so
//! hosts can bubble them up with consistent context.
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("equipment worker command channel closed")]
    CommandChannelClosed,

    #[error("equipment worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("equipment worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an equipment source before starting")]
    MissingEquipmentSource,

    #[error("failed to load {what} from {}", path.display())]
    Content {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("unknown enchantment `{name}`")]
    UnknownEnchantment { name: String },
}
