//! Equipment worker that owns every [`EquipmentWatcher`](enchant_core::EquipmentWatcher).
//!
//! Ticks on a fixed interval, polling all tracked entities, and receives
//! join/leave commands from [`RuntimeHandle`](crate::RuntimeHandle).

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use enchant_core::{EntityId, EquipmentSnapshot};

use crate::api::RegistryHandle;
use crate::equipment::{EquipmentSource, TickSummary, WatcherSet};

/// Commands that can be sent to the equipment worker
pub enum Command {
    /// Start tracking an entity. A snapshot primes the watcher immediately.
    Join {
        entity: EntityId,
        snapshot: Option<EquipmentSnapshot>,
    },
    /// Stop tracking an entity.
    Leave { entity: EntityId },
    /// Run one poll now instead of waiting for the next tick.
    PollNow { reply: oneshot::Sender<TickSummary> },
    /// Number of tracked entities.
    Tracked { reply: oneshot::Sender<usize> },
    /// Stop the worker after clearing every watcher.
    Shutdown,
}

/// Background task that detects equip/unequip transitions.
pub struct EquipmentWorker {
    watchers: WatcherSet,
    registry: RegistryHandle,
    source: Arc<dyn EquipmentSource>,
    command_rx: mpsc::Receiver<Command>,
    poll_interval: Duration,
}

impl EquipmentWorker {
    /// Creates a new equipment worker.
    pub fn new(
        registry: RegistryHandle,
        source: Arc<dyn EquipmentSource>,
        command_rx: mpsc::Receiver<Command>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            watchers: WatcherSet::new(),
            registry,
            source,
            command_rx,
            poll_interval,
        }
    }

    /// Starts tracking `entity` before the worker is spawned.
    pub fn track(&mut self, entity: EntityId, snapshot: Option<EquipmentSnapshot>) {
        self.watchers.join(entity, snapshot);
    }

    /// Main worker loop.
    ///
    /// Ends on [`Command::Shutdown`] or when every command sender is dropped.
    pub async fn run(mut self) {
        info!(
            "EquipmentWorker started (poll interval: {:?})",
            self.poll_interval
        );

        // First tick waits a full period; joins are primed with login snapshots.
        let start = Instant::now() + self.poll_interval;
        let mut interval = time::interval_at(start, self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(cmd) => {
                            if !self.handle_command(cmd) {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                _ = interval.tick() => {
                    self.poll();
                }
            }
        }

        self.watchers.clear();
        info!("EquipmentWorker stopped");
    }

    /// Returns false when the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Join { entity, snapshot } => {
                debug!(%entity, primed = snapshot.is_some(), "Tracking equipment");
                self.track(entity, snapshot);
            }
            Command::Leave { entity } => {
                if self.watchers.leave(entity) {
                    debug!(%entity, "Stopped tracking equipment");
                }
            }
            Command::PollNow { reply } => {
                let summary = self.poll();
                if reply.send(summary).is_err() {
                    debug!("PollNow reply channel closed (caller dropped)");
                }
            }
            Command::Tracked { reply } => {
                if reply.send(self.watchers.len()).is_err() {
                    debug!("Tracked reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn poll(&mut self) -> TickSummary {
        // Hooks run against a copy so extension code never runs under the lock.
        let registry = self.registry.snapshot();
        self.watchers.tick(&registry, self.source.as_ref())
    }
}
