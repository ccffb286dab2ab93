//! Equipment tracking across all online entities.
//!
//! [`WatcherSet`] owns one [`EquipmentWatcher`] per tracked entity and polls
//! them against an [`EquipmentSource`] supplied by the host. It is driven by
//! the equipment worker on every tick.

use std::collections::HashMap;

use enchant_core::{EnchantmentRegistry, EntityId, EquipmentSnapshot, EquipmentWatcher, PollReport};
use tracing::{debug, error};

/// Host view of what entities are wearing.
pub trait EquipmentSource: Send + Sync {
    /// Entities currently online, used to prime tracking at startup.
    fn online(&self) -> Vec<EntityId>;

    /// Worn items of `entity`, or `None` if it is no longer online.
    fn equipment(&self, entity: EntityId) -> Option<EquipmentSnapshot>;
}

/// Totals for one tick across every tracked entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Entities whose equipment was read.
    pub polled: usize,
    /// Slots that changed.
    pub transitions: usize,
    /// Hooks invoked.
    pub hooks: usize,
    /// Hooks that returned an error.
    pub failures: usize,
    /// Entities dropped because the source no longer knows them.
    pub departed: Vec<EntityId>,
}

/// Watchers for every tracked entity.
#[derive(Default)]
pub struct WatcherSet {
    watchers: HashMap<EntityId, EquipmentWatcher>,
}

impl WatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `entity`.
    ///
    /// With a login snapshot the watcher is primed immediately; without one
    /// the first poll records the snapshot. Re-joining replaces the watcher.
    pub fn join(&mut self, entity: EntityId, snapshot: Option<EquipmentSnapshot>) {
        let watcher = match snapshot {
            Some(snapshot) => EquipmentWatcher::with_snapshot(entity, snapshot),
            None => EquipmentWatcher::new(entity),
        };
        self.watchers.insert(entity, watcher);
    }

    /// Stops tracking `entity`. Returns false if it was not tracked.
    pub fn leave(&mut self, entity: EntityId) -> bool {
        self.watchers.remove(&entity).is_some()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.watchers.contains_key(&entity)
    }

    pub fn get(&self, entity: EntityId) -> Option<&EquipmentWatcher> {
        self.watchers.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    pub fn clear(&mut self) {
        self.watchers.clear();
    }

    /// Polls every watcher once.
    ///
    /// Entities the source reports as offline are dropped without firing
    /// unequip hooks.
    pub fn tick(
        &mut self,
        registry: &EnchantmentRegistry,
        source: &dyn EquipmentSource,
    ) -> TickSummary {
        let mut summary = TickSummary::default();

        for (entity, watcher) in self.watchers.iter_mut() {
            let Some(current) = source.equipment(*entity) else {
                summary.departed.push(*entity);
                continue;
            };
            let report = watcher.poll(registry, current);
            summary.polled += 1;
            summary.transitions += report.changes.len();
            summary.hooks += report.hook_count();
            summary.failures += report.failures.len();
            log_report(*entity, &report);
        }

        for entity in &summary.departed {
            self.watchers.remove(entity);
            debug!(target: "enchant::equipment", %entity, "Stopped tracking departed entity");
        }

        summary
    }
}

fn log_report(entity: EntityId, report: &PollReport) {
    if report.initial {
        debug!(target: "enchant::equipment", %entity, "Recorded initial equipment");
        return;
    }

    for change in &report.changes {
        for fired in &change.fired {
            debug!(
                target: "enchant::equipment",
                %entity,
                slot = %change.slot,
                hook = %fired.hook,
                enchantment = %fired.enchantment,
                level = fired.level,
                "Equipment hook fired"
            );
        }
    }

    for failure in &report.failures {
        error!(
            target: "enchant::hooks",
            %entity,
            slot = %failure.slot,
            hook = %failure.hook,
            enchantment = %failure.enchantment,
            error = %failure.error,
            "Enchantment hook failed, continuing"
        );
    }
}
