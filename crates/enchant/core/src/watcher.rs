//! Polling detector for equip/unequip transitions.
//!
//! One [`EquipmentWatcher`] exists per online entity. Each poll compares the
//! entity's worn items against the previous snapshot and, for every slot that
//! changed, fires equip hooks for the new item and then unequip hooks for the
//! old one.
//!
//! The first poll after creation only records the snapshot. Items worn at
//! login are not reported as transitions.

use crate::codec;
use crate::enchantment::{EntityId, HookKind};
use crate::equipment::{EquipmentSlot, EquipmentSnapshot};
use crate::error::{self, HookError};
use crate::item::ItemStack;
use crate::registry::EnchantmentRegistry;

/// What the watcher knows about its entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WatchState {
    /// No snapshot yet; the next poll only records one.
    #[default]
    Unobserved,
    /// Snapshot from the most recent poll.
    Tracking(EquipmentSnapshot),
}

/// A hook that fired for one applied enchantment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredHook {
    pub hook: HookKind,
    pub enchantment: String,
    pub level: u32,
}

/// Everything that happened in one slot during a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotChange {
    pub slot: EquipmentSlot,
    /// Hooks in firing order: equips for the new item, then unequips for the old.
    pub fired: Vec<FiredHook>,
}

/// A hook that returned an error. Other hooks still ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookFailure {
    pub slot: EquipmentSlot,
    pub hook: HookKind,
    pub enchantment: String,
    pub error: HookError,
}

/// Outcome of a single [`EquipmentWatcher::poll`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollReport {
    /// True when this poll only recorded the initial snapshot.
    pub initial: bool,
    pub changes: Vec<SlotChange>,
    pub failures: Vec<HookFailure>,
}

impl PollReport {
    /// Total number of hooks invoked, failed ones included.
    pub fn hook_count(&self) -> usize {
        self.changes.iter().map(|c| c.fired.len()).sum()
    }

    pub fn is_quiet(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Per-entity equipment change detector.
#[derive(Clone, Debug)]
pub struct EquipmentWatcher {
    entity: EntityId,
    state: WatchState,
}

impl EquipmentWatcher {
    /// Creates a watcher that has not seen the entity yet.
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            state: WatchState::Unobserved,
        }
    }

    /// Creates a watcher primed with the equipment seen at login.
    pub fn with_snapshot(entity: EntityId, snapshot: EquipmentSnapshot) -> Self {
        Self {
            entity,
            state: WatchState::Tracking(snapshot),
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    /// The stored snapshot, if one has been taken.
    pub fn snapshot(&self) -> Option<&EquipmentSnapshot> {
        match &self.state {
            WatchState::Unobserved => None,
            WatchState::Tracking(snapshot) => Some(snapshot),
        }
    }

    /// Forgets the stored snapshot; the next poll re-primes.
    pub fn reset(&mut self) {
        self.state = WatchState::Unobserved;
    }

    /// Diffs `current` against the stored snapshot and fires hooks.
    ///
    /// The stored snapshot is replaced by `current` whether or not anything
    /// changed.
    pub fn poll(
        &mut self,
        registry: &EnchantmentRegistry,
        current: EquipmentSnapshot,
    ) -> PollReport {
        let previous = match core::mem::take(&mut self.state) {
            WatchState::Unobserved => {
                self.state = WatchState::Tracking(current);
                return PollReport {
                    initial: true,
                    ..PollReport::default()
                };
            }
            WatchState::Tracking(previous) => previous,
        };

        let mut report = PollReport::default();
        for slot in current.changed_slots(&previous) {
            let mut change = SlotChange {
                slot,
                fired: Vec::new(),
            };
            let failures = &mut report.failures;
            self.fire(registry, slot, HookKind::Equip, current.get(slot), &mut change, failures);
            self.fire(registry, slot, HookKind::Unequip, previous.get(slot), &mut change, failures);
            report.changes.push(change);
        }

        self.state = WatchState::Tracking(current);
        report
    }

    fn fire(
        &self,
        registry: &EnchantmentRegistry,
        slot: EquipmentSlot,
        hook: HookKind,
        item: &ItemStack,
        change: &mut SlotChange,
        failures: &mut Vec<HookFailure>,
    ) {
        for applied in codec::resolve(registry, item) {
            let result = error::guard(|| match hook {
                HookKind::Equip => applied.definition.on_equip(self.entity, applied.level),
                _ => applied.definition.on_unequip(self.entity, applied.level),
            });
            let enchantment = applied.name().to_string();
            if let Err(error) = result {
                failures.push(HookFailure {
                    slot,
                    hook,
                    enchantment: enchantment.clone(),
                    error,
                });
            }
            change.fired.push(FiredHook {
                hook,
                enchantment,
                level: applied.level,
            });
        }
    }
}
