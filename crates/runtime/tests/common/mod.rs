//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use enchant_core::{
    DamageEvent, Enchantment, EntityId, EquipmentSnapshot, HookError, HookKind, HookResult,
};
use enchant_runtime::{EquipmentSource, RuntimeConfig};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config with natives off and a poll interval long enough that tests drive
/// every tick through `poll_now`.
pub fn quiet_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.enchant.native_enchantments = false;
    config.enchant.equip_poll_interval_ms = 60_000;
    config
}

/// Equipment source backed by a shared map.
#[derive(Clone, Default)]
pub struct Wardrobe {
    worn: Arc<Mutex<HashMap<EntityId, EquipmentSnapshot>>>,
}

impl Wardrobe {
    pub fn dress(&self, entity: EntityId, snapshot: EquipmentSnapshot) {
        self.worn.lock().unwrap().insert(entity, snapshot);
    }

    pub fn remove(&self, entity: EntityId) {
        self.worn.lock().unwrap().remove(&entity);
    }
}

impl EquipmentSource for Wardrobe {
    fn online(&self) -> Vec<EntityId> {
        let mut entities: Vec<_> = self.worn.lock().unwrap().keys().copied().collect();
        entities.sort();
        entities
    }

    fn equipment(&self, entity: EntityId) -> Option<EquipmentSnapshot> {
        self.worn.lock().unwrap().get(&entity).cloned()
    }
}

/// Source whose equipment lookups panic, standing in for a broken host.
pub struct Faulty;

impl EquipmentSource for Faulty {
    fn online(&self) -> Vec<EntityId> {
        Vec::new()
    }

    fn equipment(&self, entity: EntityId) -> Option<EquipmentSnapshot> {
        panic!("equipment of {entity} is unreadable")
    }
}

/// Hook invocation as seen by a [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub hook: HookKind,
    pub enchantment: String,
    pub entity: EntityId,
    pub level: u32,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// Enchantment that logs every hook into a shared call log.
pub struct Recorder {
    name: String,
    log: CallLog,
    failing: bool,
    panicking: bool,
    bonus: f64,
}

impl Recorder {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: Arc::clone(log),
            failing: false,
            panicking: false,
            bonus: 0.0,
        }
    }

    /// Every hook records its call and then fails.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every hook records its call and then panics.
    pub fn panicking(mut self) -> Self {
        self.panicking = true;
        self
    }

    /// Adds `bonus * level` damage on attack.
    pub fn with_bonus(mut self, bonus: f64) -> Self {
        self.bonus = bonus;
        self
    }

    fn record(&self, hook: HookKind, entity: EntityId, level: u32) -> HookResult {
        self.log.lock().unwrap().push(Call {
            hook,
            enchantment: self.name.clone(),
            entity,
            level,
        });
        if self.panicking {
            panic!("{} blew up during {hook}", self.name);
        }
        if self.failing {
            Err(HookError::new(format!("{} refused {hook}", self.name)))
        } else {
            Ok(())
        }
    }
}

impl Enchantment for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn natural_targets(&self) -> &[String] {
        &[]
    }

    fn on_attack(
        &self,
        attacker: EntityId,
        _target: EntityId,
        level: u32,
        event: &mut DamageEvent,
    ) -> HookResult {
        event.damage += self.bonus * f64::from(level);
        self.record(HookKind::Attack, attacker, level)
    }

    fn on_defense(
        &self,
        wearer: EntityId,
        _attacker: Option<EntityId>,
        level: u32,
        _event: &mut DamageEvent,
    ) -> HookResult {
        self.record(HookKind::Defense, wearer, level)
    }

    fn on_equip(&self, wearer: EntityId, level: u32) -> HookResult {
        self.record(HookKind::Equip, wearer, level)
    }

    fn on_unequip(&self, wearer: EntityId, level: u32) -> HookResult {
        self.record(HookKind::Unequip, wearer, level)
    }
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub fn take_calls(log: &CallLog) -> Vec<Call> {
    std::mem::take(&mut *log.lock().unwrap())
}
