//! Forwards host events into enchantment hooks.
//!
//! The host calls one method per event with the item(s) involved. The
//! dispatcher resolves which enchantments those items carry and invokes the
//! matching hook on each, in canonical name order. A failing or panicking
//! hook is logged and the rest still run.

use enchant_core::{
    AppliedEnchantments, BlockEvent, DamageEvent, EquipmentSnapshot, HookError, HookKind,
    HookResult, InteractEvent, LoreHolder, guard,
};
use tracing::error;

use crate::api::RegistryHandle;

/// One hook that returned an error during dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchFailure {
    pub hook: HookKind,
    pub enchantment: String,
    pub error: HookError,
}

/// Outcome of dispatching one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Hooks invoked, failed ones included.
    pub fired: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    fn record(&mut self, hook: HookKind, enchantment: &str, result: HookResult) {
        self.fired += 1;
        if let Err(error) = result {
            error!(
                target: "enchant::hooks",
                hook = %hook,
                enchantment,
                error = %error,
                "Enchantment hook failed, continuing"
            );
            self.failures.push(DispatchFailure {
                hook,
                enchantment: enchantment.to_string(),
                error,
            });
        }
    }
}

/// Routes attack, defense, tool and interact events to enchantment hooks.
#[derive(Clone)]
pub struct EventDispatcher {
    registry: RegistryHandle,
}

impl EventDispatcher {
    pub fn new(registry: RegistryHandle) -> Self {
        Self { registry }
    }

    /// Enchantments currently applied to `item`.
    ///
    /// The registry lock is released before this returns, so hooks invoked
    /// on the result may use the registry themselves.
    pub fn resolve(&self, item: &dyn LoreHolder) -> AppliedEnchantments {
        self.registry.resolve(item)
    }

    /// The attacker hit the victim while holding `weapon`.
    ///
    /// Events without an attacking entity are ignored.
    pub fn on_attack(&self, weapon: &dyn LoreHolder, event: &mut DamageEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(attacker) = event.attacker else {
            return report;
        };
        let victim = event.victim;
        for applied in &self.resolve(weapon) {
            let result =
                guard(|| applied.definition.on_attack(attacker, victim, applied.level, event));
            report.record(HookKind::Attack, applied.name(), result);
        }
        report
    }

    /// The victim took damage while wearing `armor`.
    ///
    /// Every worn piece contributes its enchantments, in slot order.
    pub fn on_defense(
        &self,
        armor: &EquipmentSnapshot,
        event: &mut DamageEvent,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        let wearer = event.victim;
        let attacker = event.attacker;
        for (_, item) in armor.iter() {
            for applied in &self.resolve(item) {
                let result =
                    guard(|| applied.definition.on_defense(wearer, attacker, applied.level, event));
                report.record(HookKind::Defense, applied.name(), result);
            }
        }
        report
    }

    /// The player damaged or broke a block holding `tool`.
    pub fn on_tool(&self, tool: &dyn LoreHolder, event: &mut BlockEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        let player = event.player;
        for applied in &self.resolve(tool) {
            let result = guard(|| applied.definition.on_tool(player, applied.level, event));
            report.record(HookKind::Tool, applied.name(), result);
        }
        report
    }

    /// The player clicked holding `held`.
    pub fn on_interact(&self, held: &dyn LoreHolder, event: &mut InteractEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        let player = event.player;
        for applied in &self.resolve(held) {
            let result = guard(|| applied.definition.on_interact(player, applied.level, event));
            report.record(HookKind::Interact, applied.name(), result);
        }
        report
    }
}
