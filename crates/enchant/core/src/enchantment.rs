//! The enchantment contract and the host event payloads passed to its hooks.
//!
//! An [`Enchantment`] is a behavioral unit supplied by extension code. Every
//! hook has a no-op default so an implementation opts into only the trigger
//! contexts it cares about.

use crate::error::HookResult;
use crate::item::LoreHolder;
use crate::parser;

/// Stable identity of a host entity (player or mob).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u64);

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// World position of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// What caused a damage event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageCause {
    /// Melee hit from another entity.
    EntityAttack,
    /// Arrow, trident or other projectile.
    Projectile,
    /// Contact with a block (cactus, magma).
    Block,
    /// Fall, fire, drowning and the rest.
    Other,
}

/// Damage dealt to an entity. Hooks may change `damage` or cancel the event.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageEvent {
    pub attacker: Option<EntityId>,
    pub victim: EntityId,
    pub cause: DamageCause,
    pub damage: f64,
    pub cancelled: bool,
}

impl DamageEvent {
    /// Damage from one entity striking another.
    pub fn attack(attacker: EntityId, victim: EntityId, damage: f64) -> Self {
        Self {
            attacker: Some(attacker),
            victim,
            cause: DamageCause::EntityAttack,
            damage,
            cancelled: false,
        }
    }

    /// Damage with no attacking entity.
    pub fn environmental(victim: EntityId, cause: DamageCause, damage: f64) -> Self {
        Self {
            attacker: None,
            victim,
            cause,
            damage,
            cancelled: false,
        }
    }
}

/// Stage of block interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BlockPhase {
    /// The player started hitting the block.
    Damage,
    /// The block is about to break.
    Break,
}

/// A player damaging or breaking a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockEvent {
    pub player: EntityId,
    pub position: BlockPos,
    pub block_kind: String,
    pub phase: BlockPhase,
    pub cancelled: bool,
}

/// Kind of click that produced an interact event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InteractAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
    Physical,
}

/// A player clicking with an item in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractEvent {
    pub player: EntityId,
    pub action: InteractAction,
    pub cancelled: bool,
}

/// Trigger context of a hook, used for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HookKind {
    Attack,
    Defense,
    Tool,
    Interact,
    Equip,
    Unequip,
}

/// A custom enchantment definition.
///
/// Implementations are registered once into an
/// [`EnchantmentRegistry`](crate::EnchantmentRegistry) and shared read-only
/// afterwards, hence the `Send + Sync` bound.
pub trait Enchantment: Send + Sync {
    /// Display name, unique across the registry ignoring case.
    fn name(&self) -> &str;

    /// Item kinds this enchantment normally applies to (e.g. `diamond_sword`).
    fn natural_targets(&self) -> &[String];

    /// Rarity signal; lower is rarer.
    fn weight(&self) -> u32 {
        10
    }

    /// Disabled enchantments are refused by the registry.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Highest level this enchantment reaches naturally.
    fn max_level(&self) -> u32 {
        1
    }

    /// Level to apply for `exp_level` experience spent at an enchanting table.
    ///
    /// Values below 1 mean "do not apply".
    fn enchantment_level(&self, _exp_level: u32) -> u32 {
        0
    }

    /// True for adapters over the host's built-in enchantments.
    fn is_native(&self) -> bool {
        false
    }

    /// Returns true if `item`'s kind is one of [`natural_targets`](Self::natural_targets).
    fn can_enchant_onto(&self, item: &dyn LoreHolder) -> bool {
        self.natural_targets()
            .iter()
            .any(|target| parser::eq_ignore_case(target, item.kind()))
    }

    /// The holder struck `target` with an item carrying this enchantment.
    fn on_attack(
        &self,
        _attacker: EntityId,
        _target: EntityId,
        _level: u32,
        _event: &mut DamageEvent,
    ) -> HookResult {
        Ok(())
    }

    /// The holder took damage while wearing an item carrying this enchantment.
    /// `attacker` is `None` for environmental damage.
    fn on_defense(
        &self,
        _wearer: EntityId,
        _attacker: Option<EntityId>,
        _level: u32,
        _event: &mut DamageEvent,
    ) -> HookResult {
        Ok(())
    }

    /// The holder damaged or broke a block with the enchanted tool.
    fn on_tool(&self, _player: EntityId, _level: u32, _event: &mut BlockEvent) -> HookResult {
        Ok(())
    }

    /// The holder clicked with the enchanted item.
    fn on_interact(
        &self,
        _player: EntityId,
        _level: u32,
        _event: &mut InteractEvent,
    ) -> HookResult {
        Ok(())
    }

    /// An item carrying this enchantment was put on.
    fn on_equip(&self, _wearer: EntityId, _level: u32) -> HookResult {
        Ok(())
    }

    /// An item carrying this enchantment was taken off.
    fn on_unequip(&self, _wearer: EntityId, _level: u32) -> HookResult {
        Ok(())
    }
}

impl core::fmt::Debug for dyn Enchantment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Enchantment")
            .field("name", &self.name())
            .field("weight", &self.weight())
            .field("native", &self.is_native())
            .finish()
    }
}

/// Plain data enchantment with no behavior, useful for lore-only effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleEnchantment {
    name: String,
    natural_targets: Vec<String>,
    weight: u32,
    max_level: u32,
    enabled: bool,
}

impl SimpleEnchantment {
    pub fn new(name: impl Into<String>, natural_targets: &[&str]) -> Self {
        Self {
            name: name.into(),
            natural_targets: natural_targets.iter().map(|s| s.to_string()).collect(),
            weight: 10,
            max_level: 1,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight.max(1);
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level.max(1);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Enchantment for SimpleEnchantment {
    fn name(&self) -> &str {
        &self.name
    }

    fn natural_targets(&self) -> &[String] {
        &self.natural_targets
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn max_level(&self) -> u32 {
        self.max_level
    }
}
