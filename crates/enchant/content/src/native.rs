//! Adapters exposing the host's built-in enchantments through [`Enchantment`].
//!
//! Built-ins live in the host's own item data, not in lore, so these adapters
//! carry no behavior. They exist so that weight, level range and natural
//! targets of built-ins can be queried alongside custom enchantments.

use std::sync::Arc;

use enchant_core::{EnchantConfig, Enchantment, EnchantmentRegistry, RegistryError};
use strum::IntoEnumIterator;

const HELMETS: &[&str] = &[
    "leather_helmet",
    "chainmail_helmet",
    "iron_helmet",
    "golden_helmet",
    "diamond_helmet",
];
const CHESTPLATES: &[&str] = &[
    "leather_chestplate",
    "chainmail_chestplate",
    "iron_chestplate",
    "golden_chestplate",
    "diamond_chestplate",
];
const LEGGINGS: &[&str] = &[
    "leather_leggings",
    "chainmail_leggings",
    "iron_leggings",
    "golden_leggings",
    "diamond_leggings",
];
const BOOTS: &[&str] = &[
    "leather_boots",
    "chainmail_boots",
    "iron_boots",
    "golden_boots",
    "diamond_boots",
];
const SWORDS: &[&str] = &[
    "wooden_sword",
    "stone_sword",
    "iron_sword",
    "golden_sword",
    "diamond_sword",
];
const AXES: &[&str] = &[
    "wooden_axe",
    "stone_axe",
    "iron_axe",
    "golden_axe",
    "diamond_axe",
];
const PICKAXES: &[&str] = &[
    "wooden_pickaxe",
    "stone_pickaxe",
    "iron_pickaxe",
    "golden_pickaxe",
    "diamond_pickaxe",
];
const SHOVELS: &[&str] = &[
    "wooden_shovel",
    "stone_shovel",
    "iron_shovel",
    "golden_shovel",
    "diamond_shovel",
];
const BOWS: &[&str] = &["bow"];

/// Built-in enchantments known to the host.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum NativeKind {
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,
    Sharpness,
    Smite,
    #[strum(serialize = "Bane of Arthropods")]
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    Power,
    Punch,
    Flame,
    Infinity,
}

impl NativeKind {
    /// Table weight; lower is rarer.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Protection | Self::Sharpness | Self::Efficiency | Self::Power => 10,
            Self::FireProtection
            | Self::FeatherFalling
            | Self::ProjectileProtection
            | Self::Smite
            | Self::BaneOfArthropods
            | Self::Knockback
            | Self::Unbreaking => 5,
            Self::BlastProtection
            | Self::Respiration
            | Self::AquaAffinity
            | Self::FireAspect
            | Self::Looting
            | Self::Fortune
            | Self::Punch
            | Self::Flame => 2,
            Self::Thorns | Self::SilkTouch | Self::Infinity => 1,
        }
    }

    pub const fn max_level(self) -> u32 {
        match self {
            Self::Sharpness
            | Self::Smite
            | Self::BaneOfArthropods
            | Self::Efficiency
            | Self::Power => 5,
            Self::Protection
            | Self::FireProtection
            | Self::FeatherFalling
            | Self::BlastProtection
            | Self::ProjectileProtection => 4,
            Self::Respiration | Self::Thorns | Self::Looting | Self::Unbreaking | Self::Fortune => 3,
            Self::Knockback | Self::FireAspect | Self::Punch => 2,
            Self::AquaAffinity | Self::SilkTouch | Self::Flame | Self::Infinity => 1,
        }
    }

    /// Item kinds this enchantment appears on at an enchanting table.
    pub fn natural_targets(self) -> Vec<&'static str> {
        let groups: &[&[&str]] = match self {
            Self::Protection
            | Self::FireProtection
            | Self::BlastProtection
            | Self::ProjectileProtection => &[HELMETS, CHESTPLATES, LEGGINGS, BOOTS],
            Self::FeatherFalling => &[BOOTS],
            Self::Respiration | Self::AquaAffinity => &[HELMETS],
            Self::Thorns => &[CHESTPLATES],
            Self::Sharpness | Self::Smite | Self::BaneOfArthropods => &[SWORDS, AXES],
            Self::Knockback | Self::FireAspect | Self::Looting => &[SWORDS],
            Self::Efficiency | Self::SilkTouch | Self::Fortune => &[PICKAXES, SHOVELS, AXES],
            Self::Unbreaking => &[
                HELMETS,
                CHESTPLATES,
                LEGGINGS,
                BOOTS,
                SWORDS,
                AXES,
                PICKAXES,
                SHOVELS,
                BOWS,
            ],
            Self::Power | Self::Punch | Self::Flame | Self::Infinity => &[BOWS],
        };
        groups.iter().flat_map(|group| group.iter().copied()).collect()
    }
}

/// [`Enchantment`] adapter over a [`NativeKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeEnchantment {
    kind: NativeKind,
    name: String,
    natural_targets: Vec<String>,
    enabled: bool,
}

impl NativeEnchantment {
    pub fn new(kind: NativeKind) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            natural_targets: kind.natural_targets().into_iter().map(String::from).collect(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn kind(&self) -> NativeKind {
        self.kind
    }

    /// Adapters for every built-in, disabled where the config says so.
    pub fn all(config: &EnchantConfig) -> Vec<Self> {
        NativeKind::iter()
            .map(|kind| {
                let adapter = Self::new(kind);
                let enabled = !config.is_disabled(&adapter.name);
                adapter.with_enabled(enabled)
            })
            .collect()
    }
}

impl Enchantment for NativeEnchantment {
    fn name(&self) -> &str {
        &self.name
    }

    fn natural_targets(&self) -> &[String] {
        &self.natural_targets
    }

    fn weight(&self) -> u32 {
        self.kind.weight()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn max_level(&self) -> u32 {
        self.kind.max_level()
    }

    /// Spreads `1..=max_level` evenly over 1–30 experience levels.
    fn enchantment_level(&self, exp_level: u32) -> u32 {
        if exp_level == 0 {
            return 0;
        }
        let max = self.kind.max_level();
        (exp_level.min(30) * max).div_ceil(30).clamp(1, max)
    }

    fn is_native(&self) -> bool {
        true
    }
}

/// Registers every enabled built-in adapter.
///
/// Returns the names that were refused with the reason, so the caller can
/// report them.
pub fn register_all(
    registry: &mut EnchantmentRegistry,
    config: &EnchantConfig,
) -> Vec<RegistryError> {
    NativeEnchantment::all(config)
        .into_iter()
        .filter_map(|adapter| registry.try_register(Arc::new(adapter)).err())
        .collect()
}
