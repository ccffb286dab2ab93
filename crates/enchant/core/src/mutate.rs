//! Adding and removing enchantments on an item's lore.
//!
//! Per item and enchantment name there are two states, absent and
//! `present(level)`. [`add`] only ever moves to a higher level and [`remove`]
//! always moves to absent. Lines the codec does not recognize are preserved
//! in their original order.

use crate::codec::{self, encode_line};
use crate::enchantment::Enchantment;
use crate::item::LoreHolder;
use crate::numeral;
use crate::parser;
use crate::registry::EnchantmentRegistry;

/// Adds `definition` at `level`, or upgrades an existing lower level.
///
/// The new line goes to the front of the lore. Returns true if the lore was
/// rewritten; requesting a level at or below the current one, level 0, or an
/// item without metadata leaves the item unchanged.
pub fn add(item: &mut dyn LoreHolder, definition: &dyn Enchantment, level: u32) -> bool {
    add_with_prefix(item, definition, level, "")
}

/// [`add`], writing the new line behind a presentation `prefix`.
///
/// The prefix must consist of formatting codes (`§7`) so that the line still
/// parses; see [`parser::strip_formatting`].
pub fn add_with_prefix(
    item: &mut dyn LoreHolder,
    definition: &dyn Enchantment,
    level: u32,
    prefix: &str,
) -> bool {
    if level == 0 || !item.supports_lore() {
        return false;
    }
    let level = numeral::clamp_level(level);
    let name = definition.name();
    let lore = item.lore().map(<[String]>::to_vec).unwrap_or_default();

    if lore
        .iter()
        .any(|line| parser::names(line, name) && parser::parse_level(line) >= level)
    {
        return false;
    }

    let mut updated = Vec::with_capacity(lore.len() + 1);
    updated.push(format!("{prefix}{}", encode_line(name, level)));
    updated.extend(lore.into_iter().filter(|line| !parser::names(line, name)));
    item.set_lore(updated)
}

/// Removes every line naming `definition`. Returns true if anything was removed.
pub fn remove(item: &mut dyn LoreHolder, definition: &dyn Enchantment) -> bool {
    let name = definition.name();
    retain(item, |line| !parser::names(line, name))
}

/// Removes every line that decodes to a registered enchantment.
///
/// Unrelated lines are kept. Running it twice has the same effect as once.
pub fn remove_all(registry: &EnchantmentRegistry, item: &mut dyn LoreHolder) -> bool {
    retain(item, |line| codec::decode_line(registry, line).is_none())
}

/// Loose presence check: some line contains `name` and ends in a valid numeral.
///
/// Unlike [`codec::decode`] this neither consults the registry nor requires
/// an exact name match.
pub fn has(item: &dyn LoreHolder, name: &str) -> bool {
    item.lore().is_some_and(|lines| {
        lines
            .iter()
            .any(|line| line.contains(name) && parser::parse_level(line) > 0)
    })
}

/// Current level of `definition` on `item`, 0 if absent.
///
/// With duplicate lines from outside edits the highest level is reported.
pub fn level_of(item: &dyn LoreHolder, definition: &dyn Enchantment) -> u32 {
    let name = definition.name();
    item.lore()
        .into_iter()
        .flatten()
        .filter(|line| parser::names(line, name))
        .map(|line| parser::parse_level(line))
        .max()
        .unwrap_or(0)
}

/// Returns true if `definition` naturally applies to `item`'s kind.
pub fn can_enchant_onto(definition: &dyn Enchantment, item: &dyn LoreHolder) -> bool {
    definition.can_enchant_onto(item)
}

fn retain(item: &mut dyn LoreHolder, mut keep: impl FnMut(&str) -> bool) -> bool {
    let Some(lore) = item.lore() else {
        return false;
    };
    let before = lore.len();
    let kept: Vec<String> = lore.iter().filter(|line| keep(line.as_str())).cloned().collect();
    if kept.len() == before {
        return false;
    }
    item.set_lore(kept)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::enchantment::SimpleEnchantment;
    use crate::item::ItemStack;

    fn sword() -> ItemStack {
        ItemStack::new("diamond_sword").with_lore(["Forged in fire", "Property of Steve"])
    }

    fn lore(item: &ItemStack) -> Vec<&str> {
        item.lore()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn add_puts_new_line_first() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = sword();
        assert!(add(&mut item, &def, 2));
        assert_eq!(lore(&item), ["Lifesteal II", "Forged in fire", "Property of Steve"]);
    }

    #[test]
    fn add_never_downgrades() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut once = sword();
        add(&mut once, &def, 5);

        let mut twice = once.clone();
        assert!(!add(&mut twice, &def, 3));
        assert!(!add(&mut twice, &def, 5));
        assert_eq!(once, twice);
    }

    #[test]
    fn upgrade_replaces_existing_line() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = sword();
        add(&mut item, &def, 2);
        let other = SimpleEnchantment::new("Venom", &[]);
        add(&mut item, &other, 1);

        assert!(add(&mut item, &def, 7));
        assert_eq!(
            lore(&item),
            ["Lifesteal VII", "Venom I", "Forged in fire", "Property of Steve"]
        );
        assert_eq!(level_of(&item, &def), 7);
    }

    #[test]
    fn upgrade_matches_existing_line_ignoring_case_and_color() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = ItemStack::new("iron_sword").with_lore(["§7LIFESTEAL I", "Notes"]);
        assert!(add(&mut item, &def, 3));
        assert_eq!(lore(&item), ["Lifesteal III", "Notes"]);
    }

    #[test]
    fn prefixed_lines_are_still_recognized() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = sword();
        assert!(add_with_prefix(&mut item, &def, 1, "§7"));
        assert_eq!(lore(&item)[0], "§7Lifesteal I");
        assert_eq!(level_of(&item, &def), 1);

        assert!(add_with_prefix(&mut item, &def, 2, "§7"));
        assert_eq!(lore(&item), ["§7Lifesteal II", "Forged in fire", "Property of Steve"]);
        assert!(remove(&mut item, &def));
    }

    #[test]
    fn add_collapses_tampered_duplicates() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = ItemStack::new("iron_sword").with_lore(["Lifesteal I", "Lifesteal II"]);
        assert!(add(&mut item, &def, 4));
        assert_eq!(lore(&item), ["Lifesteal IV"]);
    }

    #[test]
    fn add_ignores_level_zero_and_bare_items() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = sword();
        assert!(!add(&mut item, &def, 0));
        assert_eq!(lore(&item), ["Forged in fire", "Property of Steve"]);

        let mut air = ItemStack::air();
        assert!(!add(&mut air, &def, 1));
        assert_eq!(air, ItemStack::air());
    }

    #[test]
    fn add_clamps_oversized_levels() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = ItemStack::new("stick");
        assert!(add(&mut item, &def, 10_000));
        assert_eq!(level_of(&item, &def), numeral::MAX_LEVEL);
        assert!(!add(&mut item, &def, 20_000));
    }

    #[test]
    fn remove_is_exact() {
        let sharp = SimpleEnchantment::new("Sharp", &[]);
        let sharpness = SimpleEnchantment::new("Sharpness", &[]);
        let mut item = sword();
        add(&mut item, &sharpness, 3);
        add(&mut item, &sharp, 4);

        assert!(remove(&mut item, &sharp));
        assert_eq!(lore(&item), ["Sharpness III", "Forged in fire", "Property of Steve"]);
        assert!(!remove(&mut item, &sharp));

        assert!(remove(&mut item, &sharpness));
        assert_eq!(lore(&item), ["Forged in fire", "Property of Steve"]);
    }

    #[test]
    fn remove_on_missing_lore_is_noop() {
        let def = SimpleEnchantment::new("Lifesteal", &[]);
        let mut item = ItemStack::new("stick");
        assert!(!remove(&mut item, &def));
        let mut air = ItemStack::air();
        assert!(!remove(&mut air, &def));
    }

    #[test]
    fn remove_all_keeps_unrelated_lines_and_is_idempotent() {
        let mut registry = EnchantmentRegistry::new();
        registry.register(Arc::new(SimpleEnchantment::new("Lifesteal", &[])));
        registry.register(Arc::new(SimpleEnchantment::new("Venom", &[])));

        let mut item = ItemStack::new("iron_sword").with_lore([
            "Venom II",
            "Forged in fire",
            "Lifesteal I",
            "Unregistered III",
        ]);
        assert!(remove_all(&registry, &mut item));
        assert_eq!(lore(&item), ["Forged in fire", "Unregistered III"]);

        let once = item.clone();
        assert!(!remove_all(&registry, &mut item));
        assert_eq!(item, once);
    }

    #[test]
    fn has_is_a_loose_substring_check() {
        let item = ItemStack::new("bow").with_lore(["Sharpness II", "Plain text"]);
        assert!(has(&item, "Sharpness"));
        assert!(has(&item, "Sharp"));
        assert!(!has(&item, "sharpness"));
        assert!(!has(&item, "Plain"));
        assert!(!has(&ItemStack::air(), "Sharpness"));
    }

    #[test]
    fn target_check_uses_item_kind() {
        let def = SimpleEnchantment::new("Lifesteal", &["DIAMOND_SWORD"]);
        assert!(can_enchant_onto(&def, &sword()));
        assert!(!can_enchant_onto(&def, &ItemStack::new("bow")));
    }
}
