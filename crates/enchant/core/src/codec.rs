//! Lore ⇄ applied enchantment conversion.
//!
//! A line is recognized as an enchantment only when its parsed name matches a
//! registered definition exactly (ignoring case) and its level is at least 1.
//! Everything else in the lore is left alone.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::enchantment::Enchantment;
use crate::item::LoreHolder;
use crate::numeral;
use crate::parser;
use crate::registry::{EnchantmentRegistry, canonical_name};

/// A definition recovered from an item together with its level.
#[derive(Clone, Debug)]
pub struct AppliedEnchantment {
    pub definition: Arc<dyn Enchantment>,
    pub level: u32,
}

impl AppliedEnchantment {
    pub fn name(&self) -> &str {
        self.definition.name()
    }
}

/// Enchantments decoded from one item, keyed by canonical name.
#[derive(Clone, Debug, Default)]
pub struct AppliedEnchantments {
    entries: BTreeMap<String, AppliedEnchantment>,
}

impl AppliedEnchantments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `definition`.
    pub fn insert(&mut self, definition: Arc<dyn Enchantment>, level: u32) {
        let key = canonical_name(definition.name());
        self.entries
            .insert(key, AppliedEnchantment { definition, level });
    }

    /// Level of the named enchantment, if applied.
    pub fn level(&self, name: &str) -> Option<u32> {
        self.entries.get(&canonical_name(name)).map(|e| e.level)
    }

    pub fn get(&self, name: &str) -> Option<&AppliedEnchantment> {
        self.entries.get(&canonical_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical_name(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppliedEnchantment> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for AppliedEnchantments {
    type Item = AppliedEnchantment;
    type IntoIter = std::collections::btree_map::IntoValues<String, AppliedEnchantment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a AppliedEnchantments {
    type Item = &'a AppliedEnchantment;
    type IntoIter = std::collections::btree_map::Values<'a, String, AppliedEnchantment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Renders the lore line for `name` at `level`.
///
/// Presentation prefixes (colors) are added by the host, not here.
pub fn encode_line(name: &str, level: u32) -> String {
    format!("{} {}", name.trim(), numeral::encode(level))
}

/// Decodes a single line against the registry.
pub fn decode_line(
    registry: &EnchantmentRegistry,
    line: &str,
) -> Option<(Arc<dyn Enchantment>, u32)> {
    let (name, level) = parser::parse(line)?;
    let definition = registry.lookup(&name)?;
    Some((definition, level))
}

/// Decodes every recognized enchantment in `lines`.
///
/// Unparseable lines, unknown names and zero levels are skipped. When a name
/// appears more than once the later line wins.
pub fn decode<I, S>(registry: &EnchantmentRegistry, lines: I) -> AppliedEnchantments
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut applied = AppliedEnchantments::new();
    for line in lines {
        if let Some((definition, level)) = decode_line(registry, line.as_ref()) {
            applied.insert(definition, level);
        }
    }
    applied
}

/// Enchantments currently applied to `item`.
pub fn resolve(registry: &EnchantmentRegistry, item: &dyn LoreHolder) -> AppliedEnchantments {
    match item.lore() {
        Some(lines) => decode(registry, lines),
        None => AppliedEnchantments::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchantment::SimpleEnchantment;
    use crate::item::ItemStack;

    fn registry(names: &[&str]) -> EnchantmentRegistry {
        let mut registry = EnchantmentRegistry::new();
        for name in names {
            registry.register(Arc::new(SimpleEnchantment::new(*name, &[])));
        }
        registry
    }

    #[test]
    fn encoded_line_decodes_to_same_level() {
        let registry = registry(&["Lifesteal", "Frost Walker"]);
        for level in [1, 4, 10, 49, numeral::MAX_LEVEL] {
            let applied = decode(&registry, [encode_line("Lifesteal", level)]);
            assert_eq!(applied.len(), 1);
            assert_eq!(applied.level("lifesteal"), Some(level));
        }

        let applied = decode(&registry, [encode_line("Frost Walker", 2)]);
        assert_eq!(applied.level("FROST WALKER"), Some(2));
    }

    #[test]
    fn unrelated_and_unknown_lines_are_skipped() {
        let registry = registry(&["Lifesteal"]);
        let applied = decode(
            &registry,
            [
                "A blade of legend",
                "Lifesteal 3",
                "Unknown II",
                "Lifesteal",
                "§7Lifesteal II",
            ],
        );
        assert_eq!(applied.len(), 1);
        assert_eq!(applied.level("Lifesteal"), Some(2));
    }

    #[test]
    fn substring_names_do_not_collide() {
        let registry = registry(&["Sharp", "Sharpness"]);

        let applied = decode(&registry, ["Sharp IV"]);
        assert_eq!(applied.level("Sharp"), Some(4));
        assert!(!applied.contains("Sharpness"));

        let applied = decode(&registry, ["Sharpness II"]);
        assert_eq!(applied.level("Sharpness"), Some(2));
        assert!(!applied.contains("Sharp"));

        let only_sharp = self::registry(&["Sharp"]);
        assert!(decode(&only_sharp, ["Sharpness II"]).is_empty());
    }

    #[test]
    fn later_duplicates_win() {
        let registry = registry(&["Lifesteal"]);
        let applied = decode(&registry, ["Lifesteal II", "lifesteal V"]);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied.level("Lifesteal"), Some(5));
    }

    #[test]
    fn items_without_lore_resolve_empty() {
        let registry = registry(&["Lifesteal"]);
        assert!(resolve(&registry, &ItemStack::air()).is_empty());
        assert!(resolve(&registry, &ItemStack::new("stick")).is_empty());

        let sword = ItemStack::new("diamond_sword").with_lore(["Lifesteal III"]);
        assert_eq!(resolve(&registry, &sword).level("Lifesteal"), Some(3));
    }
}
