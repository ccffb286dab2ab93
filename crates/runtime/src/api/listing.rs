//! Text for the enchantment listing command.

use enchant_core::EnchantmentRegistry;

/// Lists registered custom enchantments, skipping built-in adapters.
///
/// Names appear in registry order (sorted by canonical name). An empty list
/// renders as `Registered enchantments: none`.
pub fn enchant_list(registry: &EnchantmentRegistry) -> String {
    let names: Vec<String> = registry
        .list_all()
        .iter()
        .filter(|def| !def.is_native())
        .map(|def| def.name().to_string())
        .collect();

    if names.is_empty() {
        "Registered enchantments: none".to_string()
    } else {
        format!("Registered enchantments: {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use enchant_content::{NativeEnchantment, NativeKind};
    use enchant_core::SimpleEnchantment;

    use super::*;

    #[test]
    fn lists_only_custom_enchantments() {
        let mut registry = EnchantmentRegistry::new();
        assert_eq!(enchant_list(&registry), "Registered enchantments: none");

        registry.register(Arc::new(NativeEnchantment::new(NativeKind::Sharpness)));
        assert_eq!(enchant_list(&registry), "Registered enchantments: none");

        registry.register(Arc::new(SimpleEnchantment::new("Venom", &[])));
        registry.register(Arc::new(SimpleEnchantment::new("Lifesteal", &[])));
        assert_eq!(
            enchant_list(&registry),
            "Registered enchantments: Lifesteal, Venom"
        );
    }
}
