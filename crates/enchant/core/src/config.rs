/// Enchantment system configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnchantConfig {
    /// Period between equipment polls, in milliseconds.
    pub equip_poll_interval_ms: u64,
    /// Presentation prefix the host puts in front of new lore lines.
    /// Must consist of formatting codes so the parser strips it.
    pub lore_prefix: String,
    /// Register adapters for the host's built-in enchantments.
    pub native_enchantments: bool,
    /// Built-in enchantments to leave unregistered.
    pub disabled: Vec<String>,
}

impl EnchantConfig {
    // ===== runtime-tunable defaults =====
    /// One host tick.
    pub const DEFAULT_EQUIP_POLL_INTERVAL_MS: u64 = 50;
    pub const DEFAULT_LORE_PREFIX: &'static str = "§7";

    pub fn new() -> Self {
        Self {
            equip_poll_interval_ms: Self::DEFAULT_EQUIP_POLL_INTERVAL_MS,
            lore_prefix: Self::DEFAULT_LORE_PREFIX.to_string(),
            native_enchantments: true,
            disabled: Vec::new(),
        }
    }

    pub fn with_poll_interval_ms(equip_poll_interval_ms: u64) -> Self {
        Self {
            equip_poll_interval_ms,
            ..Self::new()
        }
    }

    /// Returns true if `name` is listed in [`disabled`](Self::disabled), ignoring case.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled
            .iter()
            .any(|entry| crate::parser::eq_ignore_case(entry.trim(), name.trim()))
    }

    /// Applies the presentation prefix to a codec line.
    pub fn present(&self, line: &str) -> String {
        format!("{}{}", self.lore_prefix, line)
    }
}

impl Default for EnchantConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn presented_lines_still_parse() {
        let config = EnchantConfig::default();
        let line = config.present("Lifesteal IV");
        assert_eq!(line, "§7Lifesteal IV");
        assert_eq!(parser::parse(&line), Some(("Lifesteal".to_string(), 4)));
    }

    #[test]
    fn disabled_lookup_ignores_case() {
        let config = EnchantConfig {
            disabled: vec!["Fire Aspect".into()],
            ..EnchantConfig::default()
        };
        assert!(config.is_disabled("FIRE ASPECT"));
        assert!(!config.is_disabled("Sharpness"));
    }
}
