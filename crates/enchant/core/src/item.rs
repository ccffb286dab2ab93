//! Host item model.
//!
//! The core never owns item storage. It reads and writes an item's lore
//! through [`LoreHolder`], which hosts implement over their own item type.
//! [`ItemStack`] is a ready-made implementation for hosts without one.

/// Item kind the host uses for an empty slot.
pub const AIR: &str = "air";

/// Access to an item's kind and ordered lore lines.
pub trait LoreHolder {
    /// Item type identifier (`diamond_sword`, `iron_helmet`).
    fn kind(&self) -> &str;

    /// Current lore lines, or `None` when the item has no metadata or no lore.
    fn lore(&self) -> Option<&[String]>;

    /// Replaces the lore. Returns false when the item cannot carry metadata,
    /// in which case nothing changes.
    fn set_lore(&mut self, lore: Vec<String>) -> bool;

    /// Whether [`set_lore`](Self::set_lore) can succeed.
    fn supports_lore(&self) -> bool {
        true
    }
}

/// Display metadata attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
}

/// A stack of items as the host hands it out.
///
/// `meta` is `None` for items that cannot carry metadata (empty slots).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub kind: String,
    pub amount: u32,
    pub meta: Option<ItemMeta>,
}

impl ItemStack {
    /// Creates a single item with empty metadata. Air never has metadata.
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let meta = (!kind.eq_ignore_ascii_case(AIR)).then(ItemMeta::default);
        Self {
            kind,
            amount: 1,
            meta,
        }
    }

    /// Creates an item that cannot carry metadata.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            amount: 1,
            meta: None,
        }
    }

    /// The empty-slot item.
    pub fn air() -> Self {
        Self::bare(AIR)
    }

    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        if let Some(meta) = self.meta.as_mut() {
            meta.display_name = Some(name.into());
        }
        self
    }

    /// Sets the lore lines if the item supports metadata.
    #[must_use]
    pub fn with_lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_lore(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_air(&self) -> bool {
        self.kind.eq_ignore_ascii_case(AIR)
    }
}

impl LoreHolder for ItemStack {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn lore(&self) -> Option<&[String]> {
        self.meta
            .as_ref()
            .filter(|meta| !meta.lore.is_empty())
            .map(|meta| meta.lore.as_slice())
    }

    fn set_lore(&mut self, lore: Vec<String>) -> bool {
        match self.meta.as_mut() {
            Some(meta) => {
                meta.lore = lore;
                true
            }
            None => false,
        }
    }

    fn supports_lore(&self) -> bool {
        self.meta.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_has_no_metadata() {
        let mut air = ItemStack::new("AIR");
        assert!(!air.supports_lore());
        assert!(!air.set_lore(vec!["Sharpness I".into()]));
        assert_eq!(air.lore(), None);
    }

    #[test]
    fn empty_lore_reads_as_absent() {
        let sword = ItemStack::new("diamond_sword");
        assert!(sword.supports_lore());
        assert_eq!(sword.lore(), None);

        let sword = sword.with_lore(["Forged in fire"]);
        assert_eq!(sword.lore().map(<[String]>::len), Some(1));
    }
}
