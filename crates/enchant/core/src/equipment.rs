//! Worn equipment slots and the per-entity snapshot taken each poll.

use strum::{EnumCount, IntoEnumIterator};

use crate::item::ItemStack;

/// Armor slots tracked for equip/unequip effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

impl EquipmentSlot {
    /// Position of this slot inside an [`EquipmentSnapshot`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Items worn by one entity at one moment, one per slot.
///
/// Empty slots hold [`ItemStack::air`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSnapshot {
    slots: [ItemStack; EquipmentSlot::COUNT],
}

impl EquipmentSnapshot {
    /// A snapshot with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| ItemStack::air()),
        }
    }

    /// Builds a snapshot in slot order (head, chest, legs, feet).
    pub fn from_slots(slots: [ItemStack; EquipmentSlot::COUNT]) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn with(mut self, slot: EquipmentSlot, item: ItemStack) -> Self {
        self.set(slot, item);
        self
    }

    pub fn get(&self, slot: EquipmentSlot) -> &ItemStack {
        &self.slots[slot.index()]
    }

    /// Puts `item` into `slot`, returning what was there.
    pub fn set(&mut self, slot: EquipmentSlot, item: ItemStack) -> ItemStack {
        core::mem::replace(&mut self.slots[slot.index()], item)
    }

    /// Iterates slots with their items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemStack)> {
        EquipmentSlot::iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Slots whose item differs from `previous`.
    pub fn changed_slots<'a>(
        &'a self,
        previous: &'a EquipmentSnapshot,
    ) -> impl Iterator<Item = EquipmentSlot> + 'a {
        EquipmentSlot::iter().filter(move |slot| self.get(*slot) != previous.get(*slot))
    }
}

impl Default for EquipmentSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_follow_declaration_order() {
        let indices: Vec<_> = EquipmentSlot::iter().map(EquipmentSlot::index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
        assert_eq!(EquipmentSlot::Chest.to_string(), "chest");
    }

    #[test]
    fn changed_slots_compare_positionally() {
        let helmet = ItemStack::new("iron_helmet");
        let before = EquipmentSnapshot::empty().with(EquipmentSlot::Head, helmet.clone());
        let after = before
            .clone()
            .with(EquipmentSlot::Feet, ItemStack::new("iron_boots"));

        let changed: Vec<_> = after.changed_slots(&before).collect();
        assert_eq!(changed, [EquipmentSlot::Feet]);
        assert_eq!(before.changed_slots(&before).count(), 0);
    }
}
