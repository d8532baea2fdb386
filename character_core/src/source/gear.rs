//! GearSource - Stats from equipped items

use crate::item::ItemRef;
use crate::source::StatSource;
use crate::types::{EquipmentSlot, StatKind};

/// Stats from an item sitting in a slot
///
/// Modifiers are tagged `"<item name> (<slot>)"`, so identically named items
/// in two slots are revoked independently.
#[derive(Debug, Clone)]
pub struct GearSource {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// The equipped item
    pub item: ItemRef,
    id: String,
}

impl GearSource {
    /// Create a new gear source
    pub fn new(slot: EquipmentSlot, item: ItemRef) -> Self {
        let id = format!("{} ({})", item.name(), slot);
        GearSource { slot, item, id }
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn bonuses(&self) -> Vec<(StatKind, i32)> {
        self.item.stat_bonuses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::fixtures::TestItem;
    use crate::stat_block::StatBlock;

    #[test]
    fn test_gear_source_id() {
        let sword = TestItem::gear("Iron Sword", &[EquipmentSlot::MainHand], &[]);
        let source = GearSource::new(EquipmentSlot::MainHand, sword);
        assert_eq!(source.id(), "Iron Sword (main_hand)");
    }

    #[test]
    fn test_same_name_in_two_slots_revokes_one() {
        let dagger = || {
            TestItem::gear(
                "Dagger",
                &[EquipmentSlot::MainHand, EquipmentSlot::OffHand],
                &[(StatKind::Dexterity, 1)],
            )
        };
        let main = GearSource::new(EquipmentSlot::MainHand, dagger());
        let off = GearSource::new(EquipmentSlot::OffHand, dagger());

        let mut stats = StatBlock::default();
        main.apply(&mut stats);
        off.apply(&mut stats);
        assert_eq!(stats.dexterity.value(), 12);

        assert_eq!(off.revoke(&mut stats), 1);
        assert_eq!(stats.dexterity.value(), 11);
    }
}
