use strum::{Display, EnumIter};

use crate::item::{ItemType, WeaponCategory};

/// Socket a drawn weapon attaches to.
pub const HAND_SOCKET: &str = "RightHandSocket";

/// One of the three fixed weapon-holding positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeaponSlot {
    Primary,
    Secondary,
    Melee,
}

impl WeaponSlot {
    pub const ALL: [WeaponSlot; 3] = [WeaponSlot::Primary, WeaponSlot::Secondary, WeaponSlot::Melee];

    /// Fixed category → slot table used by the cold-start equip path.
    pub const fn for_category(category: WeaponCategory) -> Self {
        match category {
            WeaponCategory::Handgun => WeaponSlot::Secondary,
            WeaponCategory::Rifle | WeaponCategory::Shotgun => WeaponSlot::Primary,
            WeaponCategory::Melee => WeaponSlot::Melee,
        }
    }

    pub const fn holster_socket(self) -> &'static str {
        match self {
            WeaponSlot::Primary => "PrimaryHolster",
            WeaponSlot::Secondary => "SecondaryHolster",
            WeaponSlot::Melee => "MeleeHolster",
        }
    }

    /// The melee slot holds `Melee` items; the others hold `Weapon` items.
    pub const fn accepts(self, item_type: ItemType) -> bool {
        match self {
            WeaponSlot::Melee => matches!(item_type, ItemType::Melee),
            WeaponSlot::Primary | WeaponSlot::Secondary => matches!(item_type, ItemType::Weapon),
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_table() {
        assert_eq!(WeaponSlot::for_category(WeaponCategory::Handgun), WeaponSlot::Secondary);
        assert_eq!(WeaponSlot::for_category(WeaponCategory::Rifle), WeaponSlot::Primary);
        assert_eq!(WeaponSlot::for_category(WeaponCategory::Shotgun), WeaponSlot::Primary);
        assert_eq!(WeaponSlot::for_category(WeaponCategory::Melee), WeaponSlot::Melee);
    }

    #[test]
    fn indices_match_iteration_order() {
        for (expected, slot) in WeaponSlot::iter().enumerate() {
            assert_eq!(slot.index(), expected);
            assert_eq!(WeaponSlot::ALL[expected], slot);
        }
    }

    #[test]
    fn slot_accepts_matching_item_types() {
        assert!(WeaponSlot::Melee.accepts(ItemType::Melee));
        assert!(!WeaponSlot::Melee.accepts(ItemType::Weapon));
        assert!(WeaponSlot::Primary.accepts(ItemType::Weapon));
        assert!(!WeaponSlot::Secondary.accepts(ItemType::Ammo));
    }
}
