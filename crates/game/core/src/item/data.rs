//! Item classification enums and type-specific data blocks.

use strum::{Display, EnumIter};

use super::ItemId;

/// Item type; drives which sub-data block is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemType {
    Weapon,
    Melee,
    Ammo,
    Health,
    Key,
    Document,
}

impl ItemType {
    /// Weapon and melee items carry [`WeaponData`] and can be spawned as weapon actors.
    pub const fn is_weapon(self) -> bool {
        matches!(self, ItemType::Weapon | ItemType::Melee)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemQuality {
    Shoddy,
    #[default]
    Common,
    Uncommon,
    Masterwork,
    GrandMaster,
}

/// Weapon category; selects the weapon slot and holster socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponCategory {
    Handgun,
    Rifle,
    Shotgun,
    Melee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmmoType {
    PistolAmmo,
    RifleAmmo,
    ShotgunShells,
}

/// Display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemTextData {
    pub name: String,
    pub description: String,
    pub interaction_text: String,
    pub usage_text: String,
}

impl ItemTextData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Weight and stacking rules.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemNumericData {
    /// Weight of a single unit.
    pub weight: f32,
    pub max_stack_size: u32,
    pub is_stackable: bool,
    #[cfg_attr(feature = "serde", serde(default = "discardable_default"))]
    pub is_discardable: bool,
}

#[cfg(feature = "serde")]
fn discardable_default() -> bool {
    true
}

impl ItemNumericData {
    pub fn stackable(weight: f32, max_stack_size: u32) -> Self {
        Self {
            weight,
            max_stack_size: max_stack_size.max(1),
            is_stackable: true,
            is_discardable: true,
        }
    }

    pub fn single(weight: f32) -> Self {
        Self {
            weight,
            max_stack_size: 1,
            is_stackable: false,
            is_discardable: true,
        }
    }

    /// Upper bound for a record's quantity.
    pub fn quantity_limit(&self) -> u32 {
        if self.is_stackable {
            self.max_stack_size
        } else {
            1
        }
    }
}

/// Opaque asset handles; the loadout core only passes them through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemAssetData {
    pub icon: Option<String>,
    pub mesh: Option<String>,
    pub skeletal_mesh: Option<String>,
    pub pickup_sound: Option<String>,
    pub use_sound: Option<String>,
}

/// Weapon-specific data for `Weapon` and `Melee` items.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub category: WeaponCategory,
    /// Ammunition drawn from the inventory on reload. `None` for melee weapons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo_type: Option<AmmoType>,
    pub damage: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: f32,
    /// Seconds between shots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fire_rate: f32,
    /// Seconds a reload takes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reload_time: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magazine_size: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_ammo: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_automatic: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recoil_intensity: f32,
    /// Cone half-angle in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spread_angle: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aim_down_sight_time: f32,
}

impl WeaponData {
    pub fn firearm(category: WeaponCategory, ammo_type: AmmoType, magazine_size: u32) -> Self {
        Self {
            category,
            ammo_type: Some(ammo_type),
            damage: 10.0,
            range: 50.0,
            fire_rate: 0.2,
            reload_time: 1.5,
            accuracy: 0.9,
            magazine_size,
            max_ammo: magazine_size.saturating_mul(4),
            is_automatic: false,
            recoil_intensity: 1.0,
            spread_angle: 2.0,
            aim_down_sight_time: 0.25,
        }
    }

    pub fn melee(damage: f32) -> Self {
        Self {
            category: WeaponCategory::Melee,
            ammo_type: None,
            damage,
            range: 1.5,
            fire_rate: 0.6,
            reload_time: 0.0,
            accuracy: 1.0,
            magazine_size: 0,
            max_ammo: 0,
            is_automatic: false,
            recoil_intensity: 0.0,
            spread_angle: 0.0,
            aim_down_sight_time: 0.0,
        }
    }

    pub fn is_firearm(&self) -> bool {
        self.ammo_type.is_some() && self.magazine_size > 0
    }
}

/// Ammunition-specific data for `Ammo` items.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoData {
    pub ammo_type: AmmoType,
    #[cfg_attr(feature = "serde", serde(default = "damage_modifier_default"))]
    pub damage_modifier: f32,
}

#[cfg(feature = "serde")]
fn damage_modifier_default() -> f32 {
    1.0
}

impl AmmoData {
    pub fn new(ammo_type: AmmoType) -> Self {
        Self {
            ammo_type,
            damage_modifier: 1.0,
        }
    }
}

/// Data-table row describing an item template.
///
/// Rows never carry a quantity; quantities belong to [`ItemRecord`](super::ItemRecord)
/// instances created from them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemData {
    pub id: ItemId,
    pub item_type: ItemType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality: ItemQuality,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: ItemTextData,
    pub numeric: ItemNumericData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assets: ItemAssetData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo: Option<AmmoData>,
}

impl ItemData {
    pub fn new(id: impl Into<ItemId>, item_type: ItemType, numeric: ItemNumericData) -> Self {
        Self {
            id: id.into(),
            item_type,
            quality: ItemQuality::default(),
            text: ItemTextData::default(),
            numeric,
            assets: ItemAssetData::default(),
            weapon: None,
            ammo: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.text.name = name.into();
        self
    }

    pub fn with_quality(mut self, quality: ItemQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_weapon(mut self, weapon: WeaponData) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_ammo(mut self, ammo: AmmoData) -> Self {
        self.ammo = Some(ammo);
        self
    }

    pub fn with_assets(mut self, assets: ItemAssetData) -> Self {
        self.assets = assets;
        self
    }

    /// Name used in log and result messages, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.text.name.is_empty() {
            self.id.as_str()
        } else {
            &self.text.name
        }
    }
}
