//! Weapon action errors.

use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemId;

use super::WeaponState;

/// Reasons a weapon action did not happen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponError {
    /// The item carries no weapon data and cannot be spawned as a weapon.
    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemId),

    /// Fire, reload and attack require the weapon in hand.
    #[error("weapon is {state}, not equipped")]
    NotEquipped { state: WeaponState },

    /// The fire-rate cooldown has not elapsed yet.
    #[error("weapon is cooling down")]
    CoolingDown,

    /// A reload is in progress.
    #[error("weapon is reloading")]
    Reloading,

    #[error("magazine is empty")]
    MagazineEmpty,

    #[error("magazine is already full")]
    MagazineFull,

    /// Neither the weapon's reserve nor the ammo source holds matching rounds.
    #[error("no ammo available to reload")]
    NoAmmoAvailable,

    /// Ammunition actions on a weapon without a magazine.
    #[error("weapon does not use ammunition")]
    NotAFirearm,
}

impl GameError for WeaponError {
    fn severity(&self) -> ErrorSeverity {
        use WeaponError::*;
        match self {
            // Cleared by ticking or by the player's next input
            CoolingDown | Reloading | MagazineEmpty | NoAmmoAvailable => {
                ErrorSeverity::Recoverable
            }

            NotEquipped { .. } | MagazineFull | NotAFirearm => ErrorSeverity::Validation,

            // Slot assignment filters item types before spawning
            NotAWeapon(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use WeaponError::*;
        match self {
            NotAWeapon(_) => "WEAPON_NOT_A_WEAPON",
            NotEquipped { .. } => "WEAPON_NOT_EQUIPPED",
            CoolingDown => "WEAPON_COOLING_DOWN",
            Reloading => "WEAPON_RELOADING",
            MagazineEmpty => "WEAPON_MAGAZINE_EMPTY",
            MagazineFull => "WEAPON_MAGAZINE_FULL",
            NoAmmoAvailable => "WEAPON_NO_AMMO_AVAILABLE",
            NotAFirearm => "WEAPON_NOT_A_FIREARM",
        }
    }
}
