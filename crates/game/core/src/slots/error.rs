//! Weapon slot errors.
//!
//! Every variant describes a request that was dropped with the slot state left as
//! it was. Contention with an in-flight animation is the common case.

use crate::error::{ErrorSeverity, GameError};
use crate::item::{ItemId, ItemType};
use crate::weapon::{WeaponError, WeaponState};

use super::{TransitionToken, WeaponSlot};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    /// A slot is only reassignable when empty.
    #[error("{0} slot is already occupied")]
    SlotOccupied(WeaponSlot),

    #[error("{0} slot is empty")]
    SlotEmpty(WeaponSlot),

    /// The slot does not hold this kind of item.
    #[error("{slot} slot cannot hold {item_type} items")]
    WrongItemType { slot: WeaponSlot, item_type: ItemType },

    /// The item has no weapon data to spawn from.
    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemId),

    /// A draw or holster animation is already playing.
    #[error("a weapon animation is already in progress")]
    AnimationBusy,

    /// The weapon is not in the state the transition starts from.
    #[error("{slot} weapon is {actual}, expected {expected}")]
    InvalidState {
        slot: WeaponSlot,
        actual: WeaponState,
        expected: WeaponState,
    },

    #[error("no weapon is drawn")]
    NoWeaponDrawn,

    /// Completion for a transition that is not in flight.
    #[error("{0} does not match the transition in flight")]
    UnknownTransition(TransitionToken),

    /// Completion callback naming a slot with no matching transition.
    #[error("no {0} transition is in flight")]
    NoTransitionFor(WeaponSlot),

    #[error(transparent)]
    Weapon(#[from] WeaponError),
}

impl GameError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        use SlotError::*;
        match self {
            AnimationBusy => ErrorSeverity::Recoverable,

            SlotOccupied(_)
            | SlotEmpty(_)
            | WrongItemType { .. }
            | NotAWeapon(_)
            | InvalidState { .. }
            | NoWeaponDrawn => ErrorSeverity::Validation,

            // The animation system must echo back what it was given
            UnknownTransition(_) | NoTransitionFor(_) => ErrorSeverity::Internal,

            Weapon(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SlotError::*;
        match self {
            SlotOccupied(_) => "SLOT_OCCUPIED",
            SlotEmpty(_) => "SLOT_EMPTY",
            WrongItemType { .. } => "SLOT_WRONG_ITEM_TYPE",
            NotAWeapon(_) => "SLOT_NOT_A_WEAPON",
            AnimationBusy => "SLOT_ANIMATION_BUSY",
            InvalidState { .. } => "SLOT_INVALID_STATE",
            NoWeaponDrawn => "SLOT_NO_WEAPON_DRAWN",
            UnknownTransition(_) => "SLOT_UNKNOWN_TRANSITION",
            NoTransitionFor(_) => "SLOT_NO_TRANSITION_FOR",
            Weapon(err) => err.error_code(),
        }
    }
}
