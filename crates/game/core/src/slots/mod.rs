//! Weapon slots and the animation-gated draw/holster state machine.

mod context;
mod error;
mod manager;
mod montage;
mod slot;
mod transition;

pub use context::CharacterContext;
pub use error::SlotError;
pub use manager::WeaponSlots;
pub use montage::{MontageHandle, MontagePlayer, MontageRequest, MontageSet, RecordingMontagePlayer, SlotMontages};
pub use slot::{HAND_SOCKET, WeaponSlot};
pub use transition::{
    AnimationState, Transition, TransitionKind, TransitionOutcome, TransitionRequest,
    TransitionToken,
};
