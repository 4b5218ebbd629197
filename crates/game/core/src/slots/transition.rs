//! Animation-gated transitions between holstered and equipped.

use std::fmt;

use strum::Display;

use super::WeaponSlot;

/// Identifies one started transition. Completion must present the same token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionToken(pub u64);

impl fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    Draw,
    Holster,
}

/// A transition whose montage is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub token: TransitionToken,
    pub kind: TransitionKind,
    pub slot: WeaponSlot,
}

/// Re-entrancy guard: at most one draw or holster animation plays at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    InFlight(Transition),
}

impl AnimationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AnimationState::Idle)
    }

    pub fn in_flight(&self) -> Option<&Transition> {
        match self {
            AnimationState::InFlight(transition) => Some(transition),
            AnimationState::Idle => None,
        }
    }

    /// True while a transition for `slot` is playing.
    pub fn is_animating(&self, slot: WeaponSlot) -> bool {
        self.in_flight().is_some_and(|transition| transition.slot == slot)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionRequest {
    Draw(WeaponSlot),
    Holster(WeaponSlot),
}

impl TransitionRequest {
    pub fn slot(&self) -> WeaponSlot {
        match self {
            TransitionRequest::Draw(slot) | TransitionRequest::Holster(slot) => *slot,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            TransitionRequest::Draw(_) => TransitionKind::Draw,
            TransitionRequest::Holster(_) => TransitionKind::Holster,
        }
    }
}

/// How an accepted transition request resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A montage is playing; complete it with this token.
    Animating(TransitionToken),
    /// Another weapon is being holstered first; the draw follows on completion.
    Deferred {
        holstering: WeaponSlot,
        token: TransitionToken,
    },
    /// No montage configured or no animator present; state changed synchronously.
    Immediate,
}

impl TransitionOutcome {
    pub fn token(&self) -> Option<TransitionToken> {
        match self {
            TransitionOutcome::Animating(token) | TransitionOutcome::Deferred { token, .. } => {
                Some(*token)
            }
            TransitionOutcome::Immediate => None,
        }
    }
}
