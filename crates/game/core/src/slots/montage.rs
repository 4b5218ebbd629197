use std::fmt;

use super::{TransitionKind, TransitionToken, WeaponSlot};

/// Opaque animation montage reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MontageHandle(pub String);

impl MontageHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MontageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equip and holster montages for one slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlotMontages {
    pub equip: Option<MontageHandle>,
    pub holster: Option<MontageHandle>,
}

/// Montages for all three slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MontageSet {
    pub primary: SlotMontages,
    pub secondary: SlotMontages,
    pub melee: SlotMontages,
}

impl MontageSet {
    pub fn for_slot(&self, slot: WeaponSlot) -> &SlotMontages {
        match slot {
            WeaponSlot::Primary => &self.primary,
            WeaponSlot::Secondary => &self.secondary,
            WeaponSlot::Melee => &self.melee,
        }
    }

    fn for_slot_mut(&mut self, slot: WeaponSlot) -> &mut SlotMontages {
        match slot {
            WeaponSlot::Primary => &mut self.primary,
            WeaponSlot::Secondary => &mut self.secondary,
            WeaponSlot::Melee => &mut self.melee,
        }
    }

    pub fn get(&self, slot: WeaponSlot, kind: TransitionKind) -> Option<&MontageHandle> {
        let montages = self.for_slot(slot);
        match kind {
            TransitionKind::Draw => montages.equip.as_ref(),
            TransitionKind::Holster => montages.holster.as_ref(),
        }
    }

    pub fn set(&mut self, slot: WeaponSlot, kind: TransitionKind, montage: Option<MontageHandle>) {
        let montages = self.for_slot_mut(slot);
        match kind {
            TransitionKind::Draw => montages.equip = montage,
            TransitionKind::Holster => montages.holster = montage,
        }
    }

    /// Same montage pair on every slot.
    pub fn uniform(equip: impl Into<String>, holster: impl Into<String>) -> Self {
        let pair = SlotMontages {
            equip: Some(MontageHandle::new(equip)),
            holster: Some(MontageHandle::new(holster)),
        };
        Self {
            primary: pair.clone(),
            secondary: pair.clone(),
            melee: pair,
        }
    }
}

/// Request sent to the animation system when a transition starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MontageRequest {
    pub token: TransitionToken,
    pub slot: WeaponSlot,
    pub kind: TransitionKind,
    pub montage: MontageHandle,
}

/// Outbound animation contract.
///
/// `play` is fire-and-forget. The animation system reports completion by calling
/// [`WeaponSlots::complete_transition`](super::WeaponSlots::complete_transition) with
/// the request's token exactly once.
pub trait MontagePlayer {
    fn play(&mut self, request: MontageRequest);
}

/// Records requests instead of playing them. Useful for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingMontagePlayer {
    pub requests: Vec<MontageRequest>,
}

impl RecordingMontagePlayer {
    pub fn last(&self) -> Option<&MontageRequest> {
        self.requests.last()
    }
}

impl MontagePlayer for RecordingMontagePlayer {
    fn play(&mut self, request: MontageRequest) {
        self.requests.push(request);
    }
}
