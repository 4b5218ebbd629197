//! Outbound HUD contract.
//!
//! The HUD is purely observational: the loadout core pushes events and never
//! reads anything back.

use crate::weapon::WeaponSummary;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HudEvent {
    /// The drawn weapon changed. `None` clears the weapon display.
    WeaponDisplay(Option<WeaponSummary>),
    /// Magazine or reserve count of the drawn weapon changed. `reserve` includes
    /// matching rounds in the inventory.
    AmmoChanged { magazine: u32, reserve: u32 },
    /// The inventory changed structurally.
    InventoryUpdated,
}

pub trait HudSink {
    fn notify(&mut self, event: HudEvent);
}

/// Discards every event.
impl HudSink for () {
    fn notify(&mut self, _event: HudEvent) {}
}

/// Collects events in order.
#[derive(Clone, Debug, Default)]
pub struct HudLog {
    events: Vec<HudEvent>,
}

impl HudLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HudEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<HudEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent weapon display, if any event set one.
    pub fn current_display(&self) -> Option<&Option<WeaponSummary>> {
        self.events.iter().rev().find_map(|event| match event {
            HudEvent::WeaponDisplay(display) => Some(display),
            _ => None,
        })
    }
}

impl HudSink for HudLog {
    fn notify(&mut self, event: HudEvent) {
        self.events.push(event);
    }
}
