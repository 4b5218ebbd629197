//! Scripted sandbox session.
//!
//! Drives one character through a fixed loadout scenario: collect pickups,
//! assign weapons to slots, draw, fire, reload, switch weapons and drop a
//! stack. HUD events are logged as they arrive and the final inventory is
//! returned as JSON.

use anyhow::{Context, Result, anyhow};
use loadout_content::ContentFactory;
use loadout_core::{HudEvent, ItemId, WeaponSlot};
use loadout_runtime::{Character, Runtime};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::config::CliConfig;

/// Items lying in the sandbox world when the session starts.
const WORLD_PICKUPS: &[(&str, u32)] = &[
    ("m4_rifle", 1),
    ("pistol", 1),
    ("combat_knife", 1),
    ("rifle_ammo", 45),
    ("pistol_ammo", 30),
    ("bandage", 12),
    ("storage_key", 1),
];

/// Frames a transition may take before the session gives up waiting.
const MAX_SETTLE_FRAMES: u32 = 600;

pub struct Session {
    runtime: Runtime,
    character: Character,
    frame_seconds: f32,
    frames: u64,
}

impl Session {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let factory = match &config.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let runtime = Runtime::from_content(&factory, config.runtime.clone())
            .with_context(|| format!("loading content from {}", factory.data_dir().display()))?;
        let character = runtime.spawn_character("Ranger");

        Ok(Self {
            runtime,
            character,
            frame_seconds: config.frame_seconds(),
            frames: 0,
        })
    }

    /// Runs the scripted scenario and returns the final inventory dump.
    pub fn run(&mut self) -> Result<Value> {
        self.collect_pickups()?;
        self.assign_weapons()?;

        // Draw the rifle and empty part of a magazine.
        self.character.draw(WeaponSlot::Primary)?;
        self.settle()?;
        let left = self.character.start_fire()?;
        debug!(left, "trigger pulled");
        self.run_for(0.5);
        self.character.stop_fire();

        // Reload from the inventory.
        if self.character.can_reload_from_inventory() {
            self.character.reload()?;
            let reload_time = self
                .character
                .weapons()
                .current_weapon()
                .map_or(0.0, |weapon| weapon.weapon_data().reload_time);
            self.run_for(reload_time + self.frame_seconds);
        } else {
            warn!("no rounds to reload from");
        }

        // Switch to the sidearm: holster, then draw.
        self.character.draw(WeaponSlot::Secondary)?;
        self.settle()?;
        self.character.fire()?;

        // Knife attack after another switch.
        self.character.draw(WeaponSlot::Melee)?;
        self.settle()?;
        let damage = self.character.attack()?;
        info!(damage, "knife attack");

        self.drop_some("bandage", 3)?;
        self.log_hud();

        Ok(self.dump())
    }

    fn collect_pickups(&mut self) -> Result<()> {
        for (id, quantity) in WORLD_PICKUPS {
            let mut pickup = self.runtime.spawn_pickup(id, *quantity)?;
            let outcome = pickup.take(&mut self.character);
            info!(item = id, ?outcome, "picked up");
        }
        Ok(())
    }

    /// Puts every weapon in the inventory into the slot its category selects.
    fn assign_weapons(&mut self) -> Result<()> {
        let weapons: Vec<_> = self
            .character
            .inventory()
            .contents()
            .iter()
            .filter_map(|record| {
                let weapon = record.weapon()?;
                Some((WeaponSlot::for_category(weapon.category), record.key()?))
            })
            .collect();

        for (slot, key) in weapons {
            self.character.assign_from_inventory(slot, key)?;
        }
        Ok(())
    }

    fn drop_some(&mut self, id: &str, quantity: u32) -> Result<()> {
        let key = self
            .character
            .inventory()
            .find_next_item_by_id(&ItemId::from(id))
            .and_then(|record| record.key())
            .ok_or_else(|| anyhow!("no {id} in inventory"))?;
        let pickup = self.character.drop_item(key, quantity)?;
        info!(item = id, quantity = pickup.quantity(), "dropped");
        Ok(())
    }

    // ========================================================================
    // Clock
    // ========================================================================

    fn frame(&mut self) {
        self.character.tick(self.frame_seconds);
        self.frames += 1;
    }

    fn run_for(&mut self, seconds: f32) {
        let frames = (seconds / self.frame_seconds).ceil().max(0.0) as u32;
        for _ in 0..frames {
            self.frame();
        }
    }

    /// Ticks until no weapon transition is in flight.
    fn settle(&mut self) -> Result<()> {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.character.weapons().is_animating() {
                return Ok(());
            }
            self.frame();
        }
        Err(anyhow!(
            "weapon transition still in flight after {MAX_SETTLE_FRAMES} frames"
        ))
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn log_hud(&mut self) {
        for event in self.character.drain_hud() {
            match event {
                HudEvent::WeaponDisplay(Some(summary)) => {
                    info!(weapon = %summary.name, magazine = summary.ammo_in_magazine, "hud: weapon")
                }
                HudEvent::WeaponDisplay(None) => info!("hud: weapon cleared"),
                HudEvent::AmmoChanged { magazine, reserve } => {
                    debug!(magazine, reserve, "hud: ammo")
                }
                HudEvent::InventoryUpdated => debug!("hud: inventory"),
            }
        }
    }

    fn dump(&self) -> Value {
        let inventory = self.character.inventory();
        let weapons: Vec<_> = self
            .character
            .weapons()
            .iter()
            .map(|(slot, weapon)| {
                json!({
                    "slot": slot.to_string(),
                    "summary": weapon.summary(),
                    "state": weapon.state().to_string(),
                })
            })
            .collect();

        json!({
            "character": self.character.name(),
            "frames": self.frames,
            "total_weight": inventory.total_weight(),
            "weight_capacity": inventory.weight_capacity(),
            "slots_used": inventory.len(),
            "slots_capacity": inventory.slots_capacity(),
            "contents": inventory.contents(),
            "weapons": weapons,
        })
    }
}
