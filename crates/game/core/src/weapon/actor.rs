//! Spawned weapon instance.
//!
//! A [`WeaponActor`] is created when a weapon item is assigned to a slot and is
//! destroyed when the slot is cleared. It owns a copy of the item's template data
//! and the per-instance combat state: magazine, reserve, fire cooldown and reload
//! timer. Timers advance only through [`WeaponActor::tick`].

use tracing::{debug, info, warn};

use super::{MeshBinding, WeaponError, WeaponState};
use crate::ammo::AmmoSource;
use crate::item::{AmmoType, ItemId, ItemRecord, WeaponCategory, WeaponData};
use crate::slots::{HAND_SOCKET, WeaponSlot};

/// Snapshot of the drawn weapon, as shown on the HUD.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSummary {
    pub id: ItemId,
    pub name: String,
    pub category: WeaponCategory,
    pub ammo_in_magazine: u32,
    pub magazine_size: u32,
    pub reserve_ammo: u32,
}

/// What happened to a weapon during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeaponTick {
    /// Rounds fired by a held trigger.
    pub shots_fired: u32,
    /// Rounds loaded by a reload that completed this tick.
    pub rounds_loaded: Option<u32>,
}

impl WeaponTick {
    pub fn changed_ammo(&self) -> bool {
        self.shots_fired > 0 || self.rounds_loaded.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct WeaponActor {
    template: ItemRecord,
    weapon: WeaponData,
    state: WeaponState,
    mesh: MeshBinding,
    ammo_in_magazine: u32,
    reserve_ammo: u32,
    can_fire: bool,
    fire_cooldown: f32,
    reload_remaining: Option<f32>,
    trigger_held: bool,
}

impl WeaponActor {
    /// Spawns an unequipped actor from a weapon item. Firearms spawn with a full
    /// magazine and an empty reserve.
    pub fn spawn(item: &ItemRecord) -> Result<Self, WeaponError> {
        let weapon = *item
            .weapon()
            .ok_or_else(|| WeaponError::NotAWeapon(item.id().clone()))?;

        let mesh = MeshBinding::from_assets(&item.data().assets);
        if mesh == MeshBinding::Missing {
            warn!(item = %item.id(), "weapon has neither a skeletal nor a static mesh");
        }

        info!(item = %item.id(), category = %weapon.category, "initialized weapon");
        Ok(Self {
            template: item.create_copy(),
            weapon,
            state: WeaponState::Unequipped,
            mesh,
            ammo_in_magazine: weapon.magazine_size,
            reserve_ammo: 0,
            can_fire: true,
            fire_cooldown: 0.0,
            reload_remaining: None,
            trigger_held: false,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn template(&self) -> &ItemRecord {
        &self.template
    }

    pub fn id(&self) -> &ItemId {
        self.template.id()
    }

    pub fn name(&self) -> &str {
        self.template.name()
    }

    pub fn weapon_data(&self) -> &WeaponData {
        &self.weapon
    }

    pub fn category(&self) -> WeaponCategory {
        self.weapon.category
    }

    pub fn state(&self) -> WeaponState {
        self.state
    }

    pub fn mesh(&self) -> &MeshBinding {
        &self.mesh
    }

    pub fn is_equipped(&self) -> bool {
        self.state == WeaponState::Equipped
    }

    pub fn is_firearm(&self) -> bool {
        self.weapon.is_firearm()
    }

    pub fn required_ammo_type(&self) -> Option<AmmoType> {
        self.weapon.ammo_type
    }

    pub fn ammo_in_magazine(&self) -> u32 {
        self.ammo_in_magazine
    }

    pub fn reserve_ammo(&self) -> u32 {
        self.reserve_ammo
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_remaining.is_some()
    }

    pub fn is_trigger_held(&self) -> bool {
        self.trigger_held
    }

    /// Ready to fire: in hand, off cooldown and not reloading.
    pub fn can_fire(&self) -> bool {
        self.can_fire && self.is_equipped() && !self.is_reloading()
    }

    /// In hand, uses a magazine that has room and is not already reloading.
    pub fn can_reload(&self) -> bool {
        self.is_equipped()
            && self.is_firearm()
            && !self.is_reloading()
            && self.ammo_in_magazine < self.weapon.magazine_size
    }

    /// Socket the actor is attached to for its current state.
    pub fn attach_socket(&self) -> &'static str {
        match self.state {
            WeaponState::Equipped => HAND_SOCKET,
            _ => self.holster_socket(),
        }
    }

    pub fn holster_socket(&self) -> &'static str {
        WeaponSlot::for_category(self.weapon.category).holster_socket()
    }

    pub fn summary(&self) -> WeaponSummary {
        WeaponSummary {
            id: self.id().clone(),
            name: self.name().to_owned(),
            category: self.weapon.category,
            ammo_in_magazine: self.ammo_in_magazine,
            magazine_size: self.weapon.magazine_size,
            reserve_ammo: self.reserve_ammo,
        }
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn set_state(&mut self, state: WeaponState) {
        if self.state == state {
            return;
        }
        debug!(weapon = %self.id(), from = %self.state, to = %state, "weapon state changed");
        if state != WeaponState::Equipped {
            // Putting a weapon away interrupts reloads and releases the trigger.
            self.reload_remaining = None;
            self.trigger_held = false;
        }
        self.state = state;
    }

    /// Adds rounds to the weapon's own reserve, capped at `max_ammo`. Returns the
    /// number actually stored.
    pub fn add_reserve_ammo(&mut self, rounds: u32) -> u32 {
        let room = self.weapon.max_ammo.saturating_sub(self.reserve_ammo);
        let stored = rounds.min(room);
        self.reserve_ammo += stored;
        stored
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Fires one round and starts the fire-rate cooldown. Returns the rounds left in
    /// the magazine.
    pub fn fire(&mut self) -> Result<u32, WeaponError> {
        self.check_ready()?;
        if !self.is_firearm() {
            return Err(WeaponError::NotAFirearm);
        }
        if self.ammo_in_magazine == 0 {
            return Err(WeaponError::MagazineEmpty);
        }

        self.ammo_in_magazine -= 1;
        self.start_cooldown();
        debug!(weapon = %self.id(), left = self.ammo_in_magazine, "fired");
        Ok(self.ammo_in_magazine)
    }

    /// Melee swing. Any equipped weapon can attack; returns the damage dealt.
    pub fn attack(&mut self) -> Result<f32, WeaponError> {
        self.check_ready()?;
        self.start_cooldown();
        debug!(weapon = %self.id(), damage = self.weapon.damage, "attack");
        Ok(self.weapon.damage)
    }

    pub fn start_fire(&mut self) -> Result<(), WeaponError> {
        if !self.is_equipped() {
            return Err(WeaponError::NotEquipped { state: self.state });
        }
        if !self.is_firearm() {
            return Err(WeaponError::NotAFirearm);
        }
        self.trigger_held = true;
        Ok(())
    }

    pub fn stop_fire(&mut self) {
        self.trigger_held = false;
    }

    /// Starts the reload timer. `available` is the number of rounds the caller can
    /// supply from outside the weapon.
    pub fn begin_reload(&mut self, available: u32) -> Result<(), WeaponError> {
        if !self.is_equipped() {
            return Err(WeaponError::NotEquipped { state: self.state });
        }
        if !self.is_firearm() {
            return Err(WeaponError::NotAFirearm);
        }
        if self.is_reloading() {
            return Err(WeaponError::Reloading);
        }
        if self.ammo_in_magazine >= self.weapon.magazine_size {
            return Err(WeaponError::MagazineFull);
        }
        if self.reserve_ammo == 0 && available == 0 {
            return Err(WeaponError::NoAmmoAvailable);
        }

        self.trigger_held = false;
        self.reload_remaining = Some(self.weapon.reload_time.max(0.0));
        info!(weapon = %self.id(), seconds = self.weapon.reload_time, "reloading");
        Ok(())
    }

    /// Advances the fire cooldown and reload timers by `dt` seconds, completing a
    /// reload from the reserve and then from `ammo` when its timer runs out, and
    /// firing once more if an automatic trigger is held.
    pub fn tick(&mut self, dt: f32, ammo: Option<&mut dyn AmmoSource>) -> WeaponTick {
        let mut report = WeaponTick::default();
        let dt = dt.max(0.0);

        if !self.can_fire {
            self.fire_cooldown -= dt;
            if self.fire_cooldown <= 0.0 {
                self.fire_cooldown = 0.0;
                self.can_fire = true;
            }
        }

        if let Some(remaining) = self.reload_remaining {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                report.rounds_loaded = Some(self.finish_reload(ammo));
            } else {
                self.reload_remaining = Some(remaining);
            }
        }

        if self.trigger_held && self.weapon.is_automatic && self.can_fire() {
            match self.fire() {
                Ok(_) => report.shots_fired += 1,
                Err(_) => self.trigger_held = false,
            }
        }

        report
    }

    fn finish_reload(&mut self, ammo: Option<&mut dyn AmmoSource>) -> u32 {
        self.reload_remaining = None;

        let mut needed = self.weapon.magazine_size.saturating_sub(self.ammo_in_magazine);
        let from_reserve = needed.min(self.reserve_ammo);
        self.reserve_ammo -= from_reserve;
        needed -= from_reserve;

        let from_source = match (ammo, self.weapon.ammo_type) {
            (Some(source), Some(ammo_type)) if needed > 0 => {
                source.consume_ammo(ammo_type, needed)
            }
            _ => 0,
        };

        let loaded = from_reserve + from_source;
        self.ammo_in_magazine += loaded;
        info!(weapon = %self.id(), loaded, magazine = self.ammo_in_magazine, "reload complete");
        loaded
    }

    fn check_ready(&self) -> Result<(), WeaponError> {
        if !self.is_equipped() {
            return Err(WeaponError::NotEquipped { state: self.state });
        }
        if self.is_reloading() {
            return Err(WeaponError::Reloading);
        }
        if !self.can_fire {
            return Err(WeaponError::CoolingDown);
        }
        Ok(())
    }

    fn start_cooldown(&mut self) {
        if self.weapon.fire_rate > 0.0 {
            self.can_fire = false;
            self.fire_cooldown = self.weapon.fire_rate;
        }
    }
}
