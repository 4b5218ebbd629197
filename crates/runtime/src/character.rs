//! Per-character driver.
//!
//! A [`Character`] owns an inventory ledger, the weapon slots, a timed montage
//! player and a HUD event log, and wires them together through a
//! [`CharacterContext`] for every slot operation. [`Character::tick`] is the
//! per-frame entry point.

use loadout_core::{
    AddResult, AmmoSource, CharacterContext, HudEvent, HudLog, HudSink, InventoryId, InventoryLedger,
    ItemKey, ItemRecord, LoadoutConfig, TransitionOutcome, WeaponSlot, WeaponSlots,
};
use tracing::{debug, info, warn};

use crate::animation::TimedMontagePlayer;
use crate::api::{Result, RuntimeError};
use crate::pickup::Pickup;
use crate::runtime::RuntimeConfig;

pub struct Character {
    name: String,
    inventory: InventoryLedger,
    weapons: WeaponSlots,
    animator: TimedMontagePlayer,
    hud: HudLog,
}

impl Character {
    pub fn new(name: impl Into<String>, loadout: &LoadoutConfig, config: &RuntimeConfig) -> Self {
        Self {
            name: name.into(),
            inventory: InventoryLedger::new(InventoryId::PLAYER, loadout.inventory),
            weapons: WeaponSlots::new(loadout.montages.clone()),
            animator: TimedMontagePlayer::new(
                config.montage_seconds.clone(),
                config.default_montage_seconds,
            ),
            hud: HudLog::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn weapons(&self) -> &WeaponSlots {
        &self.weapons
    }

    pub fn animator(&self) -> &TimedMontagePlayer {
        &self.animator
    }

    pub fn hud(&self) -> &HudLog {
        &self.hud
    }

    pub fn drain_hud(&mut self) -> Vec<HudEvent> {
        self.hud.drain()
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    /// Adds a copy of `item` to the inventory.
    pub fn add_item(&mut self, item: &ItemRecord) -> AddResult {
        let result = self.inventory.add_item(item);
        info!(character = %self.name, message = %result.message, "add item");
        self.flush_inventory_events();
        result
    }

    /// Removes `quantity` units of an inventory record and returns them as a world
    /// pickup. Dropping at least the whole stack removes the record.
    pub fn drop_item(&mut self, key: ItemKey, quantity: u32) -> Result<Pickup> {
        if quantity == 0 {
            return Err(RuntimeError::NothingToDrop(key));
        }
        let record = self
            .inventory
            .find_matching_item(key)
            .ok_or(RuntimeError::ItemNotFound(key))?;
        if !record.data().numeric.is_discardable {
            return Err(RuntimeError::NotDiscardable(record.id().clone()));
        }

        let dropped = if quantity >= record.quantity() {
            self.inventory
                .remove_single_instance_of_item(key)
                .ok_or(RuntimeError::ItemNotFound(key))?
        } else {
            let mut copy = record.create_copy();
            let removed = self.inventory.remove_amount_of_item(key, quantity);
            copy.set_quantity(removed);
            copy
        };

        info!(character = %self.name, item = %dropped.id(), quantity = dropped.quantity(), "dropped item");
        self.flush_inventory_events();
        Ok(Pickup::from_record(&dropped))
    }

    /// Removes up to `amount` units of a record. Spent records leave the inventory.
    pub fn consume_item(&mut self, key: ItemKey, amount: u32) -> Result<u32> {
        if self.inventory.find_matching_item(key).is_none() {
            return Err(RuntimeError::ItemNotFound(key));
        }
        let removed = self.inventory.remove_amount_of_item(key, amount);
        self.flush_inventory_events();
        Ok(removed)
    }

    pub fn split_stack(&mut self, key: ItemKey, amount: u32) -> Result<ItemKey> {
        let into = self.inventory.split_existing_stack(key, amount)?;
        self.flush_inventory_events();
        Ok(into)
    }

    // ========================================================================
    // Weapons
    // ========================================================================

    /// Cold-start equip of a weapon template straight into the hand.
    pub fn equip_weapon(&mut self, item: &ItemRecord) -> Result<WeaponSlot> {
        Ok(self.with_context(|weapons, ctx| weapons.equip_weapon(item, ctx))?)
    }

    /// Assigns an inventory weapon to `slot`, replacing the occupant.
    pub fn assign_from_inventory(&mut self, slot: WeaponSlot, key: ItemKey) -> Result<()> {
        let item = self
            .inventory
            .find_matching_item(key)
            .ok_or(RuntimeError::ItemNotFound(key))?
            .create_copy();
        Ok(self.with_context(|weapons, ctx| weapons.assign_item_to_slot(slot, &item, ctx))?)
    }

    pub fn unequip_weapon(&mut self, slot: WeaponSlot) -> Result<()> {
        self.with_context(|weapons, ctx| weapons.unequip_weapon(slot, ctx))?;
        Ok(())
    }

    pub fn draw(&mut self, slot: WeaponSlot) -> Result<TransitionOutcome> {
        Ok(self.with_context(|weapons, ctx| weapons.draw_with_animation(slot, ctx))?)
    }

    pub fn holster(&mut self, slot: WeaponSlot) -> Result<TransitionOutcome> {
        Ok(self.with_context(|weapons, ctx| weapons.holster_with_animation(slot, ctx))?)
    }

    pub fn fire(&mut self) -> Result<u32> {
        Ok(self.with_context(|weapons, ctx| weapons.fire(ctx))?)
    }

    pub fn start_fire(&mut self) -> Result<u32> {
        Ok(self.with_context(|weapons, ctx| weapons.start_fire(ctx))?)
    }

    pub fn stop_fire(&mut self) {
        self.weapons.stop_fire();
    }

    pub fn reload(&mut self) -> Result<()> {
        Ok(self.with_context(|weapons, ctx| weapons.reload(ctx))?)
    }

    pub fn attack(&mut self) -> Result<f32> {
        Ok(self.weapons.attack()?)
    }

    pub fn can_reload_from_inventory(&self) -> bool {
        self.weapons
            .can_reload_from_inventory(Some(&self.inventory as &dyn AmmoSource))
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advances montages and weapon timers by `dt` seconds.
    ///
    /// Finished montages complete their transitions first, so a holster that ends
    /// this frame starts the pending draw's montage in the same frame.
    pub fn tick(&mut self, dt: f32) {
        for token in self.animator.advance(dt) {
            let result = self.with_context(|weapons, ctx| weapons.complete_transition(token, ctx));
            match result {
                Ok(Some(chained)) => debug!(character = %self.name, ?chained, "chained transition"),
                Ok(None) => {}
                Err(err) => warn!(character = %self.name, %err, "transition completion rejected"),
            }
        }
        self.with_context(|weapons, ctx| weapons.tick(dt, ctx));
    }

    fn with_context<R>(
        &mut self,
        f: impl FnOnce(&mut WeaponSlots, &mut CharacterContext<'_>) -> R,
    ) -> R {
        let mut ctx = CharacterContext::new(&mut self.hud)
            .with_ammo(&mut self.inventory)
            .with_animator(&mut self.animator);
        let result = f(&mut self.weapons, &mut ctx);
        self.flush_inventory_events();
        result
    }

    /// Forwards queued ledger changes to the HUD as one "inventory updated" event.
    fn flush_inventory_events(&mut self) {
        let events = self.inventory.drain_events();
        if !events.is_empty() {
            debug!(character = %self.name, count = events.len(), "inventory updated");
            self.hud.notify(HudEvent::InventoryUpdated);
        }
    }
}
