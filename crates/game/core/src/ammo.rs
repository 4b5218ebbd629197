//! Ammo bridge between weapons and the inventory ledger.

use tracing::debug;

use crate::inventory::InventoryLedger;
use crate::item::AmmoType;

/// Source of reserve ammunition for reloads.
///
/// Implemented by [`InventoryLedger`]; the weapon slot manager only sees this trait,
/// so a character without an inventory simply passes no source.
pub trait AmmoSource {
    /// Total rounds of `ammo_type` available.
    fn available_ammo(&self, ammo_type: AmmoType) -> u32;

    /// Removes up to `amount_needed` rounds and returns how many were taken.
    fn consume_ammo(&mut self, ammo_type: AmmoType, amount_needed: u32) -> u32;
}

impl AmmoSource for InventoryLedger {
    fn available_ammo(&self, ammo_type: AmmoType) -> u32 {
        self.contents()
            .iter()
            .filter(|record| record.is_ammo_of(ammo_type))
            .map(|record| record.quantity())
            .sum()
    }

    fn consume_ammo(&mut self, ammo_type: AmmoType, amount_needed: u32) -> u32 {
        let mut consumed = 0;
        let mut index = 0;

        while consumed < amount_needed && index < self.contents().len() {
            let record = &self.contents()[index];
            if !record.is_ammo_of(ammo_type) {
                index += 1;
                continue;
            }

            let take = (amount_needed - consumed).min(record.quantity());
            let evicts = take == record.quantity();
            consumed += self.remove_amount_at(index, take);
            // An evicted record shifts the next one into this index.
            if !evicts {
                index += 1;
            }
        }

        debug!(%ammo_type, amount_needed, consumed, "consume ammo");
        consumed
    }
}
