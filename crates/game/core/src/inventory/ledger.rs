//! Capacity-bounded item ledger.

use tracing::{debug, warn};

use super::{AddResult, InventoryError, InventoryEvent};
use crate::config::InventoryConfig;
use crate::item::{InventoryId, ItemId, ItemKey, ItemRecord};

/// Tolerance for weight comparisons. Weights are summed in `f32`, so a load that
/// is exactly at capacity may read a few ulps above it.
pub const WEIGHT_EPSILON: f32 = 1e-4;

/// Ordered, capacity-bounded collection of owned item records.
///
/// # Invariants
///
/// - `total_weight() == Σ quantity * single_weight` over `contents()`
/// - `contents().len() <= slots_capacity()`
/// - `total_weight() <= weight_capacity()` (within [`WEIGHT_EPSILON`])
/// - no owned record has quantity 0
///
/// The ledger is mutated only through its own operations; callers address records
/// by [`ItemKey`].
#[derive(Clone, Debug)]
pub struct InventoryLedger {
    id: InventoryId,
    contents: Vec<ItemRecord>,
    total_weight: f32,
    slots_capacity: usize,
    weight_capacity: f32,
    next_key: u32,
    events: Vec<InventoryEvent>,
}

impl InventoryLedger {
    pub fn new(id: InventoryId, config: InventoryConfig) -> Self {
        Self {
            id,
            contents: Vec::new(),
            total_weight: 0.0,
            slots_capacity: config.slots_capacity,
            weight_capacity: config.weight_capacity,
            next_key: 0,
            events: Vec::new(),
        }
    }

    pub fn with_capacity(slots_capacity: usize, weight_capacity: f32) -> Self {
        Self::new(
            InventoryId::PLAYER,
            InventoryConfig::new(slots_capacity, weight_capacity),
        )
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn id(&self) -> InventoryId {
        self.id
    }

    /// Owned records in insertion order.
    pub fn contents(&self) -> &[ItemRecord] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    pub fn weight_capacity(&self) -> f32 {
        self.weight_capacity
    }

    pub fn slots_capacity(&self) -> usize {
        self.slots_capacity
    }

    pub fn remaining_weight(&self) -> f32 {
        (self.weight_capacity - self.total_weight).max(0.0)
    }

    pub fn free_slots(&self) -> usize {
        self.slots_capacity.saturating_sub(self.contents.len())
    }

    /// Re-derives the total weight from the records.
    pub fn recompute_weight(&self) -> f32 {
        self.contents.iter().map(ItemRecord::stack_weight).sum()
    }

    /// Returns the record with this key, if the ledger still owns it.
    pub fn find_matching_item(&self, key: ItemKey) -> Option<&ItemRecord> {
        self.index_of(key).map(|index| &self.contents[index])
    }

    /// First record with this item id, in insertion order.
    pub fn find_next_item_by_id(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.contents.iter().find(|record| record.id() == id)
    }

    /// First record with this item id that still has room, in insertion order.
    pub fn find_next_partial_stack(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.partial_stack_index(id).map(|index| &self.contents[index])
    }

    /// Total units held across all records with this item id.
    pub fn count_of(&self, id: &ItemId) -> u32 {
        self.contents
            .iter()
            .filter(|record| record.id() == id)
            .map(ItemRecord::quantity)
            .sum()
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    /// Changes the slot capacity. Refuses to drop below the current record count.
    pub fn set_slots_capacity(&mut self, capacity: usize) -> Result<(), InventoryError> {
        if capacity < self.contents.len() {
            return Err(InventoryError::SlotsBelowUsage {
                requested: capacity,
                in_use: self.contents.len(),
            });
        }
        self.slots_capacity = capacity;
        self.events.push(InventoryEvent::CapacityChanged);
        Ok(())
    }

    /// Changes the weight capacity. Refuses to drop below the carried weight.
    pub fn set_weight_capacity(&mut self, capacity: f32) -> Result<(), InventoryError> {
        if !capacity.is_finite() || capacity + WEIGHT_EPSILON < self.total_weight {
            return Err(InventoryError::CapacityBelowUsage {
                requested: capacity,
                in_use: self.total_weight,
            });
        }
        self.weight_capacity = capacity;
        self.events.push(InventoryEvent::CapacityChanged);
        Ok(())
    }

    // ========================================================================
    // Add
    // ========================================================================

    /// Places as many units of `item` as capacity allows.
    ///
    /// The requested amount is `item.quantity()`. `item` itself is treated as a
    /// template and is never stored: owned records are promoted clones. Stackable
    /// items commit incrementally, so a `Partial` result reports exactly what
    /// was placed.
    pub fn add_item(&mut self, item: &ItemRecord) -> AddResult {
        let requested = item.quantity();
        let name = item.name().to_owned();

        if requested == 0 {
            return AddResult::added_none(
                InventoryError::NothingToAdd,
                format!("Could not add item {name} to inventory, quantity is zero."),
            );
        }

        let weight = item.single_weight();
        if !weight.is_finite() || weight <= 0.0 {
            warn!(item = %item.id(), weight, "rejected item with invalid weight");
            return AddResult::added_none(
                InventoryError::InvalidWeight { weight },
                format!("Could not add item {name} to inventory, item has invalid weight."),
            );
        }

        let result = if item.is_stackable() {
            self.handle_stackable_item(item, requested, &name)
        } else {
            self.handle_non_stackable_item(item, &name)
        };

        debug!(
            item = %item.id(),
            requested,
            added = result.actual_amount,
            outcome = ?result.outcome,
            total_weight = self.total_weight,
            "add item"
        );
        result
    }

    fn handle_non_stackable_item(&mut self, item: &ItemRecord, name: &str) -> AddResult {
        if self.total_weight + item.single_weight() > self.weight_capacity + WEIGHT_EPSILON {
            return AddResult::added_none(
                self.weight_exceeded(),
                format!(
                    "Could not add item {name} to inventory, item would overflow weight capacity."
                ),
            );
        }
        if self.contents.len() + 1 > self.slots_capacity {
            return AddResult::added_none(
                self.slots_exceeded(),
                format!(
                    "Could not add item {name} to inventory, item would overflow slots capacity."
                ),
            );
        }

        self.add_new_item(item, 1);
        AddResult::added_all(1, format!("Added item {name} 1 to inventory."))
    }

    fn handle_stackable_item(&mut self, item: &ItemRecord, requested: u32, name: &str) -> AddResult {
        let mut remaining = requested;
        let mut blocked_by = None;

        // Top up existing partial stacks first.
        while remaining > 0 {
            let Some(index) = self.partial_stack_index(item.id()) else {
                break;
            };
            let space_in_stack = self.contents[index].space_in_stack();
            let amount_by_weight = self.weight_add_amount(item.single_weight());
            let take = space_in_stack.min(amount_by_weight).min(remaining);
            if take == 0 {
                blocked_by = Some(self.weight_exceeded());
                break;
            }

            let stack = &mut self.contents[index];
            let quantity = stack.quantity() + take;
            stack.set_quantity(quantity);
            let key = stack.key();
            remaining -= take;
            self.refresh_weight();
            if let Some(key) = key {
                self.events.push(InventoryEvent::Stacked {
                    key,
                    id: item.id().clone(),
                    amount: take,
                });
            }
        }

        // Then open fresh stacks while slots and weight allow.
        while remaining > 0 && blocked_by.is_none() {
            if self.contents.len() + 1 > self.slots_capacity {
                blocked_by = Some(self.slots_exceeded());
                break;
            }
            let amount_by_weight = self.weight_add_amount(item.single_weight());
            let amount = remaining.min(amount_by_weight).min(item.max_stack_size());
            if amount == 0 {
                blocked_by = Some(self.weight_exceeded());
                break;
            }
            self.add_new_item(item, amount);
            remaining -= amount;
        }

        let added = requested - remaining;
        match blocked_by {
            None => AddResult::added_all(added, format!("Added item {name} {added} to inventory.")),
            Some(reason) if added > 0 => AddResult::added_partial(
                added,
                reason,
                format!("Partially added item {name} {added} to inventory."),
            ),
            Some(reason) => AddResult::added_none(
                reason,
                format!(
                    "Could not add item {name} to inventory, item would overflow weight or slots capacity."
                ),
            ),
        }
    }

    /// Units of `single_weight` that still fit under the weight capacity.
    fn weight_add_amount(&self, single_weight: f32) -> u32 {
        // Same absolute tolerance as the non-stackable path.
        let free = self.weight_capacity + WEIGHT_EPSILON - self.total_weight;
        if free <= 0.0 {
            return 0;
        }
        // Float-to-int casts saturate, so an oversized ratio clamps to u32::MAX.
        (free / single_weight).floor() as u32
    }

    fn add_new_item(&mut self, item: &ItemRecord, amount: u32) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;

        let owned = item.promote(key, self.id, amount);
        self.events.push(InventoryEvent::Added {
            key,
            id: owned.id().clone(),
            amount: owned.quantity(),
        });
        self.contents.push(owned);
        self.refresh_weight();
        key
    }

    // ========================================================================
    // Remove / split
    // ========================================================================

    /// Removes up to `amount` units from a record and returns how many were removed.
    ///
    /// A record that reaches quantity 0 is evicted. Unknown keys remove nothing.
    pub fn remove_amount_of_item(&mut self, key: ItemKey, amount: u32) -> u32 {
        let Some(index) = self.index_of(key) else {
            warn!(%key, "remove from unknown record");
            return 0;
        };
        self.remove_amount_at(index, amount)
    }

    /// Removes one whole record regardless of its quantity.
    pub fn remove_single_instance_of_item(&mut self, key: ItemKey) -> Option<ItemRecord> {
        let index = self.index_of(key)?;
        Some(self.remove_at(index))
    }

    /// Moves `amount` units from a record into a new record appended to the ledger.
    ///
    /// Total weight is unchanged. Fails without mutating when there is no free slot
    /// or when the split would leave either stack empty.
    pub fn split_existing_stack(
        &mut self,
        key: ItemKey,
        amount: u32,
    ) -> Result<ItemKey, InventoryError> {
        let index = self
            .index_of(key)
            .ok_or(InventoryError::ItemNotFound(key))?;
        if self.contents.len() + 1 > self.slots_capacity {
            return Err(self.slots_exceeded());
        }
        let quantity = self.contents[index].quantity();
        if amount == 0 || amount >= quantity {
            return Err(InventoryError::InvalidSplit {
                key,
                amount,
                quantity,
            });
        }

        self.contents[index].set_quantity(quantity - amount);
        let template = self.contents[index].create_copy();
        let into = self.add_new_item(&template, amount);
        self.events.push(InventoryEvent::Split {
            from: key,
            into,
            amount,
        });
        debug!(from = %key, %into, amount, "split stack");
        Ok(into)
    }

    pub(crate) fn remove_amount_at(&mut self, index: usize, amount: u32) -> u32 {
        let record = &mut self.contents[index];
        let actual = amount.min(record.quantity());
        if actual == 0 {
            return 0;
        }

        let remaining = record.quantity() - actual;
        record.set_quantity(remaining);
        if remaining == 0 {
            self.remove_at(index);
        } else {
            if let Some(key) = record.key() {
                let id = record.id().clone();
                self.events.push(InventoryEvent::Reduced {
                    key,
                    id,
                    amount: actual,
                });
            }
            self.refresh_weight();
        }
        actual
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ItemRecord {
        let record = self.contents.remove(index);
        self.refresh_weight();
        if let Some(key) = record.key() {
            self.events.push(InventoryEvent::Removed {
                key,
                id: record.id().clone(),
            });
        }
        record.release()
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Takes the queued change events.
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.contents
            .iter()
            .position(|record| record.key() == Some(key))
    }

    fn partial_stack_index(&self, id: &ItemId) -> Option<usize> {
        self.contents
            .iter()
            .position(|record| record.id() == id && !record.is_full_stack())
    }

    fn refresh_weight(&mut self) {
        self.total_weight = self.recompute_weight();
    }

    fn weight_exceeded(&self) -> InventoryError {
        InventoryError::WeightCapacityExceeded {
            total: self.total_weight,
            capacity: self.weight_capacity,
        }
    }

    fn slots_exceeded(&self) -> InventoryError {
        InventoryError::SlotsCapacityExceeded {
            capacity: self.slots_capacity,
        }
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new(InventoryId::PLAYER, InventoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::AddOutcome;
    use crate::item::{ItemData, ItemNumericData, ItemType};

    fn stackable(id: &str, weight: f32, max_stack: u32, quantity: u32) -> ItemRecord {
        let data = ItemData::new(id, ItemType::Health, ItemNumericData::stackable(weight, max_stack))
            .with_name(id);
        ItemRecord::from_data(data, quantity)
    }

    fn single(id: &str, weight: f32) -> ItemRecord {
        let data = ItemData::new(id, ItemType::Key, ItemNumericData::single(weight));
        ItemRecord::from_data(data, 1)
    }

    fn assert_invariants(ledger: &InventoryLedger) {
        assert!((ledger.total_weight() - ledger.recompute_weight()).abs() < 1e-3);
        assert!(ledger.len() <= ledger.slots_capacity());
        assert!(ledger.total_weight() <= ledger.weight_capacity() + 1e-3);
        assert!(ledger.contents().iter().all(|record| record.quantity() > 0));
    }

    #[test]
    fn fills_partial_stack_then_opens_new_one() {
        let mut ledger = InventoryLedger::with_capacity(10, 100.0);
        let first = ledger.add_item(&stackable("bandage", 1.0, 10, 8));
        assert!(first.is_all());

        let result = ledger.add_item(&stackable("bandage", 1.0, 10, 5));
        assert_eq!(result.outcome, AddOutcome::All);
        assert_eq!(result.actual_amount, 5);

        let quantities: Vec<_> = ledger.contents().iter().map(ItemRecord::quantity).collect();
        assert_eq!(quantities, vec![10, 3]);
        assert!((ledger.total_weight() - 13.0).abs() < 1e-4);
        assert_invariants(&ledger);
    }

    #[test]
    fn partial_when_slots_run_out() {
        let mut ledger = InventoryLedger::with_capacity(1, 100.0);
        ledger.add_item(&stackable("bandage", 1.0, 10, 8));

        let result = ledger.add_item(&stackable("bandage", 1.0, 10, 5));
        assert_eq!(result.outcome, AddOutcome::Partial);
        assert_eq!(result.actual_amount, 2);
        assert!(matches!(
            result.reason,
            Some(InventoryError::SlotsCapacityExceeded { capacity: 1 })
        ));
        assert_eq!(ledger.len(), 1);
        assert_invariants(&ledger);
    }

    #[test]
    fn partial_when_weight_runs_out_mid_stack() {
        let mut ledger = InventoryLedger::with_capacity(10, 10.0);
        ledger.add_item(&stackable("stone", 1.0, 20, 7));

        let result = ledger.add_item(&stackable("stone", 1.0, 20, 6));
        assert_eq!(result.outcome, AddOutcome::Partial);
        assert_eq!(result.actual_amount, 3);
        assert_eq!(ledger.contents()[0].quantity(), 10);
        assert_eq!(ledger.len(), 1);
        assert_invariants(&ledger);
    }

    #[test]
    fn none_when_weight_full() {
        let mut ledger = InventoryLedger::with_capacity(10, 5.0);
        ledger.add_item(&stackable("stone", 1.0, 20, 5));
        ledger.drain_events();

        let result = ledger.add_item(&stackable("stone", 1.0, 20, 2));
        assert_eq!(result.outcome, AddOutcome::None);
        assert_eq!(result.actual_amount, 0);
        assert_eq!(ledger.contents()[0].quantity(), 5);
        assert!(!ledger.has_pending_events());
    }

    #[test]
    fn heavy_stackable_respects_fractional_capacity() {
        let mut ledger = InventoryLedger::with_capacity(10, 9.9995);

        let result = ledger.add_item(&stackable("brick", 10.0, 5, 1));
        assert_eq!(result.outcome, AddOutcome::None);
        assert!(matches!(
            result.reason,
            Some(InventoryError::WeightCapacityExceeded { .. })
        ));
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_weight(), 0.0);
    }

    #[test]
    fn stackable_fills_non_integer_remaining_capacity() {
        let mut ledger = InventoryLedger::with_capacity(10, 7.3);
        ledger.add_item(&single("lantern", 1.1));

        // 6.2 left: three 1.9 units fit, the fourth would reach 8.7.
        let result = ledger.add_item(&stackable("ingot", 1.9, 10, 5));
        assert_eq!(result.outcome, AddOutcome::Partial);
        assert_eq!(result.actual_amount, 3);
        assert!(ledger.total_weight() <= ledger.weight_capacity());
        assert_invariants(&ledger);

        let result = ledger.add_item(&stackable("ingot", 1.9, 10, 1));
        assert_eq!(result.outcome, AddOutcome::None);
        assert_eq!(ledger.count_of(&ItemId::from("ingot")), 3);
        assert!(ledger.total_weight() <= ledger.weight_capacity());
    }

    #[test]
    fn remainder_after_topping_up_opens_fresh_stack() {
        let mut ledger = InventoryLedger::with_capacity(3, 100.0);
        ledger.add_item(&stackable("arrow", 0.5, 10, 8));
        ledger.add_item(&stackable("arrow", 0.5, 10, 10));
        ledger.add_item(&stackable("arrow", 0.5, 10, 4));

        let quantities: Vec<_> = ledger.contents().iter().map(ItemRecord::quantity).collect();
        assert_eq!(quantities, vec![10, 10, 2]);
        assert_eq!(ledger.count_of(&ItemId::from("arrow")), 22);
        assert_invariants(&ledger);
    }

    #[test]
    fn non_stackable_weight_overflow_leaves_state_unchanged() {
        let mut ledger = InventoryLedger::with_capacity(10, 5.0);
        ledger.add_item(&single("lantern", 4.0));
        let before_weight = ledger.total_weight();
        let before_len = ledger.len();

        let result = ledger.add_item(&single("anvil", 2.0));
        assert_eq!(result.outcome, AddOutcome::None);
        assert!(matches!(
            result.reason,
            Some(InventoryError::WeightCapacityExceeded { .. })
        ));
        assert_eq!(ledger.total_weight(), before_weight);
        assert_eq!(ledger.len(), before_len);
    }

    #[test]
    fn non_stackable_respects_slots_and_weight_validity() {
        let mut ledger = InventoryLedger::with_capacity(1, 50.0);
        assert!(ledger.add_item(&single("keycard", 0.1)).is_all());
        assert!(matches!(
            ledger.add_item(&single("journal", 0.2)).reason,
            Some(InventoryError::SlotsCapacityExceeded { .. })
        ));
        assert!(matches!(
            ledger.add_item(&single("ghost", 0.0)).reason,
            Some(InventoryError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn added_records_are_owned_promoted_clones() {
        let mut ledger = InventoryLedger::new(InventoryId(7), InventoryConfig::new(4, 10.0));
        let template = ItemRecord::pickup(stackable("bandage", 0.5, 5, 1).data().clone(), 3);
        ledger.add_item(&template);

        let owned = &ledger.contents()[0];
        assert_eq!(owned.owning_inventory(), Some(InventoryId(7)));
        assert!(!owned.is_pickup());
        assert!(template.is_pickup());
        assert_eq!(template.key(), None);
    }

    #[test]
    fn remove_zero_is_idempotent() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&stackable("bandage", 0.5, 5, 3));
        let key = ledger.contents()[0].key().unwrap();
        let weight = ledger.total_weight();

        assert_eq!(ledger.remove_amount_of_item(key, 0), 0);
        assert_eq!(ledger.total_weight(), weight);
        assert_eq!(ledger.contents()[0].quantity(), 3);
    }

    #[test]
    fn add_then_remove_round_trips_weight() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&single("lantern", 1.25));
        let before = ledger.total_weight();

        ledger.add_item(&stackable("bandage", 0.3, 10, 7));
        let key = ledger
            .find_next_item_by_id(&ItemId::from("bandage"))
            .and_then(ItemRecord::key)
            .unwrap();
        assert_eq!(ledger.remove_amount_of_item(key, 7), 7);

        assert!((ledger.total_weight() - before).abs() < 1e-4);
        assert!(ledger.find_matching_item(key).is_none());
    }

    #[test]
    fn removal_is_clamped_and_evicts_empty_records() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&stackable("bandage", 0.5, 5, 3));
        let key = ledger.contents()[0].key().unwrap();

        assert_eq!(ledger.remove_amount_of_item(key, 2), 2);
        assert_eq!(ledger.remove_amount_of_item(key, 10), 1);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_weight(), 0.0);
        assert_eq!(ledger.remove_amount_of_item(key, 1), 0);
    }

    #[test]
    fn remove_single_instance_discards_whole_stack() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&stackable("bandage", 0.5, 5, 4));
        let key = ledger.contents()[0].key().unwrap();

        let removed = ledger.remove_single_instance_of_item(key).unwrap();
        assert_eq!(removed.quantity(), 4);
        assert_eq!(removed.owning_inventory(), None);
        assert!(ledger.is_empty());
        assert!(ledger.remove_single_instance_of_item(key).is_none());
    }

    #[test]
    fn split_preserves_weight_and_respects_slots() {
        let mut ledger = InventoryLedger::with_capacity(2, 20.0);
        ledger.add_item(&stackable("bandage", 0.5, 10, 9));
        let key = ledger.contents()[0].key().unwrap();
        let weight = ledger.total_weight();

        let into = ledger.split_existing_stack(key, 4).unwrap();
        assert_eq!(ledger.find_matching_item(key).unwrap().quantity(), 5);
        assert_eq!(ledger.find_matching_item(into).unwrap().quantity(), 4);
        assert!((ledger.total_weight() - weight).abs() < 1e-4);

        // Slots are now full: splitting again is a no-op.
        assert!(matches!(
            ledger.split_existing_stack(key, 1),
            Err(InventoryError::SlotsCapacityExceeded { .. })
        ));
        assert_eq!(ledger.len(), 2);
        assert_invariants(&ledger);
    }

    #[test]
    fn split_rejects_amounts_that_empty_a_stack() {
        let mut ledger = InventoryLedger::with_capacity(4, 20.0);
        ledger.add_item(&stackable("bandage", 0.5, 10, 3));
        let key = ledger.contents()[0].key().unwrap();

        assert!(matches!(
            ledger.split_existing_stack(key, 3),
            Err(InventoryError::InvalidSplit { .. })
        ));
        assert!(ledger.split_existing_stack(key, 0).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn partial_stack_lookup_skips_full_stacks() {
        let mut ledger = InventoryLedger::with_capacity(4, 100.0);
        ledger.add_item(&stackable("bandage", 0.1, 5, 5));
        ledger.add_item(&stackable("bandage", 0.1, 5, 2));

        let id = ItemId::from("bandage");
        let partial = ledger.find_next_partial_stack(&id).unwrap();
        assert_eq!(partial.quantity(), 2);
        assert_eq!(ledger.find_next_item_by_id(&id).unwrap().quantity(), 5);
    }

    #[test]
    fn capacity_setters_refuse_to_shrink_below_usage() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&stackable("stone", 2.0, 10, 3));
        ledger.add_item(&single("lantern", 1.0));

        assert_eq!(
            ledger.set_slots_capacity(1),
            Err(InventoryError::SlotsBelowUsage {
                requested: 1,
                in_use: 2
            })
        );
        assert!(matches!(
            ledger.set_weight_capacity(5.0),
            Err(InventoryError::CapacityBelowUsage { .. })
        ));
        assert!(ledger.set_slots_capacity(2).is_ok());
        assert!(ledger.set_weight_capacity(7.0).is_ok());
        assert_eq!(ledger.free_slots(), 0);
    }

    #[test]
    fn structural_changes_queue_events() {
        let mut ledger = InventoryLedger::with_capacity(4, 10.0);
        ledger.add_item(&stackable("bandage", 0.5, 5, 3));
        ledger.add_item(&stackable("bandage", 0.5, 5, 1));
        let key = ledger.contents()[0].key().unwrap();
        ledger.remove_amount_of_item(key, 4);

        let events = ledger.drain_events();
        assert!(matches!(events[0], InventoryEvent::Added { amount: 3, .. }));
        assert!(matches!(events[1], InventoryEvent::Stacked { amount: 1, .. }));
        assert!(matches!(events[2], InventoryEvent::Removed { .. }));
        assert!(ledger.drain_events().is_empty());
    }
}
