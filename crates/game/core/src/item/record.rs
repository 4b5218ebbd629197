//! Item instances.
//!
//! An [`ItemRecord`] is a quantity-bearing instance of an [`ItemData`] row. Records
//! come from two places: a data-table lookup (a *template*, typically flagged as a
//! pickup) or [`ItemRecord::create_copy`]. A ledger never stores the caller's
//! record; it clones it, resets the flags and stamps its own key and id.

use bitflags::bitflags;

use super::{AmmoData, ItemData, ItemId, ItemKey, ItemType, InventoryId, WeaponData};

bitflags! {
    /// Provenance flags distinguishing templates from live inventory instances.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemFlags: u8 {
        /// Produced by [`ItemRecord::create_copy`].
        const COPY = 1 << 0;
        /// Owned by a world pickup.
        const PICKUP = 1 << 1;
    }
}

/// Quantity-bearing item instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    data: ItemData,
    quantity: u32,
    flags: ItemFlags,
    key: Option<ItemKey>,
    owning_inventory: Option<InventoryId>,
}

impl ItemRecord {
    /// Creates a template instance from a data-table row. The quantity is clamped
    /// to the row's stacking limits.
    pub fn from_data(data: ItemData, quantity: u32) -> Self {
        let mut record = Self {
            data,
            quantity: 0,
            flags: ItemFlags::empty(),
            key: None,
            owning_inventory: None,
        };
        record.set_quantity(quantity);
        record
    }

    /// Creates a template owned by a world pickup. Non-positive quantities become 1.
    pub fn pickup(data: ItemData, quantity: u32) -> Self {
        let mut record = Self::from_data(data, quantity.max(1));
        record.flags.insert(ItemFlags::PICKUP);
        record
    }

    /// Returns an unowned pickup carrying the same data and quantity.
    pub fn to_pickup(&self) -> Self {
        Self {
            data: self.data.clone(),
            quantity: self.quantity,
            flags: ItemFlags::PICKUP,
            key: None,
            owning_inventory: None,
        }
    }

    /// Returns an unowned copy carrying the same data and quantity.
    pub fn create_copy(&self) -> Self {
        Self {
            data: self.data.clone(),
            quantity: self.quantity,
            flags: ItemFlags::COPY,
            key: None,
            owning_inventory: None,
        }
    }

    pub fn data(&self) -> &ItemData {
        &self.data
    }

    pub fn id(&self) -> &ItemId {
        &self.data.id
    }

    pub fn item_type(&self) -> ItemType {
        self.data.item_type
    }

    pub fn name(&self) -> &str {
        self.data.display_name()
    }

    pub fn weapon(&self) -> Option<&WeaponData> {
        self.data.weapon.as_ref()
    }

    pub fn ammo(&self) -> Option<&AmmoData> {
        self.data.ammo.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sets the quantity, clamped to `[0, max_stack_size]` for stackable items and
    /// `[0, 1]` otherwise. Returns the stored value.
    pub fn set_quantity(&mut self, quantity: u32) -> u32 {
        self.quantity = quantity.min(self.data.numeric.quantity_limit());
        self.quantity
    }

    pub fn is_stackable(&self) -> bool {
        self.data.numeric.is_stackable
    }

    pub fn max_stack_size(&self) -> u32 {
        self.data.numeric.quantity_limit()
    }

    pub fn single_weight(&self) -> f32 {
        self.data.numeric.weight
    }

    pub fn stack_weight(&self) -> f32 {
        self.quantity as f32 * self.data.numeric.weight
    }

    pub fn is_full_stack(&self) -> bool {
        self.quantity >= self.max_stack_size()
    }

    /// Units that still fit into this stack.
    pub fn space_in_stack(&self) -> u32 {
        self.max_stack_size().saturating_sub(self.quantity)
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn is_copy(&self) -> bool {
        self.flags.contains(ItemFlags::COPY)
    }

    pub fn is_pickup(&self) -> bool {
        self.flags.contains(ItemFlags::PICKUP)
    }

    /// Ledger key; `None` for templates.
    pub fn key(&self) -> Option<ItemKey> {
        self.key
    }

    pub fn owning_inventory(&self) -> Option<InventoryId> {
        self.owning_inventory
    }

    /// Matches an ammunition record of the given type.
    pub fn is_ammo_of(&self, ammo_type: super::AmmoType) -> bool {
        self.data.item_type == ItemType::Ammo
            && self
                .data
                .ammo
                .is_some_and(|ammo| ammo.ammo_type == ammo_type)
    }

    /// Promotes a clone of this record into an owned ledger instance.
    pub(crate) fn promote(&self, key: ItemKey, owner: InventoryId, quantity: u32) -> Self {
        let mut owned = Self {
            data: self.data.clone(),
            quantity: 0,
            flags: ItemFlags::empty(),
            key: Some(key),
            owning_inventory: Some(owner),
        };
        owned.set_quantity(quantity);
        owned
    }

    /// Clears ownership when a record leaves a ledger.
    pub(crate) fn release(mut self) -> Self {
        self.key = None;
        self.owning_inventory = None;
        self
    }
}
