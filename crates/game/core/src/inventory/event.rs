use crate::item::{ItemId, ItemKey};

/// Structural change recorded by the ledger.
///
/// The ledger queues one event per change; observers drain the queue with
/// [`InventoryLedger::drain_events`](super::InventoryLedger::drain_events) and treat
/// any event as "inventory updated".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryEvent {
    /// A new record was created.
    Added { key: ItemKey, id: ItemId, amount: u32 },
    /// An existing stack grew.
    Stacked { key: ItemKey, id: ItemId, amount: u32 },
    /// Units were removed from a record that is still present.
    Reduced { key: ItemKey, id: ItemId, amount: u32 },
    /// A record left the ledger.
    Removed { key: ItemKey, id: ItemId },
    /// Units moved from one stack into a new one.
    Split {
        from: ItemKey,
        into: ItemKey,
        amount: u32,
    },
    /// Slot or weight capacity changed.
    CapacityChanged,
}

impl InventoryEvent {
    pub fn key(&self) -> Option<ItemKey> {
        match self {
            InventoryEvent::Added { key, .. }
            | InventoryEvent::Stacked { key, .. }
            | InventoryEvent::Reduced { key, .. }
            | InventoryEvent::Removed { key, .. } => Some(*key),
            InventoryEvent::Split { into, .. } => Some(*into),
            InventoryEvent::CapacityChanged => None,
        }
    }
}
