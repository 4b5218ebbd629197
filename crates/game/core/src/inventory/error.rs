//! Inventory errors.
//!
//! Capacity violations and invalid references raised by the ledger. None of them is
//! fatal: each one describes an operation that did not (fully) happen.

use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemKey;

/// Errors raised by [`InventoryLedger`](super::InventoryLedger) operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// The add request carried no units.
    #[error("nothing to add")]
    NothingToAdd,

    /// The item has a zero, negative or non-finite single weight.
    #[error("item has invalid weight {weight}")]
    InvalidWeight { weight: f32 },

    /// Adding would overflow the weight capacity.
    #[error("would overflow weight capacity ({total:.2}/{capacity:.2})")]
    WeightCapacityExceeded { total: f32, capacity: f32 },

    /// Adding a record would overflow the slot capacity.
    #[error("would overflow slots capacity (max: {capacity})")]
    SlotsCapacityExceeded { capacity: usize },

    /// No record with this key is owned by the ledger.
    #[error("{0} not found in inventory")]
    ItemNotFound(ItemKey),

    /// Split amount must leave both stacks non-empty.
    #[error("cannot split {amount} from {key} holding {quantity}")]
    InvalidSplit {
        key: ItemKey,
        amount: u32,
        quantity: u32,
    },

    /// The weight capacity cannot shrink below the carried weight.
    #[error("capacity {requested} is below current usage {in_use}")]
    CapacityBelowUsage { requested: f32, in_use: f32 },

    /// The slot capacity cannot shrink below the number of records held.
    #[error("slots capacity {requested} is below {in_use} records in use")]
    SlotsBelowUsage { requested: usize, in_use: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            // Capacity errors are validation errors - invalid to add more
            NothingToAdd
            | InvalidWeight { .. }
            | WeightCapacityExceeded { .. }
            | SlotsCapacityExceeded { .. }
            | InvalidSplit { .. }
            | CapacityBelowUsage { .. }
            | SlotsBelowUsage { .. } => ErrorSeverity::Validation,

            // Callers only hold keys the ledger handed out
            ItemNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            NothingToAdd => "INVENTORY_NOTHING_TO_ADD",
            InvalidWeight { .. } => "INVENTORY_INVALID_WEIGHT",
            WeightCapacityExceeded { .. } => "INVENTORY_WEIGHT_CAPACITY_EXCEEDED",
            SlotsCapacityExceeded { .. } => "INVENTORY_SLOTS_CAPACITY_EXCEEDED",
            ItemNotFound(_) => "INVENTORY_ITEM_NOT_FOUND",
            InvalidSplit { .. } => "INVENTORY_INVALID_SPLIT",
            CapacityBelowUsage { .. } => "INVENTORY_CAPACITY_BELOW_USAGE",
            SlotsBelowUsage { .. } => "INVENTORY_SLOTS_BELOW_USAGE",
        }
    }
}
