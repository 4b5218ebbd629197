//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, the inventory ledger and the weapon slots
//! so clients can bubble them up with consistent context.
use thiserror::Error;

use loadout_core::{InventoryError, ItemId, ItemKey, SlotError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("failed to load content: {0}")]
    Content(String),

    #[error("item {0} is not in the item table")]
    UnknownItem(ItemId),

    #[error("{0} is not in the inventory")]
    ItemNotFound(ItemKey),

    #[error("dropping zero units of {0}")]
    NothingToDrop(ItemKey),

    #[error("item {0} cannot be discarded")]
    NotDiscardable(ItemId),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Slot(#[from] SlotError),
}
