use super::InventoryError;

/// How much of an add request was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddOutcome {
    None,
    Partial,
    All,
}

/// Structured result of [`InventoryLedger::add_item`](super::InventoryLedger::add_item).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddResult {
    pub outcome: AddOutcome,
    /// Units actually committed to the ledger.
    pub actual_amount: u32,
    /// Human-readable summary for the HUD and logs.
    pub message: String,
    /// Capacity or validation limit that stopped placement, if any.
    pub reason: Option<InventoryError>,
}

impl AddResult {
    pub fn added_none(reason: InventoryError, message: String) -> Self {
        Self {
            outcome: AddOutcome::None,
            actual_amount: 0,
            message,
            reason: Some(reason),
        }
    }

    pub fn added_partial(amount: u32, reason: InventoryError, message: String) -> Self {
        Self {
            outcome: AddOutcome::Partial,
            actual_amount: amount,
            message,
            reason: Some(reason),
        }
    }

    pub fn added_all(amount: u32, message: String) -> Self {
        Self {
            outcome: AddOutcome::All,
            actual_amount: amount,
            message,
            reason: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.outcome == AddOutcome::None
    }

    pub fn is_partial(&self) -> bool {
        self.outcome == AddOutcome::Partial
    }

    pub fn is_all(&self) -> bool {
        self.outcome == AddOutcome::All
    }
}
