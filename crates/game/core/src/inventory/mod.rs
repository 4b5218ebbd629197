//! Inventory ledger: weight- and slot-bounded stacking of item records.
//!
//! The ledger owns promoted clones of the records it is given and reports every
//! add as a structured [`AddResult`]. Nothing here panics or escalates: capacity
//! violations are ordinary outcomes.

mod error;
mod event;
mod ledger;
mod result;

pub use error::InventoryError;
pub use event::InventoryEvent;
pub use ledger::{InventoryLedger, WEIGHT_EPSILON};
pub use result::{AddOutcome, AddResult};
