//! World pickups.
//!
//! A pickup holds a template record flagged as a pickup. Taking it adds as much as
//! fits to a character's inventory and keeps the rest on the ground.

use loadout_core::{AddOutcome, InventoryError, ItemCatalog, ItemId, ItemRecord};
use tracing::info;

use crate::api::{Result, RuntimeError};
use crate::character::Character;

/// What a take did to the pickup.
#[derive(Clone, Debug, PartialEq)]
pub enum PickupOutcome {
    /// Everything was added; the pickup is spent.
    Consumed { added: u32 },
    /// Some units were added; `remaining` stay on the pickup.
    Partial { added: u32, remaining: u32 },
    /// Nothing fit.
    Untouched { reason: Option<InventoryError> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    item: ItemRecord,
}

impl Pickup {
    /// Instantiates a pickup from the item table. A quantity of 0 becomes 1.
    pub fn from_catalog(catalog: &impl ItemCatalog, id: &ItemId, quantity: u32) -> Result<Self> {
        let data = catalog
            .definition(id)
            .ok_or_else(|| RuntimeError::UnknownItem(id.clone()))?;
        Ok(Self {
            item: ItemRecord::pickup(data, quantity),
        })
    }

    /// Wraps a record that left an inventory.
    pub fn from_record(record: &ItemRecord) -> Self {
        Self {
            item: record.to_pickup(),
        }
    }

    pub fn item(&self) -> &ItemRecord {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.item.quantity()
    }

    pub fn is_spent(&self) -> bool {
        self.item.quantity() == 0
    }

    /// Moves as many units as fit into `character`'s inventory.
    pub fn take(&mut self, character: &mut Character) -> PickupOutcome {
        if self.is_spent() {
            return PickupOutcome::Untouched {
                reason: Some(InventoryError::NothingToAdd),
            };
        }

        let result = character.add_item(&self.item);
        let outcome = match result.outcome {
            AddOutcome::None => PickupOutcome::Untouched {
                reason: result.reason.clone(),
            },
            AddOutcome::Partial => {
                let remaining = self.item.quantity() - result.actual_amount;
                self.item.set_quantity(remaining);
                PickupOutcome::Partial {
                    added: result.actual_amount,
                    remaining,
                }
            }
            AddOutcome::All => {
                self.item.set_quantity(0);
                PickupOutcome::Consumed {
                    added: result.actual_amount,
                }
            }
        };

        info!(character = character.name(), item = %self.item.id(), ?outcome, "pickup taken");
        outcome
    }
}
