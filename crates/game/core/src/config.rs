//! Per-character configuration: inventory capacities and weapon montages.

use crate::slots::MontageSet;

/// Capacity limits for a single inventory ledger.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Maximum number of records (stacks) the ledger may hold.
    pub slots_capacity: usize,
    /// Maximum total carried weight.
    pub weight_capacity: f32,
}

impl InventoryConfig {
    pub const DEFAULT_SLOTS_CAPACITY: usize = 20;
    pub const DEFAULT_WEIGHT_CAPACITY: f32 = 50.0;

    pub fn new(slots_capacity: usize, weight_capacity: f32) -> Self {
        Self {
            slots_capacity,
            weight_capacity,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLOTS_CAPACITY, Self::DEFAULT_WEIGHT_CAPACITY)
    }
}

/// Loadout configuration supplied when a character is constructed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadoutConfig {
    pub inventory: InventoryConfig,
    /// Equip/holster montages per weapon slot. Missing entries select the
    /// synchronous draw/holster path.
    pub montages: MontageSet,
}

impl LoadoutConfig {
    pub fn new(inventory: InventoryConfig, montages: MontageSet) -> Self {
        Self {
            inventory,
            montages,
        }
    }
}
