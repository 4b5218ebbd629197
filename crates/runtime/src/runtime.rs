//! Runtime configuration and the content-backed entry point.

use std::collections::HashMap;

use loadout_content::ContentFactory;
use loadout_core::{ItemCatalog, ItemId, ItemRecord, LoadoutConfig};
use tracing::info;

use crate::api::{Result, RuntimeError};
use crate::character::Character;
use crate::oracle::ItemTable;
use crate::pickup::Pickup;

/// Settings of the runtime itself, separate from per-character content.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Montage name → seconds it plays for.
    pub montage_seconds: HashMap<String, f32>,
    /// Duration of montages missing from `montage_seconds`.
    pub default_montage_seconds: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            montage_seconds: HashMap::new(),
            default_montage_seconds: 0.5,
        }
    }
}

impl RuntimeConfig {
    pub fn with_montage(mut self, montage: impl Into<String>, seconds: f32) -> Self {
        self.montage_seconds.insert(montage.into(), seconds);
        self
    }
}

/// Loaded content plus runtime settings. Spawns characters and pickups.
pub struct Runtime {
    items: ItemTable,
    loadout: LoadoutConfig,
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new(items: ItemTable, loadout: LoadoutConfig, config: RuntimeConfig) -> Self {
        Self {
            items,
            loadout,
            config,
        }
    }

    /// Loads `config.toml` and `items.ron` through the content factory.
    pub fn from_content(factory: &ContentFactory, config: RuntimeConfig) -> Result<Self> {
        let loadout = factory
            .load_config()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        let items = factory
            .load_items()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;

        info!(
            data_dir = %factory.data_dir().display(),
            items = items.len(),
            slots = loadout.inventory.slots_capacity,
            weight = loadout.inventory.weight_capacity,
            "content loaded"
        );
        Ok(Self::new(ItemTable::from_definitions(items), loadout, config))
    }

    pub fn items(&self) -> &ItemTable {
        &self.items
    }

    pub fn loadout(&self) -> &LoadoutConfig {
        &self.loadout
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn spawn_character(&self, name: impl Into<String>) -> Character {
        Character::new(name, &self.loadout, &self.config)
    }

    /// Template record for `id`, clamped to its stacking limits.
    pub fn instantiate(&self, id: &str, quantity: u32) -> Result<ItemRecord> {
        let id = ItemId::from(id);
        self.items
            .instantiate(&id, quantity)
            .ok_or(RuntimeError::UnknownItem(id))
    }

    pub fn spawn_pickup(&self, id: &str, quantity: u32) -> Result<Pickup> {
        Pickup::from_catalog(&self.items, &ItemId::from(id), quantity)
    }
}
