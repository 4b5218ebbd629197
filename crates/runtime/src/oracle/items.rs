//! Minimal [`loadout_core::ItemCatalog`] backed by an in-memory map.
use loadout_core::{ItemCatalog, ItemData, ItemId};
use std::collections::HashMap;

/// ItemCatalog implementation with static item definitions.
///
/// Lookups are case-insensitive, matching the data-table convention.
pub struct ItemTable {
    definitions: HashMap<String, ItemData>,
    order: Vec<String>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemData>) -> Self {
        let mut table = Self::new();
        for def in definitions {
            table.add_definition(def);
        }
        table
    }

    /// Add an item definition, replacing any row with the same id.
    pub fn add_definition(&mut self, def: ItemData) {
        let key = def.id.as_str().to_ascii_lowercase();
        if self.definitions.insert(key.clone(), def).is_none() {
            self.order.push(key);
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog for ItemTable {
    fn definition(&self, id: &ItemId) -> Option<ItemData> {
        self.definitions
            .get(&id.as_str().to_ascii_lowercase())
            .cloned()
    }

    /// Definitions in insertion order.
    fn all_definitions(&self) -> Vec<ItemData> {
        self.order
            .iter()
            .filter_map(|key| self.definitions.get(key).cloned())
            .collect()
    }
}
