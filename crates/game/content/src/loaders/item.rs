//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, ensure};
use loadout_core::{ItemData, ItemType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemData>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `ItemCatalogFile`
    ///
    /// # Returns
    ///
    /// Returns the validated item rows in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemData>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        debug!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }

    /// Parse and validate catalog text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemData>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            ensure!(
                seen.insert(item.id.as_str().to_ascii_lowercase()),
                "Duplicate item id '{}'",
                item.id
            );
            validate(item)?;
        }
        Ok(catalog.items)
    }
}

fn validate(item: &ItemData) -> LoadResult<()> {
    let numeric = &item.numeric;
    ensure!(
        numeric.weight.is_finite() && numeric.weight > 0.0,
        "Item '{}' has non-positive weight {}",
        item.id,
        numeric.weight
    );
    ensure!(
        !numeric.is_stackable || numeric.max_stack_size > 0,
        "Stackable item '{}' has max_stack_size 0",
        item.id
    );

    match item.item_type {
        ItemType::Weapon | ItemType::Melee if item.weapon.is_none() => {
            bail!("{} item '{}' is missing weapon data", item.item_type, item.id)
        }
        ItemType::Ammo if item.ammo.is_none() => {
            bail!("Ammo item '{}' is missing ammo data", item.id)
        }
        _ => Ok(()),
    }
}
