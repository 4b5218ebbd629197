//! Loadout configuration loader.

use std::path::Path;

use loadout_core::LoadoutConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for loadout configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a `LoadoutConfig`
    ///
    /// # Returns
    ///
    /// Returns a LoadoutConfig. Missing sections fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<LoadoutConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LoadoutConfig> {
        let config: LoadoutConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.inventory.weight_capacity.is_finite() && config.inventory.weight_capacity >= 0.0,
            "weight_capacity must be a non-negative number"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::{InventoryConfig, TransitionKind, WeaponSlot};

    #[test]
    fn parses_capacities_and_montages() {
        let config = ConfigLoader::parse(
            r#"
            [inventory]
            slots_capacity = 12
            weight_capacity = 35.5

            [montages.primary]
            equip = "AM_Rifle_Equip"
            holster = "AM_Rifle_Holster"

            [montages.melee]
            equip = "AM_Knife_Equip"
            "#,
        )
        .unwrap();

        assert_eq!(config.inventory, InventoryConfig::new(12, 35.5));
        let montages = &config.montages;
        assert_eq!(
            montages
                .get(WeaponSlot::Primary, TransitionKind::Holster)
                .map(|m| m.as_str()),
            Some("AM_Rifle_Holster")
        );
        assert!(montages.get(WeaponSlot::Melee, TransitionKind::Holster).is_none());
        assert!(montages.get(WeaponSlot::Secondary, TransitionKind::Draw).is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, LoadoutConfig::default());
    }

    #[test]
    fn rejects_negative_weight_capacity() {
        assert!(ConfigLoader::parse("[inventory]\nweight_capacity = -1.0\n").is_err());
    }
}
