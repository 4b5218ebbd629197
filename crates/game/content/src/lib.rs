//! Data-driven content definitions and loaders.
//!
//! This crate reads the static data a loadout is built from:
//! - Item catalogs (data-driven via RON)
//! - Loadout configuration: inventory capacities and weapon montages (TOML)
//!
//! Content is consumed by the runtime's item table and never appears in a ledger
//! directly: records are always instantiated from the loaded rows.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader, LoadResult};
