//! Item records, data-table rows and identifiers.

mod catalog;
mod data;
mod ids;
mod record;

pub use catalog::ItemCatalog;
pub use data::{
    AmmoData, AmmoType, ItemAssetData, ItemData, ItemNumericData, ItemQuality, ItemTextData,
    ItemType, WeaponCategory, WeaponData,
};
pub use ids::{InventoryId, ItemId, ItemKey};
pub use record::{ItemFlags, ItemRecord};
