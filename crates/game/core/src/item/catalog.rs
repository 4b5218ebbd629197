use super::{ItemData, ItemId, ItemRecord};

/// Read-only data table of item templates.
///
/// Pickups and the cold-start equip path resolve items by id through this trait;
/// the concrete table lives in the runtime and is filled by the content loaders.
pub trait ItemCatalog {
    fn definition(&self, id: &ItemId) -> Option<ItemData>;

    /// Returns all item definitions available in this catalog.
    fn all_definitions(&self) -> Vec<ItemData>;

    /// Instantiates a template record for `id` with the given quantity.
    fn instantiate(&self, id: &ItemId, quantity: u32) -> Option<ItemRecord> {
        self.definition(id)
            .map(|data| ItemRecord::from_data(data, quantity))
    }
}
