use strum::Display;

use crate::item::ItemAssetData;

/// Lifecycle of a weapon actor inside a slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponState {
    /// Spawned but not yet placed in a slot.
    #[default]
    Unequipped,
    /// Attached to its holster socket.
    Holstered,
    /// In hand; the only state in which the weapon can fire, reload or attack.
    Equipped,
}

/// Which mesh asset a weapon actor renders with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeshBinding {
    Skeletal(String),
    Static(String),
    Missing,
}

impl MeshBinding {
    /// Skeletal meshes take priority over static ones.
    pub fn from_assets(assets: &ItemAssetData) -> Self {
        match (&assets.skeletal_mesh, &assets.mesh) {
            (Some(skeletal), _) => MeshBinding::Skeletal(skeletal.clone()),
            (None, Some(mesh)) => MeshBinding::Static(mesh.clone()),
            (None, None) => MeshBinding::Missing,
        }
    }

    pub fn is_skeletal(&self) -> bool {
        matches!(self, MeshBinding::Skeletal(_))
    }
}
