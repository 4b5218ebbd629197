//! Weapon actors: a spawned, stateful instance of a weapon item.

mod actor;
mod error;
mod state;

pub use actor::{WeaponActor, WeaponSummary, WeaponTick};
pub use error::WeaponError;
pub use state::{MeshBinding, WeaponState};
