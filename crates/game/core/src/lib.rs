//! Deterministic loadout logic: inventory ledger, weapon actors and weapon slots.
//!
//! `loadout-core` holds the rules only. It performs no I/O and owns no clock:
//! animation completion and elapsed time are fed in by the runtime through
//! [`slots::CharacterContext`] and the `tick` methods. Content loading lives in
//! `loadout-content`, and the per-frame driver in `loadout-runtime`.
pub mod ammo;
pub mod config;
pub mod error;
pub mod hud;
pub mod inventory;
pub mod item;
pub mod slots;
pub mod weapon;

pub use ammo::AmmoSource;
pub use config::{InventoryConfig, LoadoutConfig};
pub use error::{ErrorSeverity, GameError};
pub use hud::{HudEvent, HudLog, HudSink};
pub use inventory::{AddOutcome, AddResult, InventoryError, InventoryEvent, InventoryLedger};
pub use item::{
    AmmoData, AmmoType, InventoryId, ItemCatalog, ItemData, ItemFlags, ItemId, ItemKey,
    ItemNumericData, ItemQuality, ItemRecord, ItemType, WeaponCategory, WeaponData,
};
pub use slots::{
    AnimationState, CharacterContext, MontageHandle, MontagePlayer, MontageRequest, MontageSet,
    SlotError, TransitionKind, TransitionOutcome, TransitionRequest, TransitionToken, WeaponSlot,
    WeaponSlots,
};
pub use weapon::{WeaponActor, WeaponError, WeaponState, WeaponSummary};
