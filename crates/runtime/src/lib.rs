//! Runtime driver for loadout characters.
//!
//! This crate wires the deterministic `loadout-core` rules to loaded content and
//! to a clock. Consumers build a [`Runtime`] from a content directory, spawn
//! [`Character`]s and [`Pickup`]s from it, and call [`Character::tick`] once per
//! frame.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the configuration and content-backed entry point
//! - [`character`] owns one character's inventory, weapon slots and HUD log
//! - [`animation`] plays montages for configured durations
//! - [`pickup`] implements world pickups and drops
//! - [`oracle`] provides the item table the pickups instantiate from
pub mod animation;
pub mod api;
pub mod character;
pub mod oracle;
pub mod pickup;
pub mod runtime;

pub use animation::TimedMontagePlayer;
pub use api::{Result, RuntimeError};
pub use character::Character;
pub use oracle::ItemTable;
pub use pickup::{Pickup, PickupOutcome};
pub use runtime::{Runtime, RuntimeConfig};
