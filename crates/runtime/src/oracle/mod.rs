//! Runtime wrappers around static loadout content.
//!
//! The data is immutable at runtime; per-character state lives in
//! [`Character`](crate::Character).
mod items;

pub use items::ItemTable;
