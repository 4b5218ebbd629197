//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate.

pub mod errors;

pub use errors::{Result, RuntimeError};
