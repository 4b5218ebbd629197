//! Common error infrastructure for loadout-core.
//!
//! This module provides shared types and traits used across all error types in the crate.
//! Domain-specific errors (`InventoryError`, `SlotError`, `WeaponError`) are defined in
//! their respective modules alongside the operations they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Never Fatal**: Rejections describe an operation that did not happen; the
//!   pre-operation state is always preserved
//! - **Severity Classification**: Errors are categorized for logging and recovery

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Contention with an in-flight animation or timer; retrying later may succeed
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Reserved; nothing in the loadout core is fatal to the process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the blocking condition clears.
    ///
    /// Examples: animation in flight, weapon cooling down
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: slot already occupied, item type not accepted by slot
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: stale completion token, missing actor for the current slot
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all loadout-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
