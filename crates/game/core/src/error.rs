//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`StateError`, `ActionError`, `StatusError`) live
//! next to the code that produces them. This module provides the shared
//! severity classification the runtime uses to decide whether a failure is
//! absorbed as a no-op or ends the session.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action was a no-op; the turn continues
/// - **Validation**: invalid input rejected at construction time
/// - **Internal**: an invariant of the simulation was broken
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - the actor simply does nothing this turn.
    ///
    /// Examples: destination blocked, nothing to pick up
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty item name, second hero
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    ///
    /// Examples: internally generated identity not found in the store
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
}

/// Common trait for all game-core errors.
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
