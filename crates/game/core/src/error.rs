//! Common error infrastructure for ludo-core.
//!
//! Domain-specific errors (`RollError`, `MoveError`, `LobbyError`) live next to
//! the transitions they validate. This module holds the pieces they share.
//!
//! Every rejection is returned as a value. The engine never panics on bad
//! input and never leaves a partially applied transition behind.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: a stale or out-of-turn request; refresh state and retry
/// - **Validation**: malformed input that should not be retried unchanged
/// - **Internal**: the game state disagrees with its own invariants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Another request got there first, or the client is looking at an old
    /// snapshot (wrong turn, dice already consumed).
    Recoverable,

    /// Invalid input: unknown player, token index out of range.
    Validation,

    /// The stored game violates an invariant. Indicates a bug or corruption.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all ludo-core errors.
///
/// Session layers use [`GameError::error_code`] to map rejections onto their
/// own protocol errors without matching on every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
