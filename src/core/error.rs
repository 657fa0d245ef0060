//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the gameplay engine.
///
/// Most misses are soft outcomes rather than errors: an event that matches
/// no rule returns `None`, and cancelling an unknown scheduled event is a
/// no-op. Errors are reserved for configuration mistakes that would
/// otherwise be masked silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameplayError {
    /// A rule with the same name is already registered.
    #[error("duplicate rule name: {0}")]
    DuplicateRule(String),
}

/// Result type alias for engine operations.
pub type GameplayResult<T> = Result<T, GameplayError>;
