//! Domain error type shared by all core logic.

/// Errors produced by core validation and description building.
///
/// Variants carry the exact message surfaced to API clients, so they format
/// without any prefix.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request value failed a domain check.
    #[error("{0}")]
    Validation(String),

    /// An unexpected fault inside core logic.
    #[error("{0}")]
    Internal(String),
}
