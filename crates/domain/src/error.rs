//! Common error types used across the workspace.
//!
//! Each failure class is its own typed error and converts into
//! [`GodoksaError`] via `#[from]`.

/// Top-level error for domain operations.
#[derive(Debug, thiserror::Error)]
pub enum GodoksaError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{table} table must contain at least one row")]
    EmptyTable { table: &'static str },

    #[error("region {region} appears more than once")]
    DuplicateRegion { region: &'static str },

    #[error("position ({x}%, {y}%) is outside the 0-100% canvas")]
    PositionOutOfBounds { x: u8, y: u8 },

    #[error("label must not be empty")]
    EmptyLabel,
}

/// A lookup by key did not match anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key:?} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}
