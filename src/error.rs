use thiserror::Error;

/// Top-level error type for the cartes library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartesError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Errors raised by scalar numeric routines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("square root of a negative value")]
    NegativeSqrt,
}

/// Errors raised when building a vector or coordinate from runtime data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("expected {expected} components, got {supplied}")]
    ComponentCountMismatch { expected: usize, supplied: usize },
}

/// Convenience type alias for results using [`CartesError`].
pub type Result<T> = std::result::Result<T, CartesError>;
