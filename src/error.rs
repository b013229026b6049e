use thiserror::Error;

/// Top-level error type for hullkit.
#[derive(Debug, Error)]
pub enum HullkitError {
    #[error(transparent)]
    Hull(#[from] HullError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while validating the input of a hull computation.
#[derive(Debug, Error, PartialEq)]
pub enum HullError {
    #[error("cannot build a hull from an empty point set")]
    EmptyInput,

    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

/// Errors related to the standalone helpers.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`HullkitError`].
pub type Result<T> = std::result::Result<T, HullkitError>;
