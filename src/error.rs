use thiserror::Error;

/// Top-level error type for segrect.
#[derive(Debug, Error)]
pub enum SegrectError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coincident points at ({x}, {y}) do not define a line")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors related to queries.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`SegrectError`].
pub type Result<T> = std::result::Result<T, SegrectError>;
