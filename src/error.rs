use thiserror::Error;

/// Top-level error type for the geoboard kernel.
#[derive(Debug, Error)]
pub enum GeoboardError {
    #[error(transparent)]
    Construct(#[from] ConstructError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised by construct factories at creation time.
#[derive(Debug, Error)]
pub enum ConstructError {
    #[error("cannot create {construct}: parent {index} has type '{found}', expected a point")]
    InvalidParentType {
        construct: &'static str,
        index: usize,
        found: &'static str,
    },
}

/// Errors related to the board's entity store and dependency graph.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("point is not free: {0}")]
    NotAFreePoint(String),

    #[error("dependency registration would create a cycle")]
    DependencyCycle,
}

/// Convenience type alias for results using [`GeoboardError`].
pub type Result<T> = std::result::Result<T, GeoboardError>;
