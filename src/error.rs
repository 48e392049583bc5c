use thiserror::Error;

/// Top-level error type for the Tessella geometry kernel.
#[derive(Debug, Error)]
pub enum TessellaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to room boundaries and the room store.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("{actual} points are not enough, at least {required} required")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("boundary is not closed")]
    NotClosed,

    #[error("boundary is already closed")]
    AlreadyClosed,

    #[error("point index {index} is out of range for a boundary of {len} points")]
    PointOutOfRange { index: usize, len: usize },

    #[error("plane not found in room store")]
    PlaneNotFound,
}

/// Errors related to the tile catalog on disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`TessellaError`].
pub type Result<T> = std::result::Result<T, TessellaError>;
