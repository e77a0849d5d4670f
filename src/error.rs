use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch at point {index}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Position of the offending point in the input.
        index: usize,
        /// Expected dimensionality (taken from the first point).
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// An explicitly configured sort dimension does not exist in the data.
    #[error("sort dimension {dimension} out of range for {dimensions}-dimensional points")]
    SortDimensionOutOfRange {
        /// Configured dimension index.
        dimension: usize,
        /// Dimensionality of the points.
        dimensions: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {index}, dimension {dimension}")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
        /// Dimension holding the bad value.
        dimension: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
