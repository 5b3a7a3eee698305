use thiserror::Error;

/// Invalid input or configuration detected before partitioning starts.
/// These are never transient: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("points must be 2-dimensional, got {0} columns")]
    InvalidDimension(usize),
    #[error("nbreaks must be at least 1, got {0}")]
    InvalidBreaks(usize),
    #[error("pcrit must be in (0, 1), got {0}")]
    InvalidConfidence(f64),
    #[error("point set is empty")]
    EmptyPointSet,
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}
