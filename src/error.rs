use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// The tree operations themselves never fail. These errors come from checked constructors that
/// validate caller input before it reaches the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdIndexError {
    #[error("Expected {expected} coordinates, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Bounds are inverted on axis {axis}: min is greater than max.")]
    InvertedBounds { axis: usize },

    #[error("Axis {axis} out of range for a tree of dimension {dims}.")]
    AxisOutOfRange { axis: usize, dims: usize },
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
