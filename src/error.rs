//! Error types for cxtensor

use thiserror::Error;

/// Result type alias using cxtensor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cxtensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape is empty or contains a zero extent
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// The offending shape
        shape: Vec<usize>,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Data length does not match the element count implied by the shape
    #[error("Size mismatch: shape implies {expected} elements, got {got}")]
    SizeMismatch {
        /// Element count implied by the shape
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// Shape mismatch between operands of an elementwise operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Coordinate vector length does not match the tensor's rank
    #[error("Rank mismatch: tensor has rank {expected}, got {got} coordinates")]
    RankMismatch {
        /// The tensor's rank
        expected: usize,
        /// Length of the supplied coordinate vector
        got: usize,
    },

    /// Coordinate out of bounds along one dimension
    #[error("Index {index} out of bounds for dimension {dim} of size {size}")]
    IndexOutOfBounds {
        /// The invalid coordinate
        index: usize,
        /// Dimension the coordinate addresses
        dim: usize,
        /// Extent of that dimension
        size: usize,
    },

    /// Axis list is not a permutation of the tensor's dimensions
    #[error("Invalid permutation {axes:?} for tensor with {ndim} dimensions")]
    InvalidPermutation {
        /// The offending axis list
        axes: Vec<usize>,
        /// Number of dimensions
        ndim: usize,
    },

    /// Slice range invalid along one dimension
    #[error("Invalid range [{start}, {end}) for dimension {dim} of size {size}")]
    InvalidRange {
        /// Dimension the range addresses
        dim: usize,
        /// Inclusive range start
        start: usize,
        /// Exclusive range end
        end: usize,
        /// Extent of that dimension
        size: usize,
    },

    /// Operand ranks incompatible for wrap broadcasting
    #[error("Cannot broadcast shape {rhs:?} onto {lhs:?}: operand rank exceeds target rank")]
    BroadcastError {
        /// Target (left-hand side) shape
        lhs: Vec<usize>,
        /// Operand (right-hand side) shape
        rhs: Vec<usize>,
    },
}
