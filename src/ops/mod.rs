//! Tensor operations
//!
//! Elementwise arithmetic, wrap broadcasting, transpose, slicing, and outer
//! products. Parallel-eligible operations take an [`crate::ExecPolicy`] and
//! share one chunk-partitioning scheme, so toggling the policy never changes
//! results.

mod broadcast;
mod elementwise;
mod outer;
mod shape_ops;

pub use outer::{hadamard_prod, tensor_prod};
