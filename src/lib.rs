//! # cxtensor
//!
//! **Complex-valued n-dimensional tensors with an optional multi-threaded
//! execution path.**
//!
//! cxtensor provides a dense, row-major tensor of [`Complex64`] values with
//! shape/stride arithmetic, elementwise arithmetic, transpose, slicing,
//! wrap broadcasting, and outer products.
//!
//! ## Features
//!
//! - **Owned storage**: every operation returns a freshly allocated tensor;
//!   no aliasing views, no hidden sharing
//! - **Explicit execution policy**: parallelism is a per-call [`ExecPolicy`]
//!   value, not ambient global state
//! - **Deterministic chunking**: parallel and sequential execution produce
//!   identical results
//!
//! ## Quick Start
//!
//! ```
//! use cxtensor::prelude::*;
//!
//! let a = Tensor::full(&[2, 2], Complex64::new(1.0, 1.0))?;
//! let b = Tensor::full(&[2, 2], Complex64::new(2.0, 2.0))?;
//!
//! let sum = a.add(&b, &ExecPolicy::default())?;
//! assert_eq!(sum[0], Complex64::new(3.0, 3.0));
//!
//! // Opt in to the multi-threaded path per call.
//! let sum_par = a.add(&b, &ExecPolicy::parallel())?;
//! assert_eq!(sum_par[0], sum[0]);
//! # Ok::<(), cxtensor::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded execution for elementwise, transpose,
//!   and broadcast operations. Without it every policy degrades to the
//!   sequential path.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod exec;
pub mod ops;
pub mod tensor;

pub use dtype::Complex64;
pub use error::{Error, Result};
pub use exec::ExecPolicy;
pub use ops::{hadamard_prod, tensor_prod};
pub use tensor::{Layout, Shape, Strides, Tensor};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::Complex64;
    pub use crate::error::{Error, Result};
    pub use crate::exec::ExecPolicy;
    pub use crate::ops::{hadamard_prod, tensor_prod};
    pub use crate::tensor::{Layout, Tensor};
}
