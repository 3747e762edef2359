//! Outer (tensor) product and the free-function operation surface

use crate::error::Result;
use crate::exec::ExecPolicy;
use crate::tensor::{Layout, Shape, Tensor};
use smallvec::SmallVec;

impl Tensor {
    /// Outer product: result shape is the concatenation of both shapes
    ///
    /// The element addressed by the concatenated coordinates of `i` in
    /// `self` and `j` in `rhs` is `self[i] * rhs[j]`. With both operands
    /// row-major that coordinate pair lands exactly at linear offset
    /// `i * rhs.size() + j`, so the result is a flat pairwise product.
    /// Quadratic in element count; always sequential.
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::prelude::*;
    ///
    /// let a = Tensor::from_vec(
    ///     vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
    ///     &[2],
    /// )?;
    /// let b = Tensor::from_vec(
    ///     vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)],
    ///     &[2],
    /// )?;
    /// let p = a.outer(&b);
    /// assert_eq!(p.shape(), &[2, 2]);
    /// assert_eq!(p[3], Complex64::new(8.0, 0.0));
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn outer(&self, rhs: &Tensor) -> Tensor {
        let mut shape: Shape = SmallVec::with_capacity(self.rank() + rhs.rank());
        shape.extend_from_slice(self.shape());
        shape.extend_from_slice(rhs.shape());
        // Concatenating two valid shapes cannot fail validation.
        let layout = Layout::contiguous(&shape).expect("concatenated shape is valid");

        let mut out = Vec::with_capacity(self.size() * rhs.size());
        for &x in self.as_slice() {
            for &y in rhs.as_slice() {
                out.push(x * y);
            }
        }

        Tensor::from_parts(out, layout)
    }
}

/// Elementwise (Hadamard) product of two equal-shaped tensors
///
/// Free-function form of [`Tensor::hadamard`] for callers composing tensor
/// algebra out of the operation surface rather than methods.
pub fn hadamard_prod(a: &Tensor, b: &Tensor, policy: &ExecPolicy) -> Result<Tensor> {
    a.hadamard(b, policy)
}

/// Outer (tensor) product of two tensors
///
/// Free-function form of [`Tensor::outer`].
pub fn tensor_prod(a: &Tensor, b: &Tensor) -> Tensor {
    a.outer(b)
}
