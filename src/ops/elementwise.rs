//! Elementwise binary operations: add, sub, Hadamard product
//!
//! All three share one kernel: validate equal shapes, then combine the
//! operands pairwise at equal linear offsets, either sequentially or over
//! disjoint chunks of the output. Chunk writes never overlap, so the
//! parallel path needs no locking.

use crate::dtype::Complex64;
use crate::error::{Error, Result};
use crate::exec::ExecPolicy;
use crate::tensor::Tensor;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Combine two equal-shaped tensors pairwise with `f`
pub(crate) fn binary_map<F>(a: &Tensor, b: &Tensor, policy: &ExecPolicy, f: F) -> Result<Tensor>
where
    F: Fn(Complex64, Complex64) -> Complex64 + Sync,
{
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            expected: a.shape().to_vec(),
            got: b.shape().to_vec(),
        });
    }

    let numel = a.size();
    let mut out = vec![Complex64::ZERO; numel];

    match policy.chunk_len(numel) {
        #[cfg(feature = "rayon")]
        Some(chunk) => {
            out.par_chunks_mut(chunk)
                .zip(a.as_slice().par_chunks(chunk))
                .zip(b.as_slice().par_chunks(chunk))
                .for_each(|((out_chunk, a_chunk), b_chunk)| {
                    for ((o, &x), &y) in out_chunk.iter_mut().zip(a_chunk).zip(b_chunk) {
                        *o = f(x, y);
                    }
                });
        }
        _ => {
            for ((o, &x), &y) in out.iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
                *o = f(x, y);
            }
        }
    }

    Ok(Tensor::from_parts(out, a.layout().clone()))
}

impl Tensor {
    /// Elementwise sum of two equal-shaped tensors
    ///
    /// Fails with [`Error::ShapeMismatch`] if the shapes differ. The result
    /// is freshly allocated; neither operand is modified.
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::prelude::*;
    ///
    /// let a = Tensor::full(&[2, 2], Complex64::new(1.0, 1.0))?;
    /// let b = Tensor::full(&[2, 2], Complex64::new(2.0, 2.0))?;
    /// let sum = a.add(&b, &ExecPolicy::default())?;
    /// assert!(sum.as_slice().iter().all(|&v| v == Complex64::new(3.0, 3.0)));
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn add(&self, rhs: &Tensor, policy: &ExecPolicy) -> Result<Tensor> {
        binary_map(self, rhs, policy, |x, y| x + y)
    }

    /// Elementwise difference of two equal-shaped tensors
    pub fn sub(&self, rhs: &Tensor, policy: &ExecPolicy) -> Result<Tensor> {
        binary_map(self, rhs, policy, |x, y| x - y)
    }

    /// Hadamard (elementwise) product of two equal-shaped tensors
    pub fn hadamard(&self, rhs: &Tensor, policy: &ExecPolicy) -> Result<Tensor> {
        binary_map(self, rhs, policy, |x, y| x * y)
    }
}

impl std::ops::Add for &Tensor {
    type Output = Tensor;

    /// Operator sugar for [`Tensor::add`] with the default policy
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ. Use [`Tensor::add`] for a fallible
    /// version.
    fn add(self, rhs: &Tensor) -> Tensor {
        Tensor::add(self, rhs, &ExecPolicy::default()).expect("shape mismatch in tensor addition")
    }
}

impl std::ops::Sub for &Tensor {
    type Output = Tensor;

    /// Operator sugar for [`Tensor::sub`] with the default policy
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ. Use [`Tensor::sub`] for a fallible
    /// version.
    fn sub(self, rhs: &Tensor) -> Tensor {
        Tensor::sub(self, rhs, &ExecPolicy::default()).expect("shape mismatch in tensor subtraction")
    }
}
