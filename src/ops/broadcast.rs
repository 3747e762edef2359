//! Wrap broadcasting
//!
//! The broadcast rule here tiles the operand's flat index space modulo the
//! target's size rather than aligning trailing dimensions: element `i` of
//! the operand lands at `i % target.size()`. Several source indices can map
//! to the same target slot, so the parallel path accumulates each chunk into
//! a private partial buffer and merges the partials in chunk order instead
//! of locking individual slots. For a fixed policy the result is independent
//! of thread scheduling; across policies, per-slot sums may differ from the
//! sequential result in the last floating-point bit because grouping changes
//! the accumulation order.

use crate::dtype::Complex64;
use crate::error::{Error, Result};
use crate::exec::ExecPolicy;
use crate::tensor::Tensor;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

impl Tensor {
    /// Add the (possibly larger) operand into a copy of this tensor, wrapping
    /// the operand's flat index modulo this tensor's size
    ///
    /// Fails with [`Error::BroadcastError`] when the operand's rank exceeds
    /// this tensor's rank; extents are not compared, matching the loose
    /// contract of wrap broadcasting. With equal shapes this is a plain
    /// elementwise add.
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::prelude::*;
    ///
    /// let target = Tensor::zeros(&[2])?;
    /// let data = (1..=4).map(|i| Complex64::new(i as f32, 0.0)).collect();
    /// let source = Tensor::from_vec(data, &[4])?;
    /// let out = target.broadcast_add(&source, &ExecPolicy::default())?;
    /// // slot 0 <- 1 + 3, slot 1 <- 2 + 4
    /// assert_eq!(out[0], Complex64::new(4.0, 0.0));
    /// assert_eq!(out[1], Complex64::new(6.0, 0.0));
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn broadcast_add(&self, obj: &Tensor, policy: &ExecPolicy) -> Result<Tensor> {
        if obj.rank() > self.rank() {
            return Err(Error::BroadcastError {
                lhs: self.shape().to_vec(),
                rhs: obj.shape().to_vec(),
            });
        }

        let numel = self.size();
        let mut out = self.as_slice().to_vec();

        match policy.chunk_len(obj.size()) {
            #[cfg(feature = "rayon")]
            Some(chunk) => {
                // One partial accumulator per chunk, merged in chunk order.
                let partials: Vec<Vec<Complex64>> = obj
                    .as_slice()
                    .par_chunks(chunk)
                    .enumerate()
                    .map(|(ci, src_chunk)| {
                        let mut acc = vec![Complex64::ZERO; numel];
                        let base = ci * chunk;
                        for (k, &v) in src_chunk.iter().enumerate() {
                            let slot = (base + k) % numel;
                            acc[slot] += v;
                        }
                        acc
                    })
                    .collect();

                for partial in partials {
                    for (o, &p) in out.iter_mut().zip(&partial) {
                        *o += p;
                    }
                }
            }
            _ => {
                for (i, &v) in obj.as_slice().iter().enumerate() {
                    let slot = i % numel;
                    out[slot] += v;
                }
            }
        }

        Ok(Tensor::from_parts(out, self.layout().clone()))
    }
}
