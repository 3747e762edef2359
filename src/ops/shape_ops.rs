//! Transpose and slicing
//!
//! Both operations copy into fresh storage. Transpose is gather-form: every
//! destination offset is unraveled in the destination shape, mapped through
//! the axis permutation, and read from the source via its strides. Because
//! the destination drives the loop, parallel chunks write only their own
//! contiguous slice of the output.

use crate::dtype::Complex64;
use crate::error::{Error, Result};
use crate::exec::ExecPolicy;
use crate::tensor::{Layout, Shape, Tensor};
use smallvec::SmallVec;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Source linear offset feeding destination offset `dst`
///
/// `axes[i]` names the source dimension that destination dimension `i` was
/// taken from, so source coordinates are the destination coordinates
/// scattered through `axes`.
#[inline]
fn gather_offset(dst: usize, dst_layout: &Layout, src_layout: &Layout, axes: &[usize]) -> usize {
    let dst_coords = dst_layout.unravel(dst);
    let mut src_coords: Shape = SmallVec::from_elem(0, axes.len());
    for (i, &axis) in axes.iter().enumerate() {
        src_coords[axis] = dst_coords[i];
    }
    src_layout.offset_unchecked(&src_coords)
}

impl Tensor {
    /// Transpose (permute) the tensor's dimensions
    ///
    /// `axes` must be a permutation of `0..rank`; the result's shape is
    /// `shape[axes[i]]` per dimension. Transposing twice with a permutation
    /// and its inverse returns the original tensor.
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::prelude::*;
    ///
    /// let data = (0..6).map(|i| Complex64::new(i as f32, 0.0)).collect();
    /// let t = Tensor::from_vec(data, &[2, 3])?;
    /// let tt = t.transpose(&[1, 0], &ExecPolicy::default())?;
    /// assert_eq!(tt.shape(), &[3, 2]);
    /// assert_eq!(tt[1], t[3]);
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn transpose(&self, axes: &[usize], policy: &ExecPolicy) -> Result<Tensor> {
        let dst_layout = self.layout().permute(axes)?;
        let numel = self.size();
        let mut out = vec![Complex64::ZERO; numel];

        match policy.chunk_len(numel) {
            #[cfg(feature = "rayon")]
            Some(chunk) => {
                out.par_chunks_mut(chunk).enumerate().for_each(|(ci, out_chunk)| {
                    let base = ci * chunk;
                    for (k, o) in out_chunk.iter_mut().enumerate() {
                        let src = gather_offset(base + k, &dst_layout, self.layout(), axes);
                        *o = self[src];
                    }
                });
            }
            _ => {
                for (dst, o) in out.iter_mut().enumerate() {
                    let src = gather_offset(dst, &dst_layout, self.layout(), axes);
                    *o = self[src];
                }
            }
        }

        Ok(Tensor::from_parts(out, dst_layout))
    }

    /// Copy the sub-tensor covering `[start[d], end[d])` along every dimension
    ///
    /// Both coordinate vectors must have length equal to the rank, with
    /// `start[d] < end[d] <= shape[d]` for every dimension; the result's
    /// shape is `end[d] - start[d]`. All dimensions are sliced, not just the
    /// first.
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::prelude::*;
    ///
    /// let data = (0..9).map(|i| Complex64::new(i as f32, 0.0)).collect();
    /// let t = Tensor::from_vec(data, &[3, 3])?;
    /// // Lower-right 2x2 block: rows 1..3, cols 1..3
    /// let block = t.slice(&[1, 1], &[3, 3])?;
    /// assert_eq!(block.shape(), &[2, 2]);
    /// assert_eq!(block[0], Complex64::new(4.0, 0.0));
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn slice(&self, start: &[usize], end: &[usize]) -> Result<Tensor> {
        let rank = self.rank();
        if start.len() != rank {
            return Err(Error::RankMismatch {
                expected: rank,
                got: start.len(),
            });
        }
        if end.len() != rank {
            return Err(Error::RankMismatch {
                expected: rank,
                got: end.len(),
            });
        }

        let mut out_shape: Shape = SmallVec::with_capacity(rank);
        for (dim, ((&s, &e), &extent)) in
            start.iter().zip(end.iter()).zip(self.shape().iter()).enumerate()
        {
            if s >= e || e > extent {
                return Err(Error::InvalidRange {
                    dim,
                    start: s,
                    end: e,
                    size: extent,
                });
            }
            out_shape.push(e - s);
        }

        let out_layout = Layout::contiguous(&out_shape)?;
        let mut out = Vec::with_capacity(out_layout.elem_count());
        let mut src_coords: Shape = SmallVec::from_elem(0, rank);
        for dst in 0..out_layout.elem_count() {
            let dst_coords = out_layout.unravel(dst);
            for (d, (&c, &s)) in dst_coords.iter().zip(start.iter()).enumerate() {
                src_coords[d] = c + s;
            }
            out.push(self[self.layout().offset_unchecked(&src_coords)]);
        }

        Ok(Tensor::from_parts(out, out_layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota(shape: &[usize]) -> Tensor {
        let n: usize = shape.iter().product();
        let data = (0..n).map(|i| Complex64::new(i as f32, 0.0)).collect();
        Tensor::from_vec(data, shape).unwrap()
    }

    #[test]
    fn test_transpose_2d() {
        let t = iota(&[2, 3]);
        let tt = t.transpose(&[1, 0], &ExecPolicy::default()).unwrap();
        assert_eq!(tt.shape(), &[3, 2]);
        // Column-major walk of the original
        let values: Vec<f32> = tt.as_slice().iter().map(|v| v.re).collect();
        assert_eq!(values, [0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    }

    #[test]
    fn test_transpose_identity_permutation() {
        let t = iota(&[2, 3, 4]);
        let same = t.transpose(&[0, 1, 2], &ExecPolicy::default()).unwrap();
        assert_eq!(same, t);
    }

    #[test]
    fn test_transpose_inverse_roundtrip() {
        let t = iota(&[2, 3, 4]);
        let axes = [2, 0, 1];
        // inverse[axes[i]] = i
        let mut inverse = [0usize; 3];
        for (i, &a) in axes.iter().enumerate() {
            inverse[a] = i;
        }
        let policy = ExecPolicy::default();
        let roundtrip = t
            .transpose(&axes, &policy)
            .unwrap()
            .transpose(&inverse, &policy)
            .unwrap();
        assert_eq!(roundtrip, t);
    }

    #[test]
    fn test_transpose_rejects_bad_axes() {
        let t = iota(&[2, 3]);
        let policy = ExecPolicy::default();
        assert!(t.transpose(&[0], &policy).is_err());
        assert!(t.transpose(&[0, 0], &policy).is_err());
        assert!(t.transpose(&[0, 2], &policy).is_err());
    }

    #[test]
    fn test_slice_all_dims() {
        // 3x3: slicing must restrict both dimensions
        let t = iota(&[3, 3]);
        let block = t.slice(&[1, 1], &[3, 3]).unwrap();
        assert_eq!(block.shape(), &[2, 2]);
        let values: Vec<f32> = block.as_slice().iter().map(|v| v.re).collect();
        assert_eq!(values, [4.0, 5.0, 7.0, 8.0]);
    }

    #[test]
    fn test_slice_full_range_is_copy() {
        let t = iota(&[2, 4]);
        let copy = t.slice(&[0, 0], &[2, 4]).unwrap();
        assert_eq!(copy, t);
    }

    #[test]
    fn test_slice_errors() {
        let t = iota(&[3, 3]);
        assert!(matches!(t.slice(&[0], &[1, 1]), Err(Error::RankMismatch { .. })));
        assert!(matches!(t.slice(&[0, 0], &[1]), Err(Error::RankMismatch { .. })));
        // empty range
        assert!(matches!(
            t.slice(&[1, 1], &[1, 3]),
            Err(Error::InvalidRange { dim: 0, .. })
        ));
        // end past the extent
        assert!(matches!(
            t.slice(&[0, 0], &[2, 4]),
            Err(Error::InvalidRange { dim: 1, .. })
        ));
    }
}
