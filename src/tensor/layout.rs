//! Layout: shape and stride arithmetic for tensor memory layout

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: element offsets between consecutive elements along each dimension
/// Strides are in ELEMENTS, not bytes
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes the row-major memory layout of a tensor
///
/// Elements are stored in a contiguous buffer with the last dimension varying
/// fastest. The linear offset of the element at coordinates
/// `[i0, i1, ..., in]` is:
///
/// ```text
/// i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
/// ```
///
/// where `strides[d]` is the product of all extents after dimension `d`.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
}

impl Layout {
    /// Create a contiguous (row-major/C-order) layout from a shape
    ///
    /// Fails if the shape is empty or any extent is zero.
    ///
    /// # Example
    /// ```
    /// use cxtensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4])?;
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn contiguous(shape: &[usize]) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::InvalidShape {
                shape: shape.to_vec(),
                reason: "shape must have at least one dimension",
            });
        }
        if shape.contains(&0) {
            return Err(Error::InvalidShape {
                shape: shape.to_vec(),
                reason: "every extent must be positive",
            });
        }

        let shape: Shape = shape.iter().copied().collect();
        let strides = Self::compute_contiguous_strides(&shape);
        Ok(Self { shape, strides })
    }

    /// Compute contiguous strides for a given shape (row-major order)
    fn compute_contiguous_strides(shape: &[usize]) -> Strides {
        let mut strides: Strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1usize;

        // Last dimension varies fastest
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim;
        }

        strides.reverse();
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Compute the linear offset for the given coordinates
    ///
    /// Fails with [`Error::RankMismatch`] if `coords.len()` differs from the
    /// rank, and with [`Error::IndexOutOfBounds`] if any coordinate is not
    /// within its dimension's extent.
    pub fn linear_index(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.ndim() {
            return Err(Error::RankMismatch {
                expected: self.ndim(),
                got: coords.len(),
            });
        }

        for (dim, (&idx, &extent)) in coords.iter().zip(self.shape.iter()).enumerate() {
            if idx >= extent {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    dim,
                    size: extent,
                });
            }
        }

        Ok(self.offset_unchecked(coords))
    }

    /// Linear offset without validation
    ///
    /// Callers must guarantee `coords.len() == self.ndim()` and every
    /// coordinate in range.
    #[inline]
    pub(crate) fn offset_unchecked(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.ndim());
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(&idx, &stride)| idx * stride)
            .sum()
    }

    /// Recover the coordinates of a linear offset (inverse of [`Self::linear_index`])
    ///
    /// Divides by successive strides, most-significant dimension first.
    pub fn unravel(&self, linear: usize) -> Shape {
        debug_assert!(linear < self.elem_count());
        let mut coords: Shape = SmallVec::with_capacity(self.ndim());
        let mut rem = linear;
        for &stride in self.strides.iter() {
            coords.push(rem / stride);
            rem %= stride;
        }
        coords
    }

    /// Layout of this shape permuted by `axes`: `new_shape[i] = shape[axes[i]]`
    ///
    /// `axes` must be a permutation of `0..ndim`. The returned layout is
    /// contiguous in the permuted shape (copy semantics, not a strided view).
    pub fn permute(&self, axes: &[usize]) -> Result<Self> {
        let ndim = self.ndim();
        if axes.len() != ndim {
            return Err(Error::InvalidPermutation {
                axes: axes.to_vec(),
                ndim,
            });
        }

        let mut seen = vec![false; ndim];
        for &axis in axes {
            if axis >= ndim || seen[axis] {
                return Err(Error::InvalidPermutation {
                    axes: axes.to_vec(),
                    ndim,
                });
            }
            seen[axis] = true;
        }

        let new_shape: Shape = axes.iter().map(|&a| self.shape[a]).collect();
        let strides = Self::compute_contiguous_strides(&new_shape);
        Ok(Self {
            shape: new_shape,
            strides,
        })
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape.as_slice())
            .field("strides", &self.strides.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_strides() {
        let layout = Layout::contiguous(&[2, 3, 4]).unwrap();
        assert_eq!(layout.strides(), &[12, 4, 1]);
        assert_eq!(layout.elem_count(), 24);
        assert_eq!(layout.ndim(), 3);

        let layout = Layout::contiguous(&[5]).unwrap();
        assert_eq!(layout.strides(), &[1]);
    }

    #[test]
    fn test_rejects_empty_and_zero_shapes() {
        assert!(Layout::contiguous(&[]).is_err());
        assert!(Layout::contiguous(&[2, 0, 3]).is_err());
    }

    #[test]
    fn test_linear_index() {
        let layout = Layout::contiguous(&[2, 3]).unwrap();
        assert_eq!(layout.linear_index(&[0, 0]).unwrap(), 0);
        assert_eq!(layout.linear_index(&[0, 2]).unwrap(), 2);
        assert_eq!(layout.linear_index(&[1, 0]).unwrap(), 3);
        assert_eq!(layout.linear_index(&[1, 2]).unwrap(), 5);
    }

    #[test]
    fn test_linear_index_errors() {
        let layout = Layout::contiguous(&[2, 3]).unwrap();
        assert!(matches!(
            layout.linear_index(&[1]),
            Err(Error::RankMismatch { expected: 2, got: 1 })
        ));
        assert!(matches!(
            layout.linear_index(&[0, 3]),
            Err(Error::IndexOutOfBounds { index: 3, dim: 1, size: 3 })
        ));
    }

    #[test]
    fn test_unravel_roundtrip() {
        let layout = Layout::contiguous(&[2, 3, 4]).unwrap();
        for linear in 0..layout.elem_count() {
            let coords = layout.unravel(linear);
            assert_eq!(layout.linear_index(&coords).unwrap(), linear);
        }
    }

    #[test]
    fn test_permute() {
        let layout = Layout::contiguous(&[2, 3, 4]).unwrap();
        let permuted = layout.permute(&[2, 0, 1]).unwrap();
        assert_eq!(permuted.shape(), &[4, 2, 3]);
        assert_eq!(permuted.strides(), &[6, 3, 1]);
    }

    #[test]
    fn test_permute_rejects_bad_axes() {
        let layout = Layout::contiguous(&[2, 3]).unwrap();
        assert!(layout.permute(&[0]).is_err());
        assert!(layout.permute(&[0, 2]).is_err());
        assert!(layout.permute(&[1, 1]).is_err());
    }
}
