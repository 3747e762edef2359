//! Core Tensor type

use super::Layout;
use crate::dtype::Complex64;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// N-dimensional array of complex values
///
/// `Tensor` owns a flat, contiguous, row-major buffer together with a
/// [`Layout`] describing its shape and strides. The invariant
/// `data.len() == shape.iter().product()` holds for every constructed tensor.
///
/// # Ownership
///
/// Storage is exclusively owned. Operations that produce tensors allocate
/// fresh storage and never alias their operands; slices copy.
///
/// # Element access
///
/// [`Tensor::at`] validates the coordinate vector's length and every
/// coordinate's bounds. Access by linear offset through `Index<usize>` is
/// only guarded by the underlying slice's bounds panic.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    data: Vec<Complex64>,
    layout: Layout,
}

impl Tensor {
    /// Create a tensor filled with copies of `fill`
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::{Complex64, Tensor};
    ///
    /// let t = Tensor::full(&[2, 3], Complex64::new(1.0, -1.0))?;
    /// assert_eq!(t.size(), 6);
    /// assert_eq!(t[5], Complex64::new(1.0, -1.0));
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn full(shape: &[usize], fill: Complex64) -> Result<Self> {
        let layout = Layout::contiguous(shape)?;
        let data = vec![fill; layout.elem_count()];
        Ok(Self { data, layout })
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::full(shape, Complex64::ZERO)
    }

    /// Create a tensor of ones (real unit)
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, Complex64::ONE)
    }

    /// Create a tensor from a flat row-major buffer
    ///
    /// Fails with [`Error::SizeMismatch`] if `data.len()` does not equal the
    /// product of the shape's extents.
    pub fn from_vec(data: Vec<Complex64>, shape: &[usize]) -> Result<Self> {
        let layout = Layout::contiguous(shape)?;
        if data.len() != layout.elem_count() {
            return Err(Error::SizeMismatch {
                expected: layout.elem_count(),
                got: data.len(),
            });
        }
        Ok(Self { data, layout })
    }

    /// Build a tensor from pre-validated parts
    ///
    /// Callers must guarantee `data.len() == layout.elem_count()`.
    pub(crate) fn from_parts(data: Vec<Complex64>, layout: Layout) -> Self {
        debug_assert_eq!(data.len(), layout.elem_count());
        Self { data, layout }
    }

    /// The tensor's layout (shape and strides)
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The tensor's shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Number of dimensions
    #[inline]
    pub fn rank(&self) -> usize {
        self.layout.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Flat row-major view of the elements
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Mutable flat row-major view of the elements
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// Consume the tensor, returning its flat buffer
    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Checked element access by coordinates
    pub fn at(&self, coords: &[usize]) -> Result<&Complex64> {
        let offset = self.layout.linear_index(coords)?;
        Ok(&self.data[offset])
    }

    /// Checked mutable element access by coordinates
    pub fn at_mut(&mut self, coords: &[usize]) -> Result<&mut Complex64> {
        let offset = self.layout.linear_index(coords)?;
        Ok(&mut self.data[offset])
    }

    /// Reinterpret the tensor under a new shape, in place
    ///
    /// Zero-copy: the flat buffer and element ordering are untouched. Fails
    /// if the new shape is empty, contains a zero extent, or its element
    /// product differs from [`Tensor::size`].
    ///
    /// # Example
    ///
    /// ```
    /// use cxtensor::{Complex64, Tensor};
    ///
    /// let mut t = Tensor::full(&[2, 2], Complex64::ONE)?;
    /// t.reshape(&[4, 1])?;
    /// assert_eq!(t.shape(), &[4, 1]);
    /// assert!(t.reshape(&[3, 2]).is_err());
    /// # Ok::<(), cxtensor::Error>(())
    /// ```
    pub fn reshape(&mut self, new_shape: &[usize]) -> Result<()> {
        let layout = Layout::contiguous(new_shape)?;
        if layout.elem_count() != self.size() {
            return Err(Error::SizeMismatch {
                expected: self.size(),
                got: layout.elem_count(),
            });
        }
        self.layout = layout;
        Ok(())
    }
}

impl Index<usize> for Tensor {
    type Output = Complex64;

    /// Unchecked access by linear offset (beyond the slice's own bounds panic)
    #[inline]
    fn index(&self, linear: usize) -> &Complex64 {
        &self.data[linear]
    }
}

impl IndexMut<usize> for Tensor {
    #[inline]
    fn index_mut(&mut self, linear: usize) -> &mut Complex64 {
        &mut self.data[linear]
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("size", &self.size())
            .finish()
    }
}

impl fmt::Display for Tensor {
    /// Flat listing with the shape, e.g. `[1+0i, 2+0i] shape=[2]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "] shape={:?}", self.shape())
    }
}
