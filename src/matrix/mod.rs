//! Flat row-major matrices and vectors
//!
//! A [`Matrix`] owns a contiguous buffer of `width * height` elements addressed
//! as `row * width + col`. Vectors are matrices with height 1. Storage is always
//! dense: a "sparse" matrix is simply one whose buffer is mostly zeros.

pub(crate) mod alloc;
mod triplet;

pub use triplet::Triplet;

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;

/// Dense row-major matrix
///
/// Invariant: `data.len() == width * height`.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// A vector is a matrix with height 1
pub type Vector<T> = Matrix<T>;

impl<T: Element> Matrix<T> {
    /// Allocate a zero-filled `height × width` matrix
    pub fn zeros(width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: alloc::try_zeroed(len)?,
            width,
            height,
        })
    }

    /// Allocate a zero-filled vector of `len` elements
    pub fn zeros_vector(len: usize) -> Result<Self> {
        Self::zeros(len, 1)
    }

    /// Wrap an existing buffer as a `height × width` matrix
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::shape_mismatch((height, width), (1, data.len())));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a matrix from equally sized rows
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = alloc::try_with_capacity(checked_len(width, height)?)?;
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::shape_mismatch((1, width), (1, row.len())));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap a buffer as a vector (height 1)
    pub fn vector(data: Vec<T>) -> Self {
        let width = data.len();
        Self {
            data,
            width,
            height: 1,
        }
    }

    /// Square identity matrix of dimension `n`
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(height, width)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if this matrix is a vector (height 1)
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.height == 1
    }

    /// Size of the buffer in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * T::DTYPE.size_in_bytes()
    }

    /// Element at `(row, col)`, or `None` when out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::invalid_argument(
                "index",
                format!(
                    "({row}, {col}) out of bounds for {}x{} matrix",
                    self.height, self.width
                ),
            ));
        }
        self.data[row * self.width + col] = value;
        Ok(())
    }

    /// Row `i` as a slice
    ///
    /// # Panics
    /// Panics if `i >= height`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    /// Underlying row-major buffer
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Underlying row-major buffer, mutably
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its buffer
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Number of non-zero elements
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    /// Linear indices of all non-zero elements, ascending
    pub fn nonzero_positions(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, _)| i)
            .collect()
    }

    /// Non-zero elements as coordinate triplets, in row-major order
    pub fn to_triplets(&self) -> Vec<Triplet<T>> {
        self.nonzero_positions()
            .into_iter()
            .map(|pos| Triplet::from_linear(pos, self.width, self.data[pos]))
            .collect()
    }
}

/// `width * height`, or `OutOfMemory` if the product overflows
#[inline]
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::OutOfMemory { size: usize::MAX })
}

impl<T: Element> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("dtype", &T::DTYPE)
            .field("height", &self.height)
            .field("width", &self.width)
            .field("nonzero", &self.count_nonzero())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = Matrix::<f64>::zeros(3, 2).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.len(), 6);
        assert_eq!(m.count_nonzero(), 0);
        assert_eq!(m.size_in_bytes(), 48);
    }

    #[test]
    fn test_row_major_addressing() {
        let m = Matrix::from_vec(vec![1i64, 2, 3, 4, 5, 6], 3, 2).unwrap();
        assert_eq!(m.get(0, 2), Some(3));
        assert_eq!(m.get(1, 0), Some(4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(vec![1.0f64; 5], 3, 2).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
        assert!(Matrix::from_rows(&rows).is_err());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<f32>::identity(3).unwrap();
        assert_eq!(m.count_nonzero(), 3);
        assert_eq!(m.get(1, 1), Some(1.0));
        assert_eq!(m.get(1, 2), Some(0.0));
    }

    #[test]
    fn test_set_and_triplets() {
        let mut m = Matrix::<u64>::zeros(4, 4).unwrap();
        m.set(3, 1, 7).unwrap();
        m.set(0, 2, 9).unwrap();
        assert!(m.set(4, 0, 1).is_err());

        let triplets = m.to_triplets();
        assert_eq!(triplets.len(), 2);
        assert_eq!((triplets[0].row, triplets[0].col, triplets[0].value), (0, 2, 9));
        assert_eq!((triplets[1].row, triplets[1].col, triplets[1].value), (3, 1, 7));
    }

    #[test]
    fn test_vector_is_height_one() {
        let v = Matrix::vector(vec![1.0f64, 2.0, 3.0]);
        assert!(v.is_vector());
        assert_eq!(v.width(), 3);
    }
}
