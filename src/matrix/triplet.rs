//! Coordinate (row, col, value) entries

use crate::dtype::Element;
use std::fmt;

/// A single non-zero entry of a matrix in coordinate form
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triplet<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T: Element> Triplet<T> {
    /// Split a linear row-major position into row and column for a matrix of `width` columns
    #[inline]
    pub fn from_linear(pos: usize, width: usize, value: T) -> Self {
        Self {
            row: pos / width,
            col: pos % width,
            value,
        }
    }

    /// Row-major linear position for a matrix of `width` columns
    #[inline]
    pub fn linear(&self, width: usize) -> usize {
        self.row * width + self.col
    }
}

impl<T: Element> fmt::Display for Triplet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element at ({}, {}) = {}", self.row, self.col, self.value)
    }
}
