//! Sparse and dense buffer generators
//!
//! All generators allocate fallibly, take their random source from the caller
//! and never place two values at the same position.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, Triplet, alloc, checked_len};
use crate::random::{SamplingStrategy, ValueDistribution, sample_positions};
use rand::Rng;
use tracing::debug;

/// Generation parameters for a sparse-valued matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SparseSpec {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Exact number of non-zero elements to place
    pub num_nonzero: usize,
}

impl SparseSpec {
    /// Create a spec
    pub const fn new(width: usize, height: usize, num_nonzero: usize) -> Self {
        Self {
            width,
            height,
            num_nonzero,
        }
    }

    /// A vector spec (height 1)
    pub const fn vector(len: usize, num_nonzero: usize) -> Self {
        Self::new(len, 1, num_nonzero)
    }

    /// Number of slots, `width * height`
    pub fn capacity(&self) -> Result<usize> {
        checked_len(self.width, self.height)
    }

    /// Check `num_nonzero <= width * height`
    pub fn validate(&self) -> Result<()> {
        let capacity = self.capacity()?;
        if self.num_nonzero > capacity {
            return Err(Error::InfeasibleDensity {
                requested: self.num_nonzero,
                capacity,
            });
        }
        Ok(())
    }

    /// Fraction of slots that will be non-zero
    pub fn density(&self) -> f64 {
        let capacity = self.width as f64 * self.height as f64;
        if capacity == 0.0 {
            0.0
        } else {
            self.num_nonzero as f64 / capacity
        }
    }
}

/// Generate a zero-initialized matrix with exactly `spec.num_nonzero` unique
/// positions set to non-zero values from `distribution`
///
/// # Errors
/// - [`Error::InfeasibleDensity`] if `num_nonzero > width * height`
/// - [`Error::InvalidArgument`] if `distribution` cannot produce non-zero `T`s
/// - [`Error::SamplingExhausted`] for an explicit rejection bound that is hit
/// - [`Error::ZeroValues`] if the values round to zero in `T`
/// - [`Error::OutOfMemory`] if the buffer cannot be allocated
pub fn generate_sparse<T: Element, R: Rng + ?Sized>(
    spec: SparseSpec,
    distribution: ValueDistribution,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<Matrix<T>> {
    spec.validate()?;
    let sampler = distribution.sampler::<T>()?;
    let mut matrix = Matrix::zeros(spec.width, spec.height)?;
    let positions = sample_positions(matrix.len(), spec.num_nonzero, strategy, rng)?;

    let data = matrix.as_mut_slice();
    for pos in positions {
        data[pos] = sampler.sample_nonzero(rng)?;
    }

    debug!(
        width = spec.width,
        height = spec.height,
        num_nonzero = spec.num_nonzero,
        dtype = %T::DTYPE,
        "generated sparse matrix"
    );
    Ok(matrix)
}

/// Generate a `height × width` matrix with every element drawn from `distribution`
pub fn generate_dense<T: Element, R: Rng + ?Sized>(
    width: usize,
    height: usize,
    distribution: ValueDistribution,
    rng: &mut R,
) -> Result<Matrix<T>> {
    let sampler = distribution.sampler::<T>()?;
    let mut matrix = Matrix::zeros(width, height)?;
    for v in matrix.as_mut_slice() {
        *v = sampler.sample(rng);
    }
    Ok(matrix)
}

/// Generate `count` unique coordinate entries in a `matrix_size × matrix_size` grid
///
/// Entries are returned in the order their positions were drawn, not sorted.
pub fn generate_triplets<T: Element, R: Rng + ?Sized>(
    count: usize,
    matrix_size: usize,
    distribution: ValueDistribution,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<Vec<Triplet<T>>> {
    let spec = SparseSpec::new(matrix_size, matrix_size, count);
    spec.validate()?;
    let sampler = distribution.sampler::<T>()?;

    let positions = sample_positions(spec.capacity()?, count, strategy, rng)?;
    let mut triplets = alloc::try_with_capacity(count)?;
    for pos in positions {
        triplets.push(Triplet::from_linear(
            pos,
            matrix_size,
            sampler.sample_nonzero(rng)?,
        ));
    }
    Ok(triplets)
}
