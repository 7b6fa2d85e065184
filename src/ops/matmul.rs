//! Dense matrix multiplication and the branch-predictor variant

use super::Backend;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::kernels::{self, matmul_scalar, matmul_simd};
use crate::matrix::{Matrix, alloc, checked_len};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Validate operand shapes for `A @ B` and return `(m, k, n)`
///
/// A must be `m × k` and B `k × n`.
pub fn validate_matmul_shapes<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(usize, usize, usize)> {
    let (m, k) = a.shape();
    if b.height() != k {
        return Err(Error::shape_mismatch((k, b.width()), b.shape()));
    }
    Ok((m, k, b.width()))
}

/// Naive matrix product `C[i][j] = Σ_k A[i][k] * B[k][j]`
pub fn matmul<T: Element>(a: &Matrix<T>, b: &Matrix<T>, backend: Backend) -> Result<Matrix<T>> {
    let (m, k, n) = validate_matmul_shapes(a, b)?;
    let mut out = Matrix::zeros(n, m)?;
    let (pa, pb) = (a.as_slice().as_ptr(), b.as_slice().as_ptr());
    let po = out.as_mut_slice().as_mut_ptr();

    // SAFETY: shapes validated above, `out` is a fresh `m × n` buffer
    unsafe {
        match backend {
            Backend::Scalar => matmul_scalar(pa, pb, po, m, n, k),
            Backend::Simd => matmul_simd(pa, pb, po, m, n, k),
        }
    }
    Ok(out)
}

/// Sequence of branch outcomes fed to [`matmul_branchy`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BranchPattern {
    /// Every cell takes the same arm
    AlwaysTaken,
    /// Arms alternate cell by cell
    Alternating,
    /// Fair coin per cell, reproducible from `seed`
    Random {
        /// Seed of the coin stream
        seed: u64,
    },
}

impl BranchPattern {
    /// Expand the pattern into one outcome per output cell
    pub fn schedule(&self, cells: usize) -> Result<Vec<bool>> {
        let mut schedule = alloc::try_with_capacity(cells)?;
        match *self {
            Self::AlwaysTaken => schedule.resize(cells, true),
            Self::Alternating => schedule.extend((0..cells).map(|i| i % 2 == 0)),
            Self::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                schedule.extend((0..cells).map(|_| rng.random::<bool>()));
            }
        }
        Ok(schedule)
    }
}

impl fmt::Display for BranchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlwaysTaken => f.write_str("always-taken"),
            Self::Alternating => f.write_str("alternating"),
            Self::Random { seed } => write!(f, "random(seed={})", seed),
        }
    }
}

/// Matrix product through the data-dependent branch kernel
///
/// The schedule is built before the kernel runs. Both arms accumulate
/// identically, so the result always equals [`matmul`].
pub fn matmul_branchy<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    pattern: BranchPattern,
) -> Result<Matrix<T>> {
    let (m, k, n) = validate_matmul_shapes(a, b)?;
    let cells = checked_len(n, m)?;
    let schedule = pattern.schedule(cells)?;
    tracing::debug!(%pattern, cells, "branchy matmul schedule ready");

    let mut out = Matrix::zeros(n, m)?;
    // SAFETY: shapes validated above and `schedule` holds `m * n` outcomes
    unsafe {
        kernels::matmul_branchy(
            a.as_slice().as_ptr(),
            b.as_slice().as_ptr(),
            out.as_mut_slice().as_mut_ptr(),
            m,
            n,
            k,
            &schedule,
        );
    }
    Ok(out)
}
