//! # sparsebench
//!
//! **Micro-benchmarks of dense kernels over sparse-valued matrices.**
//!
//! sparsebench generates matrices and vectors that are stored densely but are
//! mostly zeros, and times the classic kernels over them: element-wise add,
//! triple-loop matrix multiply, matrix-vector and vector-matrix products, and
//! whole-matrix sums in row and column order. Each kernel comes in a scalar
//! form and, for f32/f64, a runtime-dispatched SIMD form (AVX2 or NEON).
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsebench::prelude::*;
//!
//! # fn main() -> sparsebench::error::Result<()> {
//! let mut rng = seeded_rng(Some(42));
//! let spec = SparseSpec::new(64, 32, 100);
//! let a: Matrix<f64> =
//!     generate_sparse(spec, ValueDistribution::Centered, SamplingStrategy::Auto, &mut rng)?;
//! assert_eq!(a.count_nonzero(), 100);
//!
//! let b = Matrix::identity(64)?;
//! let timed = time_it(|| matmul(&a, &b, Backend::Simd));
//! assert_eq!(timed.result?, a);
//! # Ok(())
//! # }
//! ```
//!
//! ## Programs
//!
//! - `array_2d_sparse`: row- versus column-order sums, then add, multiply and
//!   matrix-vector product
//! - `mispredictions`: the multiply with an unpredictable branch per cell
//! - `simd`: SIMD against scalar kernels on dense random data
//! - `sparse_matrix`: prints random coordinate entries
//!
//! ## Feature Flags
//!
//! - `simd` (default): runtime-dispatched SIMD kernels. Without it every
//!   kernel runs its scalar loop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod dtype;
pub mod error;
pub mod generator;
pub mod harness;
pub mod kernels;
pub mod matrix;
pub mod ops;
pub mod random;

/// Common imports for benchmark programs and tests
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::generator::{SparseSpec, generate_dense, generate_sparse, generate_triplets};
    pub use crate::harness::{
        Clock, HarnessConfig, Measurement, SampleStats, Timed, measure, time_it, time_with,
    };
    pub use crate::kernels::{SimdLevel, active_simd, detect_simd};
    pub use crate::matrix::{Matrix, Triplet, Vector};
    pub use crate::ops::{
        Backend, BranchPattern, add, matmul, matmul_branchy, matvec, sum_by_columns, sum_by_rows,
        vecmat,
    };
    pub use crate::random::{SamplingStrategy, ValueDistribution, seeded_rng};
}
