//! Matrix operations
//!
//! Safe, shape-checked entry points over the raw kernels in
//! [`crate::kernels`]. Every operation validates its operands, allocates a
//! fresh output through the fallible allocator and then runs a kernel chosen
//! by [`Backend`].
//!
//! ```text
//! ops::add / matmul / matvec / ...
//!   ├── validate shapes      -> Error::ShapeMismatch
//!   ├── Matrix::zeros        -> Error::OutOfMemory
//!   └── kernels::*_scalar    (Backend::Scalar)
//!       kernels::*_simd      (Backend::Simd, f32/f64 vectorized)
//! ```

mod arithmetic;
mod gemv;
mod matmul;
mod reduce;

pub use arithmetic::add;
pub use gemv::{matvec, vecmat};
pub use matmul::{BranchPattern, matmul, matmul_branchy, validate_matmul_shapes};
pub use reduce::{sum_by_columns, sum_by_rows};

use std::fmt;

/// Kernel implementation to run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable scalar loops
    Scalar,
    /// Vectorized kernels for f32/f64 at the detected SIMD level; scalar for
    /// other element types
    #[default]
    Simd,
}

impl Backend {
    /// Short lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Simd => "simd",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
