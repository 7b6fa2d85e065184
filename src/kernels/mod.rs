//! Low-level compute kernels
//!
//! Kernels operate on raw pointers and trust their caller for shapes and
//! lengths; validation lives one layer up in [`crate::ops`]. Every kernel
//! family has a generic scalar implementation for all [`Element`] types and a
//! `*_simd` entry point that routes f32/f64 to the vectorized kernels in
//! [`simd`] and everything else to the scalar path.
//!
//! [`Element`]: crate::dtype::Element

pub mod binary;
pub mod gemv;
pub mod matmul;
pub mod reduce;
pub mod simd;

pub use binary::{add_scalar, add_simd};
pub use gemv::{matvec_scalar, matvec_simd, vecmat_scalar, vecmat_simd};
pub use matmul::{matmul_branchy, matmul_scalar, matmul_simd};
pub use reduce::{sum_columns_kernel, sum_rows_kernel};
pub use simd::{SimdLevel, active_simd, detect_simd};
