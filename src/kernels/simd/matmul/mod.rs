//! SIMD dense matrix multiply: C = A @ B
//!
//! Vectorizes over output columns: for every row `i` and every block of
//! `lanes` columns, `A[i][k]` is broadcast and multiplied with the contiguous
//! slice `B[k][j..j + lanes]`, accumulating over `k`. Columns left over when
//! `n` is not a multiple of the lane count are computed with scalar code.
//!
//! Per element this performs the same additions in the same order as the
//! scalar ijk kernel, so results are bit-identical to it.

#[cfg(target_arch = "x86_64")]
mod avx2;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[allow(unused_imports)]
use super::{SimdLevel, active_simd};
use crate::kernels::matmul::matmul_scalar;

/// SIMD matmul for f32
///
/// A is `m × k`, B is `k × n`, C is `m × n`, all row-major and contiguous.
///
/// # Safety
/// - All pointers must be valid for the specified dimensions
/// - `out` must not alias with `a` or `b`
#[inline]
pub unsafe fn matmul_f32(a: *const f32, b: *const f32, out: *mut f32, m: usize, n: usize, k: usize) {
    match active_simd() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { avx2::matmul_f32(a, b, out, m, n, k) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => unsafe { aarch64::neon::matmul_f32(a, b, out, m, n, k) },
        _ => unsafe { matmul_scalar(a, b, out, m, n, k) },
    }
}

/// SIMD matmul for f64
///
/// # Safety
/// - All pointers must be valid for the specified dimensions
/// - `out` must not alias with `a` or `b`
#[inline]
pub unsafe fn matmul_f64(a: *const f64, b: *const f64, out: *mut f64, m: usize, n: usize, k: usize) {
    match active_simd() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { avx2::matmul_f64(a, b, out, m, n, k) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => unsafe { aarch64::neon::matmul_f64(a, b, out, m, n, k) },
        _ => unsafe { matmul_scalar(a, b, out, m, n, k) },
    }
}
