//! SIMD-accelerated element-wise add
//!
//! Full lanes are processed with vector instructions; the remaining
//! `len % lanes` elements are finished with the scalar kernel, so any length
//! is accepted.

#[cfg(target_arch = "x86_64")]
mod avx2;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[allow(unused_imports)]
use super::{SimdLevel, active_simd};
use crate::kernels::binary::add_scalar;

/// SIMD element-wise add for f32
///
/// # Safety
/// - `a`, `b`, and `out` must be valid pointers to `len` elements
#[inline]
pub unsafe fn add_f32(a: *const f32, b: *const f32, out: *mut f32, len: usize) {
    match active_simd() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { avx2::add_f32(a, b, out, len) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => unsafe { aarch64::neon::add_f32(a, b, out, len) },
        _ => unsafe { add_scalar(a, b, out, len) },
    }
}

/// SIMD element-wise add for f64
///
/// # Safety
/// - `a`, `b`, and `out` must be valid pointers to `len` elements
#[inline]
pub unsafe fn add_f64(a: *const f64, b: *const f64, out: *mut f64, len: usize) {
    match active_simd() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { avx2::add_f64(a, b, out, len) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => unsafe { aarch64::neon::add_f64(a, b, out, len) },
        _ => unsafe { add_scalar(a, b, out, len) },
    }
}
