//! SIMD matrix-vector and vector-matrix products
//!
//! - `matvec`: `r[i] = Σ_j M[i][j] * v[j]`, one lane-wide dot product per row
//!   followed by a horizontal sum. The lane-wise partial sums reassociate the
//!   addition, so results match the scalar kernel only up to rounding.
//! - `vecmat`: `r[j] = Σ_i v[i] * M[i][j]`, an axpy of every row into the
//!   output. Same per-element order as the scalar kernel, so results are exact.

#[cfg(target_arch = "x86_64")]
mod avx2;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[allow(unused_imports)]
use super::{SimdLevel, active_simd};
use crate::kernels::gemv::{matvec_scalar, vecmat_scalar};

macro_rules! dispatch_gemv {
    ($name:ident, $scalar:ident, $ty:ty, $doc:literal) => {
        #[doc = $doc]
        ///
        /// M is `height × width`, row-major and contiguous.
        ///
        /// # Safety
        /// - `mat` must be valid for `height * width` elements
        /// - `vec` and `out` must be valid for the lengths the operation implies
        /// - `out` must not alias with `mat` or `vec`
        #[inline]
        pub unsafe fn $name(
            mat: *const $ty,
            vec: *const $ty,
            out: *mut $ty,
            height: usize,
            width: usize,
        ) {
            match active_simd() {
                #[cfg(target_arch = "x86_64")]
                SimdLevel::Avx2 => unsafe { avx2::$name(mat, vec, out, height, width) },
                #[cfg(target_arch = "aarch64")]
                SimdLevel::Neon => unsafe { aarch64::neon::$name(mat, vec, out, height, width) },
                _ => unsafe { $scalar(mat, vec, out, height, width) },
            }
        }
    };
}

dispatch_gemv!(matvec_f32, matvec_scalar, f32, "SIMD matrix-vector product for f32 (`vec` has `width` elements, `out` has `height`)");
dispatch_gemv!(matvec_f64, matvec_scalar, f64, "SIMD matrix-vector product for f64 (`vec` has `width` elements, `out` has `height`)");
dispatch_gemv!(vecmat_f32, vecmat_scalar, f32, "SIMD vector-matrix product for f32 (`vec` has `height` elements, `out` has `width`)");
dispatch_gemv!(vecmat_f64, vecmat_scalar, f64, "SIMD vector-matrix product for f64 (`vec` has `height` elements, `out` has `width`)");
