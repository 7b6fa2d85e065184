//! Dense matrix multiplication kernels: C = A @ B
//!
//! All kernels take A as `m × k`, B as `k × n` and C as `m × n`, row-major and
//! contiguous. The scalar kernel is the textbook ijk triple loop: every output
//! element is a fresh sum over `k` in ascending order.

use crate::dtype::{DType, Element};

/// Naive ijk matmul for all Element types
///
/// # Safety
/// - All pointers must be valid for the specified dimensions
/// - `out` must not alias with `a` or `b`
#[inline]
pub unsafe fn matmul_scalar<T: Element>(
    a: *const T,
    b: *const T,
    out: *mut T,
    m: usize,
    n: usize,
    k: usize,
) {
    unsafe {
        for i in 0..m {
            let a_row = a.add(i * k);
            for j in 0..n {
                let mut sum = T::zero();
                for kk in 0..k {
                    sum = sum.wrapping_add((*a_row.add(kk)).wrapping_mul(*b.add(kk * n + j)));
                }
                *out.add(i * n + j) = sum;
            }
        }
    }
}

/// Matmul with a data-dependent branch in the inner loop
///
/// `schedule[i * n + j]` picks, per output cell, one of two code paths that
/// perform the same additions in the same order: the taken arm keeps the
/// running sum in a register, the other accumulates through memory. The
/// result is therefore identical to [`matmul_scalar`]; only the branch
/// predictor sees a difference.
///
/// # Safety
/// - Same contract as [`matmul_scalar`]
/// - `schedule` must hold at least `m * n` entries
#[inline]
pub unsafe fn matmul_branchy<T: Element>(
    a: *const T,
    b: *const T,
    out: *mut T,
    m: usize,
    n: usize,
    k: usize,
    schedule: &[bool],
) {
    debug_assert!(schedule.len() >= m * n);
    unsafe {
        for i in 0..m {
            let a_row = a.add(i * k);
            for j in 0..n {
                let cell = out.add(i * n + j);
                if schedule[i * n + j] {
                    let mut sum = T::zero();
                    for kk in 0..k {
                        sum = sum.wrapping_add((*a_row.add(kk)).wrapping_mul(*b.add(kk * n + j)));
                    }
                    *cell = sum;
                } else {
                    *cell = T::zero();
                    for kk in 0..k {
                        *cell = (*cell).wrapping_add((*a_row.add(kk)).wrapping_mul(*b.add(kk * n + j)));
                    }
                }
            }
        }
    }
}

/// Matmul with SIMD dispatch for f32/f64
///
/// # Safety
/// Same contract as [`matmul_scalar`].
#[inline]
pub unsafe fn matmul_simd<T: Element>(
    a: *const T,
    b: *const T,
    out: *mut T,
    m: usize,
    n: usize,
    k: usize,
) {
    use super::simd::matmul;

    match T::DTYPE {
        DType::F32 => unsafe {
            matmul::matmul_f32(a as *const f32, b as *const f32, out as *mut f32, m, n, k)
        },
        DType::F64 => unsafe {
            matmul::matmul_f64(a as *const f64, b as *const f64, out as *mut f64, m, n, k)
        },
        _ => unsafe { matmul_scalar(a, b, out, m, n, k) },
    }
}
