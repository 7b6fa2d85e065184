//! Element-wise add kernels

use crate::dtype::{DType, Element};

/// Scalar element-wise add: `out[i] = a[i] + b[i]`
///
/// Integer types wrap on overflow.
///
/// # Safety
/// - `a`, `b`, and `out` must be valid pointers to `len` elements
/// - `out` must not overlap with `a` or `b` unless they are the same pointer
#[inline]
pub unsafe fn add_scalar<T: Element>(a: *const T, b: *const T, out: *mut T, len: usize) {
    for i in 0..len {
        unsafe {
            *out.add(i) = (*a.add(i)).wrapping_add(*b.add(i));
        }
    }
}

/// Element-wise add with SIMD dispatch for f32/f64
///
/// Integer element types take the scalar path.
///
/// # Safety
/// Same contract as [`add_scalar`].
#[inline]
pub unsafe fn add_simd<T: Element>(a: *const T, b: *const T, out: *mut T, len: usize) {
    use super::simd::binary;

    match T::DTYPE {
        DType::F32 => unsafe {
            binary::add_f32(a as *const f32, b as *const f32, out as *mut f32, len)
        },
        DType::F64 => unsafe {
            binary::add_f64(a as *const f64, b as *const f64, out as *mut f64, len)
        },
        _ => unsafe { add_scalar(a, b, out, len) },
    }
}
