//! Matrix-vector kernels
//!
//! M is `height × width`, row-major and contiguous.

use crate::dtype::{DType, Element};

/// Scalar matrix-vector product: `out[i] = Σ_j mat[i][j] * vec[j]`
///
/// # Safety
/// - `mat` valid for `height * width` elements, `vec` for `width`, `out` for `height`
/// - `out` must not alias with `mat` or `vec`
#[inline]
pub unsafe fn matvec_scalar<T: Element>(
    mat: *const T,
    vec: *const T,
    out: *mut T,
    height: usize,
    width: usize,
) {
    unsafe {
        for i in 0..height {
            let row = mat.add(i * width);
            let mut sum = T::zero();
            for j in 0..width {
                sum = sum.wrapping_add((*row.add(j)).wrapping_mul(*vec.add(j)));
            }
            *out.add(i) = sum;
        }
    }
}

/// Scalar vector-matrix product: `out[j] = Σ_i vec[i] * mat[i][j]`
///
/// Walks M row by row, adding `vec[i] * row_i` into the output.
///
/// # Safety
/// - `mat` valid for `height * width` elements, `vec` for `height`, `out` for `width`
/// - `out` must not alias with `mat` or `vec`
#[inline]
pub unsafe fn vecmat_scalar<T: Element>(
    mat: *const T,
    vec: *const T,
    out: *mut T,
    height: usize,
    width: usize,
) {
    unsafe {
        for j in 0..width {
            *out.add(j) = T::zero();
        }
        for i in 0..height {
            let row = mat.add(i * width);
            let scalar = *vec.add(i);
            for j in 0..width {
                *out.add(j) = (*out.add(j)).wrapping_add(scalar.wrapping_mul(*row.add(j)));
            }
        }
    }
}

/// Matrix-vector product with SIMD dispatch for f32/f64
///
/// # Safety
/// Same contract as [`matvec_scalar`].
#[inline]
pub unsafe fn matvec_simd<T: Element>(
    mat: *const T,
    vec: *const T,
    out: *mut T,
    height: usize,
    width: usize,
) {
    use super::simd::gemv;

    match T::DTYPE {
        DType::F32 => unsafe {
            gemv::matvec_f32(mat as *const f32, vec as *const f32, out as *mut f32, height, width)
        },
        DType::F64 => unsafe {
            gemv::matvec_f64(mat as *const f64, vec as *const f64, out as *mut f64, height, width)
        },
        _ => unsafe { matvec_scalar(mat, vec, out, height, width) },
    }
}

/// Vector-matrix product with SIMD dispatch for f32/f64
///
/// # Safety
/// Same contract as [`vecmat_scalar`].
#[inline]
pub unsafe fn vecmat_simd<T: Element>(
    mat: *const T,
    vec: *const T,
    out: *mut T,
    height: usize,
    width: usize,
) {
    use super::simd::gemv;

    match T::DTYPE {
        DType::F32 => unsafe {
            gemv::vecmat_f32(mat as *const f32, vec as *const f32, out as *mut f32, height, width)
        },
        DType::F64 => unsafe {
            gemv::vecmat_f64(mat as *const f64, vec as *const f64, out as *mut f64, height, width)
        },
        _ => unsafe { vecmat_scalar(mat, vec, out, height, width) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matvec_scalar() {
        // [[1, 2, 3], [4, 5, 6]] · [1, 0, -1]
        let mat = [1i32, 2, 3, 4, 5, 6];
        let v = [1i32, 0, -1];
        let mut out = [0i32; 2];
        unsafe { matvec_scalar(mat.as_ptr(), v.as_ptr(), out.as_mut_ptr(), 2, 3) }
        assert_eq!(out, [-2, -2]);
    }

    #[test]
    fn test_vecmat_scalar() {
        // [1, 2] · [[1, 2, 3], [4, 5, 6]]
        let mat = [1i32, 2, 3, 4, 5, 6];
        let v = [1i32, 2];
        let mut out = [7i32; 3];
        unsafe { vecmat_scalar(mat.as_ptr(), v.as_ptr(), out.as_mut_ptr(), 2, 3) }
        assert_eq!(out, [9, 12, 15]);
    }

    #[test]
    fn test_vecmat_simd_matches_scalar_f64() {
        let (height, width) = (7, 9);
        let mat: Vec<f64> = (0..height * width).map(|x| (x as f64).sin()).collect();
        let v: Vec<f64> = (0..height).map(|x| x as f64 - 3.0).collect();
        let mut simd = vec![0.0f64; width];
        let mut scalar = vec![0.0f64; width];
        unsafe {
            vecmat_simd(mat.as_ptr(), v.as_ptr(), simd.as_mut_ptr(), height, width);
            vecmat_scalar(mat.as_ptr(), v.as_ptr(), scalar.as_mut_ptr(), height, width);
        }
        assert_eq!(simd, scalar);
    }
}
