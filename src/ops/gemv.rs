//! Matrix-vector and vector-matrix products

use super::Backend;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::kernels::{matvec_scalar, matvec_simd, vecmat_scalar, vecmat_simd};
use crate::matrix::{Matrix, Vector};

/// `r[i] = Σ_j m[i][j] * v[j]`
///
/// `v` must hold `m.width()` elements; the result has `m.height()`.
pub fn matvec<T: Element>(m: &Matrix<T>, v: &Vector<T>, backend: Backend) -> Result<Vector<T>> {
    let (height, width) = m.shape();
    if v.len() != width {
        return Err(Error::shape_mismatch((1, width), v.shape()));
    }

    let mut out = Matrix::zeros_vector(height)?;
    let (pm, pv) = (m.as_slice().as_ptr(), v.as_slice().as_ptr());
    let po = out.as_mut_slice().as_mut_ptr();

    // SAFETY: lengths checked above, `out` holds `height` elements
    unsafe {
        match backend {
            Backend::Scalar => matvec_scalar(pm, pv, po, height, width),
            Backend::Simd => matvec_simd(pm, pv, po, height, width),
        }
    }
    Ok(out)
}

/// `r[j] = Σ_i v[i] * m[i][j]`
///
/// `v` must hold `m.height()` elements; the result has `m.width()`.
pub fn vecmat<T: Element>(v: &Vector<T>, m: &Matrix<T>, backend: Backend) -> Result<Vector<T>> {
    let (height, width) = m.shape();
    if v.len() != height {
        return Err(Error::shape_mismatch((1, height), v.shape()));
    }

    let mut out = Matrix::zeros_vector(width)?;
    let (pm, pv) = (m.as_slice().as_ptr(), v.as_slice().as_ptr());
    let po = out.as_mut_slice().as_mut_ptr();

    // SAFETY: lengths checked above, `out` holds `width` elements
    unsafe {
        match backend {
            Backend::Scalar => vecmat_scalar(pm, pv, po, height, width),
            Backend::Simd => vecmat_simd(pm, pv, po, height, width),
        }
    }
    Ok(out)
}
