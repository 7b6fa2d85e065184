//! Element-wise arithmetic

use super::Backend;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::kernels::{add_scalar, add_simd};
use crate::matrix::Matrix;

/// Element-wise sum of two equally shaped matrices
pub fn add<T: Element>(a: &Matrix<T>, b: &Matrix<T>, backend: Backend) -> Result<Matrix<T>> {
    if a.shape() != b.shape() {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }

    let mut out = Matrix::zeros(a.width(), a.height())?;
    let len = a.len();
    let (pa, pb) = (a.as_slice().as_ptr(), b.as_slice().as_ptr());
    let po = out.as_mut_slice().as_mut_ptr();

    // SAFETY: all three buffers hold `len` elements and `out` is freshly allocated
    unsafe {
        match backend {
            Backend::Scalar => add_scalar(pa, pb, po, len),
            Backend::Simd => add_simd(pa, pb, po, len),
        }
    }
    Ok(out)
}
