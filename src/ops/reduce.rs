//! Whole-matrix sums in two traversal orders

use crate::dtype::Element;
use crate::kernels::{sum_columns_kernel, sum_rows_kernel};
use crate::matrix::Matrix;

/// Sum of all elements, row by row (contiguous access)
pub fn sum_by_rows<T: Element>(m: &Matrix<T>) -> T {
    // SAFETY: the buffer holds exactly `height * width` elements
    unsafe { sum_rows_kernel(m.as_slice().as_ptr(), m.height(), m.width()) }
}

/// Sum of all elements, column by column (strided access)
pub fn sum_by_columns<T: Element>(m: &Matrix<T>) -> T {
    // SAFETY: the buffer holds exactly `height * width` elements
    unsafe { sum_columns_kernel(m.as_slice().as_ptr(), m.height(), m.width()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_agree_on_integers() {
        let m = Matrix::from_rows(&[[1i32, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(sum_by_rows(&m), 21);
        assert_eq!(sum_by_columns(&m), 21);
    }

    #[test]
    fn test_float_orders_close() {
        let data: Vec<f64> = (0..60).map(|x| (x as f64 * 0.37).cos()).collect();
        let m = Matrix::from_vec(data, 12, 5).unwrap();
        assert!((sum_by_rows(&m) - sum_by_columns(&m)).abs() < 1e-12);
    }
}
