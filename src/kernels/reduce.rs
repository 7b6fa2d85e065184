//! Whole-matrix sum kernels with row-major and column-major traversal

use crate::dtype::Element;

/// Sum every element, walking rows in memory order
///
/// # Safety
/// - `data` must be valid for `height * width` elements
#[inline]
pub unsafe fn sum_rows_kernel<T: Element>(data: *const T, height: usize, width: usize) -> T {
    let mut total = T::zero();
    unsafe {
        for i in 0..height {
            let row = data.add(i * width);
            for j in 0..width {
                total = total.wrapping_add(*row.add(j));
            }
        }
    }
    total
}

/// Sum every element, walking down each column in turn
///
/// Strided by `width` in the inner loop.
///
/// # Safety
/// - `data` must be valid for `height * width` elements
#[inline]
pub unsafe fn sum_columns_kernel<T: Element>(data: *const T, height: usize, width: usize) -> T {
    let mut total = T::zero();
    unsafe {
        for j in 0..width {
            for i in 0..height {
                total = total.wrapping_add(*data.add(i * width + j));
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sums_agree() {
        let data: Vec<i64> = (0..12).collect();
        let rows = unsafe { sum_rows_kernel(data.as_ptr(), 3, 4) };
        let cols = unsafe { sum_columns_kernel(data.as_ptr(), 3, 4) };
        assert_eq!(rows, 66);
        assert_eq!(cols, 66);
    }

    #[test]
    fn test_empty() {
        let data: [f64; 0] = [];
        assert_eq!(unsafe { sum_rows_kernel(data.as_ptr(), 0, 5) }, 0.0);
        assert_eq!(unsafe { sum_columns_kernel(data.as_ptr(), 5, 0) }, 0.0);
    }
}
