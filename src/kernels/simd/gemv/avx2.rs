//! AVX2 matrix-vector kernels

use std::arch::x86_64::*;

/// Generates a row-dot-product matvec kernel.
macro_rules! impl_matvec_avx2 {
    (
        $name:ident, $ty:ty, $lanes:expr,
        $setzero:ident, $load:ident, $store:ident, $add:ident, $mul:ident
    ) => {
        /// AVX2 matrix-vector product: `out[i] = Σ_j mat[i][j] * vec[j]`
        ///
        /// # Safety
        /// - CPU must support AVX2
        /// - `mat` valid for `height * width`, `vec` for `width`, `out` for `height`
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(mat: *const $ty, vec: *const $ty, out: *mut $ty, height: usize, width: usize) {
            let w_main = width - width % $lanes;
            let mut lanes = [0.0 as $ty; $lanes];
            unsafe {
                for i in 0..height {
                    let row = mat.add(i * width);
                    let mut acc = $setzero();
                    let mut j = 0;
                    while j < w_main {
                        acc = $add(acc, $mul($load(row.add(j)), $load(vec.add(j))));
                        j += $lanes;
                    }
                    $store(lanes.as_mut_ptr(), acc);

                    let mut sum: $ty = 0.0;
                    for lane in lanes {
                        sum = sum + lane;
                    }
                    for j in w_main..width {
                        sum = sum + *row.add(j) * *vec.add(j);
                    }
                    *out.add(i) = sum;
                }
            }
        }
    };
}

/// Generates a row-axpy vecmat kernel.
macro_rules! impl_vecmat_avx2 {
    (
        $name:ident, $ty:ty, $lanes:expr,
        $set1:ident, $load:ident, $store:ident, $add:ident, $mul:ident
    ) => {
        /// AVX2 vector-matrix product: `out[j] = Σ_i vec[i] * mat[i][j]`
        ///
        /// # Safety
        /// - CPU must support AVX2
        /// - `mat` valid for `height * width`, `vec` for `height`, `out` for `width`
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(mat: *const $ty, vec: *const $ty, out: *mut $ty, height: usize, width: usize) {
            let w_main = width - width % $lanes;
            unsafe {
                std::slice::from_raw_parts_mut(out, width).fill(0.0);

                for i in 0..height {
                    let row = mat.add(i * width);
                    let scalar = *vec.add(i);
                    let vs = $set1(scalar);
                    let mut j = 0;
                    while j < w_main {
                        let acc = $load(out.add(j));
                        $store(out.add(j), $add(acc, $mul(vs, $load(row.add(j)))));
                        j += $lanes;
                    }
                    for j in w_main..width {
                        *out.add(j) = *out.add(j) + scalar * *row.add(j);
                    }
                }
            }
        }
    };
}

impl_matvec_avx2!(
    matvec_f32, f32, 8,
    _mm256_setzero_ps, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_add_ps, _mm256_mul_ps
);
impl_matvec_avx2!(
    matvec_f64, f64, 4,
    _mm256_setzero_pd, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_add_pd, _mm256_mul_pd
);
impl_vecmat_avx2!(
    vecmat_f32, f32, 8,
    _mm256_set1_ps, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_add_ps, _mm256_mul_ps
);
impl_vecmat_avx2!(
    vecmat_f64, f64, 4,
    _mm256_set1_pd, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_add_pd, _mm256_mul_pd
);
