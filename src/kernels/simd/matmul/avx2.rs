//! AVX2 matmul kernels
//!
//! One 256-bit accumulator per block of output columns: 8 f32s or 4 f64s.

use std::arch::x86_64::*;

/// Generates a column-vectorized matmul kernel.
macro_rules! impl_matmul_avx2 {
    (
        $name:ident, $ty:ty, $lanes:expr,
        $setzero:ident, $set1:ident, $load:ident, $store:ident, $add:ident, $mul:ident
    ) => {
        /// AVX2 matmul: C = A @ B
        ///
        /// # Safety
        /// - CPU must support AVX2
        /// - All pointers must be valid for the specified dimensions
        /// - `out` must not alias with `a` or `b`
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(a: *const $ty, b: *const $ty, out: *mut $ty, m: usize, n: usize, k: usize) {
            let n_main = n - n % $lanes;
            unsafe {
                for i in 0..m {
                    let a_row = a.add(i * k);
                    let c_row = out.add(i * n);

                    let mut j = 0;
                    while j < n_main {
                        let mut acc = $setzero();
                        for kk in 0..k {
                            let va = $set1(*a_row.add(kk));
                            let vb = $load(b.add(kk * n + j));
                            acc = $add(acc, $mul(va, vb));
                        }
                        $store(c_row.add(j), acc);
                        j += $lanes;
                    }

                    for j in n_main..n {
                        let mut sum: $ty = 0.0;
                        for kk in 0..k {
                            sum = sum + *a_row.add(kk) * *b.add(kk * n + j);
                        }
                        *c_row.add(j) = sum;
                    }
                }
            }
        }
    };
}

impl_matmul_avx2!(
    matmul_f32, f32, 8,
    _mm256_setzero_ps, _mm256_set1_ps, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_add_ps, _mm256_mul_ps
);
impl_matmul_avx2!(
    matmul_f64, f64, 4,
    _mm256_setzero_pd, _mm256_set1_pd, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_add_pd, _mm256_mul_pd
);
