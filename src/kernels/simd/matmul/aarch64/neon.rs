//! NEON matmul kernels for ARM64
//!
//! One 128-bit accumulator per block of output columns: 4 f32s or 2 f64s.

use std::arch::aarch64::*;

macro_rules! impl_matmul_neon {
    (
        $name:ident, $ty:ty, $lanes:expr,
        $dup:ident, $load:ident, $store:ident, $add:ident, $mul:ident
    ) => {
        /// NEON matmul: C = A @ B
        ///
        /// # Safety
        /// - All pointers must be valid for the specified dimensions
        /// - `out` must not alias with `a` or `b`
        #[target_feature(enable = "neon")]
        pub unsafe fn $name(a: *const $ty, b: *const $ty, out: *mut $ty, m: usize, n: usize, k: usize) {
            let n_main = n - n % $lanes;
            unsafe {
                for i in 0..m {
                    let a_row = a.add(i * k);
                    let c_row = out.add(i * n);

                    let mut j = 0;
                    while j < n_main {
                        let mut acc = $dup(0.0);
                        for kk in 0..k {
                            let va = $dup(*a_row.add(kk));
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

impl_matmul_neon!(matmul_f32, f32, 4, vdupq_n_f32, vld1q_f32, vst1q_f32, vaddq_f32, vmulq_f32);
impl_matmul_neon!(matmul_f64, f64, 2, vdupq_n_f64, vld1q_f64, vst1q_f64, vaddq_f64, vmulq_f64);
