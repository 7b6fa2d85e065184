//! AVX2 element-wise add kernels
//!
//! Processes 8 f32s or 4 f64s per iteration using 256-bit vectors.

use std::arch::x86_64::*;

use crate::kernels::binary::add_scalar;

/// Generates an add kernel: vector body plus scalar tail.
macro_rules! impl_add_avx2 {
    ($name:ident, $ty:ty, $lanes:expr, $load:ident, $add:ident, $store:ident) => {
        /// AVX2 element-wise add
        ///
        /// # Safety
        /// - CPU must support AVX2
        /// - All pointers must be valid for `len` elements
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(a: *const $ty, b: *const $ty, out: *mut $ty, len: usize) {
            let chunks = len / $lanes;
            unsafe {
                for i in 0..chunks {
                    let offset = i * $lanes;
                    let va = $load(a.add(offset));
                    let vb = $load(b.add(offset));
                    $store(out.add(offset), $add(va, vb));
                }

                let done = chunks * $lanes;
                if done < len {
                    add_scalar(a.add(done), b.add(done), out.add(done), len - done);
                }
            }
        }
    };
}

impl_add_avx2!(add_f32, f32, 8, _mm256_loadu_ps, _mm256_add_ps, _mm256_storeu_ps);
impl_add_avx2!(add_f64, f64, 4, _mm256_loadu_pd, _mm256_add_pd, _mm256_storeu_pd);
