//! NEON element-wise add kernels for ARM64
//!
//! Processes 4 f32s or 2 f64s per iteration using 128-bit vectors.

use std::arch::aarch64::*;

use crate::kernels::binary::add_scalar;

macro_rules! impl_add_neon {
    ($name:ident, $ty:ty, $lanes:expr, $load:ident, $add:ident, $store:ident) => {
        /// NEON element-wise add
        ///
        /// # Safety
        /// - All pointers must be valid for `len` elements
        #[target_feature(enable = "neon")]
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

impl_add_neon!(add_f32, f32, 4, vld1q_f32, vaddq_f32, vst1q_f32);
impl_add_neon!(add_f64, f64, 2, vld1q_f64, vaddq_f64, vst1q_f64);
