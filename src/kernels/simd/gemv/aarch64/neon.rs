//! NEON matrix-vector kernels for ARM64

use std::arch::aarch64::*;

macro_rules! impl_matvec_neon {
    ($name:ident, $ty:ty, $lanes:expr, $dup:ident, $load:ident, $store:ident, $add:ident, $mul:ident) => {
        /// NEON matrix-vector product: `out[i] = Σ_j mat[i][j] * vec[j]`
        ///
        /// # Safety
        /// - `mat` valid for `height * width`, `vec` for `width`, `out` for `height`
        #[target_feature(enable = "neon")]
        pub unsafe fn $name(mat: *const $ty, vec: *const $ty, out: *mut $ty, height: usize, width: usize) {
            let w_main = width - width % $lanes;
            let mut lanes = [0.0 as $ty; $lanes];
            unsafe {
                for i in 0..height {
                    let row = mat.add(i * width);
                    let mut acc = $dup(0.0);
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

macro_rules! impl_vecmat_neon {
    ($name:ident, $ty:ty, $lanes:expr, $dup:ident, $load:ident, $store:ident, $add:ident, $mul:ident) => {
        /// NEON vector-matrix product: `out[j] = Σ_i vec[i] * mat[i][j]`
        ///
        /// # Safety
        /// - `mat` valid for `height * width`, `vec` for `height`, `out` for `width`
        #[target_feature(enable = "neon")]
        pub unsafe fn $name(mat: *const $ty, vec: *const $ty, out: *mut $ty, height: usize, width: usize) {
            let w_main = width - width % $lanes;
            unsafe {
                std::slice::from_raw_parts_mut(out, width).fill(0.0);

                for i in 0..height {
                    let row = mat.add(i * width);
                    let scalar = *vec.add(i);
                    let vs = $dup(scalar);
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

impl_matvec_neon!(matvec_f32, f32, 4, vdupq_n_f32, vld1q_f32, vst1q_f32, vaddq_f32, vmulq_f32);
impl_matvec_neon!(matvec_f64, f64, 2, vdupq_n_f64, vld1q_f64, vst1q_f64, vaddq_f64, vmulq_f64);
impl_vecmat_neon!(vecmat_f32, f32, 4, vdupq_n_f32, vld1q_f32, vst1q_f32, vaddq_f32, vmulq_f32);
impl_vecmat_neon!(vecmat_f64, f64, 2, vdupq_n_f64, vld1q_f64, vst1q_f64, vaddq_f64, vmulq_f64);
