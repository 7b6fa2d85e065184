//! SIMD detection and dispatch for the benchmark kernels
//!
//! Each kernel family has its own submodule that handles architecture
//! dispatch internally:
//!
//! ```text
//! simd/
//! ├── mod.rs              # This file: detection only
//! ├── {operation}/
//! │   ├── mod.rs          # Unified dispatch (handles all architectures)
//! │   ├── avx2.rs         # x86-64 implementation
//! │   └── aarch64/
//! │       ├── mod.rs
//! │       └── neon.rs
//! ```
//!
//! | Architecture | Instruction Set | f64 lanes | f32 lanes |
//! |--------------|-----------------|-----------|-----------|
//! | x86-64       | AVX2            | 4         | 8         |
//! | ARM64        | NEON            | 2         | 4         |
//! | Any          | Scalar          | 1         | 1         |
//!
//! Kernels multiply and add with separate instructions (no FMA) so that the
//! per-element summation order, and therefore the result, matches the scalar
//! kernels wherever the loop structure allows.

pub mod binary;
pub mod gemv;
pub mod matmul;

use std::sync::OnceLock;

/// SIMD capability level detected at runtime
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(dead_code)] // Variants are only constructed on their own architecture
pub enum SimdLevel {
    /// AVX2 (256-bit vectors, 8 f32s or 4 f64s)
    Avx2 = 2,
    /// NEON baseline for AArch64 (128-bit vectors, 4 f32s or 2 f64s)
    Neon = 1,
    /// Scalar fallback (no SIMD)
    Scalar = 0,
}

impl SimdLevel {
    /// Returns the number of f32 elements per vector register
    #[inline]
    pub const fn f32_lanes(self) -> usize {
        match self {
            Self::Avx2 => 8,
            Self::Neon => 4,
            Self::Scalar => 1,
        }
    }

    /// Returns the number of f64 elements per vector register
    #[inline]
    pub const fn f64_lanes(self) -> usize {
        match self {
            Self::Avx2 => 4,
            Self::Neon => 2,
            Self::Scalar => 1,
        }
    }

    /// Returns the name of this SIMD level as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avx2 => "AVX2",
            Self::Neon => "NEON",
            Self::Scalar => "Scalar",
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detect the best available SIMD level for the current CPU (cached)
#[inline]
pub fn detect_simd() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_uncached)
}

/// SIMD level the kernels will actually use
///
/// Always [`SimdLevel::Scalar`] when the `simd` feature is disabled.
#[inline]
pub fn active_simd() -> SimdLevel {
    if cfg!(feature = "simd") {
        detect_simd()
    } else {
        SimdLevel::Scalar
    }
}

#[cold]
fn detect_simd_uncached() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            tracing::debug!("detected AVX2");
            return SimdLevel::Avx2;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory on AArch64
        return SimdLevel::Neon;
    }

    #[allow(unreachable_code)]
    SimdLevel::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simd_detection_is_cached() {
        assert_eq!(detect_simd(), detect_simd());
    }

    #[test]
    fn test_simd_level_ordering() {
        assert!(SimdLevel::Avx2 > SimdLevel::Neon);
        assert!(SimdLevel::Neon > SimdLevel::Scalar);
    }

    #[test]
    fn test_lane_counts() {
        assert_eq!(SimdLevel::Avx2.f64_lanes(), 4);
        assert_eq!(SimdLevel::Avx2.f32_lanes(), 8);
        assert_eq!(SimdLevel::Neon.f64_lanes(), 2);
        assert_eq!(SimdLevel::Neon.f32_lanes(), 4);
        assert_eq!(SimdLevel::Scalar.f64_lanes(), 1);
    }

    #[test]
    fn test_active_level_respects_feature() {
        if cfg!(feature = "simd") {
            assert_eq!(active_simd(), detect_simd());
        } else {
            assert_eq!(active_simd(), SimdLevel::Scalar);
        }
    }
}
