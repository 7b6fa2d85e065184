//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul};

/// Trait for types that can be stored in a benchmark matrix
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Zero-initialized allocation without per-element writes
/// - `Add + Mul` - Operator syntax for callers; kernels use the wrapping forms below
/// - `PartialEq + PartialOrd` - Non-zero checks and comparisons in tests
/// - `Debug + Display` - Reporting generated values
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + PartialEq
    + PartialOrd
    + Debug
    + Display
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type (saturating for integers)
    fn from_f64(v: f64) -> Self;

    /// Zero value
    #[inline]
    fn zero() -> Self {
        Self::zeroed()
    }

    /// One value
    fn one() -> Self;

    /// Kernel addition: IEEE for floats, two's-complement wrapping for integers
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Kernel multiplication: IEEE for floats, two's-complement wrapping for integers
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Returns true if this value is the additive identity
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_element {
    (@impl $ty:ty, $dtype:expr, $one:expr, $add:expr, $mul:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $ty
            }

            #[inline]
            fn one() -> Self {
                $one
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                let add: fn($ty, $ty) -> $ty = $add;
                add(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                let mul: fn($ty, $ty) -> $ty = $mul;
                mul(self, rhs)
            }
        }
    };
    ($ty:ty, $dtype:expr, $one:expr, float) => {
        impl_element!(@impl $ty, $dtype, $one, |a, b| a + b, |a, b| a * b);
    };
    ($ty:ty, $dtype:expr, $one:expr, int) => {
        impl_element!(@impl $ty, $dtype, $one, <$ty>::wrapping_add, <$ty>::wrapping_mul);
    };
}

impl_element!(f64, DType::F64, 1.0, float);
impl_element!(f32, DType::F32, 1.0, float);
impl_element!(i64, DType::I64, 1, int);
impl_element!(i32, DType::I32, 1, int);
impl_element!(u64, DType::U64, 1, int);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(f32::DTYPE, DType::F32);
        assert_eq!(i64::DTYPE, DType::I64);
        assert_eq!(i32::DTYPE, DType::I32);
        assert_eq!(u64::DTYPE, DType::U64);
    }

    #[test]
    fn test_zero_one() {
        assert!(f64::zero().is_zero());
        assert!(!f64::one().is_zero());
        assert_eq!(i64::zero(), 0);
        assert_eq!(u64::one(), 1);
    }

    #[test]
    fn test_from_f64_truncates_integers() {
        assert_eq!(i64::from_f64(-3.7), -3);
        assert_eq!(u64::from_f64(42.9), 42);
        assert_eq!(u64::from_f64(-1.0), 0);
        assert_eq!(f32::from_f64(0.25), 0.25f32);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(Element::wrapping_add(u64::MAX, 2u64), 1);
        assert_eq!(Element::wrapping_mul(u64::MAX, 2u64), u64::MAX - 1);
        assert_eq!(Element::wrapping_add(i32::MAX, 1i32), i32::MIN);
        assert_eq!(Element::wrapping_add(0.5f64, 0.25), 0.75);
        assert_eq!(Element::wrapping_mul(1.5f32, 2.0), 3.0);
    }
}
