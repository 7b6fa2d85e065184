//! Data type system for benchmark buffers
//!
//! The element type of a buffer is a generic parameter bounded by [`Element`];
//! [`DType`] names it at runtime for SIMD dispatch and reporting.

mod element;

pub use element::Element;

use std::fmt;

/// Element types supported by the generators and kernels
///
/// Discriminants are stable and follow the float/signed/unsigned grouping:
/// floats 0-9, signed integers 10-19, unsigned integers 20-29.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 64-bit unsigned integer
    U64 = 20,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 | Self::U64 => 8,
            Self::F32 | Self::I32 => 4,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this type can represent negative values
    #[inline]
    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::U64)
    }

    /// Short lowercase name, as used in benchmark reports
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::I64.size_in_bytes(), 8);
        assert_eq!(DType::I32.size_in_bytes(), 4);
        assert_eq!(DType::U64.size_in_bytes(), 8);
    }

    #[test]
    fn test_dtype_predicates() {
        assert!(DType::F64.is_float());
        assert!(!DType::I64.is_float());
        assert!(DType::I32.is_signed());
        assert!(!DType::U64.is_signed());
        assert_eq!(DType::F32.to_string(), "f32");
    }
}
