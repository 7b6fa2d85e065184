//! Fallible buffer allocation
//!
//! Every buffer in the crate goes through these helpers so heap exhaustion
//! surfaces as [`Error::OutOfMemory`] instead of aborting the process.

use crate::dtype::Element;
use crate::error::{Error, Result};

/// Number of bytes needed for `len` elements of `T`, or `OutOfMemory` on overflow
#[inline]
pub(crate) fn byte_size<T>(len: usize) -> Result<usize> {
    len.checked_mul(std::mem::size_of::<T>())
        .ok_or(Error::OutOfMemory { size: usize::MAX })
}

/// Allocate an empty vector with room for exactly `capacity` elements
pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let size = byte_size::<T>(capacity)?;
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| Error::OutOfMemory { size })?;
    Ok(v)
}

/// Allocate a zero-filled vector of `len` elements
pub(crate) fn try_zeroed<T: Element>(len: usize) -> Result<Vec<T>> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, T::zero());
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_zeroed() {
        let v: Vec<f64> = try_zeroed(16).unwrap();
        assert_eq!(v.len(), 16);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_byte_size_overflow_is_oom() {
        let err = byte_size::<f64>(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { .. }));
    }

    #[test]
    fn test_huge_allocation_is_oom() {
        // Fits in usize but no allocator will hand this out
        let err = try_zeroed::<u64>(usize::MAX / 16).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
