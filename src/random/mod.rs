//! Random sources and value distributions
//!
//! Randomness is always supplied by the caller: every generator takes
//! `&mut R where R: Rng + ?Sized`. Programs build their source with
//! [`seeded_rng`], tests pass a fixed seed for reproducible buffers.

mod sampling;

pub use sampling::{
    REJECTION_ATTEMPTS_PER_ELEMENT, REJECTION_ATTEMPTS_SLACK, SHUFFLE_DENSITY, SamplingStrategy,
    default_attempt_bound, sample_positions,
};

use crate::dtype::Element;
use crate::error::{Error, Result};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use std::marker::PhantomData;

/// Consecutive zero draws tolerated by [`ValueSampler::sample_nonzero`]
pub const MAX_ZERO_DRAWS: usize = 1024;

/// Build the process random source
///
/// With a seed the stream is reproducible; without one it is seeded from the
/// operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Distribution of the values written into generated buffers
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ValueDistribution {
    /// Uniform float in `[-0.5, 0.5)`
    #[default]
    Centered,
    /// Uniform integer in `[-127, 128]`
    SignedByte,
    /// Uniform integer in `[1, max]`
    Positive {
        /// Inclusive upper bound
        max: u64,
    },
    /// Normal with mean 0
    Gaussian {
        /// Standard deviation
        std_dev: f64,
    },
}

impl ValueDistribution {
    /// Positive integers in `[1, 100]`
    pub const PERCENT: Self = Self::Positive { max: 100 };

    /// Validate this distribution for element type `T` and prepare a sampler
    pub fn sampler<T: Element>(&self) -> Result<ValueSampler<T>> {
        let kind = match *self {
            Self::Centered => {
                if !T::DTYPE.is_float() {
                    return Err(Error::invalid_argument(
                        "distribution",
                        format!("centered values truncate to zero for {}", T::DTYPE),
                    ));
                }
                SamplerKind::Centered
            }
            Self::SignedByte => {
                if !T::DTYPE.is_signed() {
                    return Err(Error::invalid_argument(
                        "distribution",
                        format!("signed values cannot be stored in {}", T::DTYPE),
                    ));
                }
                let dist = Uniform::new_inclusive(-127i64, 128)
                    .map_err(|e| Error::invalid_argument("distribution", e.to_string()))?;
                SamplerKind::SignedByte(dist)
            }
            Self::Positive { max } => {
                if max == 0 {
                    return Err(Error::invalid_argument("max", "must be at least 1"));
                }
                let dist = Uniform::new_inclusive(1u64, max)
                    .map_err(|e| Error::invalid_argument("max", e.to_string()))?;
                SamplerKind::Positive(dist)
            }
            Self::Gaussian { std_dev } => {
                if !T::DTYPE.is_float() {
                    return Err(Error::invalid_argument(
                        "distribution",
                        format!("gaussian values require a float dtype, got {}", T::DTYPE),
                    ));
                }
                if !(std_dev.is_finite() && std_dev > 0.0) {
                    return Err(Error::invalid_argument(
                        "std_dev",
                        format!("must be finite and positive, got {}", std_dev),
                    ));
                }
                let dist = Normal::new(0.0, std_dev)
                    .map_err(|e| Error::invalid_argument("std_dev", e.to_string()))?;
                SamplerKind::Gaussian(dist)
            }
        };
        Ok(ValueSampler {
            kind,
            _marker: PhantomData,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum SamplerKind {
    Centered,
    SignedByte(Uniform<i64>),
    Positive(Uniform<u64>),
    Gaussian(Normal<f64>),
}

/// A validated [`ValueDistribution`] bound to an element type
#[derive(Copy, Clone, Debug)]
pub struct ValueSampler<T> {
    kind: SamplerKind,
    _marker: PhantomData<T>,
}

impl<T: Element> ValueSampler<T> {
    /// Draw one value (may be zero)
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match &self.kind {
            SamplerKind::Centered => T::from_f64(rng.random::<f64>() - 0.5),
            SamplerKind::SignedByte(d) => T::from_f64(d.sample(rng) as f64),
            SamplerKind::Positive(d) => T::from_f64(d.sample(rng) as f64),
            SamplerKind::Gaussian(d) => T::from_f64(d.sample(rng)),
        }
    }

    /// Draw one non-zero value
    ///
    /// Zero draws are redrawn, at most [`MAX_ZERO_DRAWS`] times. A Gaussian
    /// whose spread rounds to zero in `T` fails with
    /// [`Error::ZeroValues`] instead of spinning.
    #[inline]
    pub fn sample_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        for _ in 0..MAX_ZERO_DRAWS {
            let v = self.sample(rng);
            if !v.is_zero() {
                return Ok(v);
            }
        }
        Err(Error::ZeroValues {
            draws: MAX_ZERO_DRAWS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_centered_range() {
        let mut rng = seeded_rng(Some(1));
        let sampler = ValueDistribution::Centered.sampler::<f64>().unwrap();
        for _ in 0..1000 {
            let v = sampler.sample_nonzero(&mut rng).unwrap();
            assert!((-0.5..0.5).contains(&v), "centered value {} out of range", v);
            assert_ne!(v, 0.0);
        }
    }

    #[test]
    fn test_signed_byte_range() {
        let mut rng = seeded_rng(Some(2));
        let sampler = ValueDistribution::SignedByte.sampler::<i64>().unwrap();
        for _ in 0..1000 {
            let v = sampler.sample_nonzero(&mut rng).unwrap();
            assert!((-127..=128).contains(&v));
            assert_ne!(v, 0);
        }
    }

    #[test]
    fn test_positive_range() {
        let mut rng = seeded_rng(Some(3));
        let sampler = ValueDistribution::PERCENT.sampler::<u64>().unwrap();
        for _ in 0..1000 {
            let v = sampler.sample(&mut rng);
            assert!((1..=100).contains(&v));
        }
    }

    #[test]
    fn test_incompatible_dtypes_rejected() {
        assert!(ValueDistribution::Centered.sampler::<i64>().is_err());
        assert!(ValueDistribution::SignedByte.sampler::<u64>().is_err());
        assert!(ValueDistribution::Positive { max: 0 }.sampler::<u64>().is_err());
        assert!(
            ValueDistribution::Gaussian { std_dev: -1.0 }
                .sampler::<f64>()
                .is_err()
        );
        assert!(
            ValueDistribution::Gaussian { std_dev: 1.0 }
                .sampler::<i32>()
                .is_err()
        );
    }

    #[test]
    fn test_degenerate_gaussian_rejected() {
        for std_dev in [0.0, -0.0, f64::NAN, f64::INFINITY] {
            let err = ValueDistribution::Gaussian { std_dev }
                .sampler::<f64>()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { arg: "std_dev", .. }));
        }
    }

    #[test]
    fn test_sample_nonzero_gives_up_on_underflow() {
        // Every f64 draw of this spread rounds to 0.0 as f32
        let sampler = ValueDistribution::Gaussian { std_dev: 1e-300 }
            .sampler::<f32>()
            .unwrap();
        let mut rng = seeded_rng(Some(4));
        let err = sampler.sample_nonzero(&mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::ZeroValues {
                draws: MAX_ZERO_DRAWS
            }
        );
    }
}
