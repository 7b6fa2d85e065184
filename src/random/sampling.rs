//! Unique position sampling: draw `count` distinct slots out of `capacity`
//!
//! Two algorithms are provided:
//!
//! - **Rejection**: draw a uniform index, retry on collision. Cheap when the
//!   requested density is low, but the expected number of draws grows without
//!   bound as `count` approaches `capacity`, so the number of attempts is capped.
//! - **Shuffle**: a partial Fisher-Yates shuffle over a virtual `0..capacity`
//!   array. Only swapped slots are materialised in a map, so memory is
//!   `O(count)` regardless of `capacity`. Always exactly `count` draws.
//!
//! [`SamplingStrategy::Auto`] picks between them by density.

use crate::error::{Error, Result};
use crate::matrix::alloc;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Density (`count / capacity`) at or above which `Auto` uses the shuffle
pub const SHUFFLE_DENSITY: f64 = 0.25;

/// Rejection attempt budget per requested element
pub const REJECTION_ATTEMPTS_PER_ELEMENT: usize = 8;

/// Fixed rejection attempt slack on top of the per-element budget
pub const REJECTION_ATTEMPTS_SLACK: usize = 64;

/// How unique positions are drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Shuffle for dense requests, bounded rejection otherwise (falling back
    /// to shuffle if the bound is hit)
    #[default]
    Auto,
    /// Rejection sampling, failing with [`Error::SamplingExhausted`] after
    /// `max_attempts` draws
    Rejection {
        /// Maximum number of index draws
        max_attempts: usize,
    },
    /// Partial Fisher-Yates shuffle
    Shuffle,
}

impl SamplingStrategy {
    /// Rejection sampling with the default attempt bound for `count` elements
    pub fn rejection_for(count: usize) -> Self {
        Self::Rejection {
            max_attempts: default_attempt_bound(count),
        }
    }
}

/// Default rejection attempt bound for `count` elements
#[inline]
pub fn default_attempt_bound(count: usize) -> usize {
    count
        .saturating_mul(REJECTION_ATTEMPTS_PER_ELEMENT)
        .saturating_add(REJECTION_ATTEMPTS_SLACK)
}

/// Sample `count` distinct positions in `0..capacity`
///
/// Positions are returned in the order they were drawn.
///
/// # Errors
/// - [`Error::InfeasibleDensity`] if `count > capacity`
/// - [`Error::SamplingExhausted`] if an explicit rejection bound is hit
/// - [`Error::OutOfMemory`] if bookkeeping cannot be allocated
pub fn sample_positions<R: Rng + ?Sized>(
    capacity: usize,
    count: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if count > capacity {
        return Err(Error::InfeasibleDensity {
            requested: count,
            capacity,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    match strategy {
        SamplingStrategy::Rejection { max_attempts } => {
            sample_rejection(capacity, count, max_attempts, rng)
        }
        SamplingStrategy::Shuffle => sample_shuffle(capacity, count, rng),
        SamplingStrategy::Auto => {
            let density = count as f64 / capacity as f64;
            if density >= SHUFFLE_DENSITY {
                debug!(capacity, count, density, "sampling positions by shuffle");
                return sample_shuffle(capacity, count, rng);
            }

            debug!(capacity, count, density, "sampling positions by rejection");
            match sample_rejection(capacity, count, default_attempt_bound(count), rng) {
                Err(Error::SamplingExhausted {
                    attempts, placed, ..
                }) => {
                    warn!(
                        capacity,
                        count, attempts, placed, "rejection sampling exhausted, shuffling instead"
                    );
                    sample_shuffle(capacity, count, rng)
                }
                other => other,
            }
        }
    }
}

fn sample_rejection<R: Rng + ?Sized>(
    capacity: usize,
    count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut positions = alloc::try_with_capacity(count)?;
    let mut seen: HashSet<usize> = HashSet::new();
    seen.try_reserve(count).map_err(|_| Error::OutOfMemory {
        size: count.saturating_mul(2 * std::mem::size_of::<usize>()),
    })?;

    let mut attempts = 0;
    while positions.len() < count {
        if attempts == max_attempts {
            return Err(Error::SamplingExhausted {
                attempts,
                placed: positions.len(),
                requested: count,
            });
        }
        attempts += 1;

        let pos = rng.random_range(0..capacity);
        if seen.insert(pos) {
            positions.push(pos);
        }
    }
    Ok(positions)
}

fn sample_shuffle<R: Rng + ?Sized>(
    capacity: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut positions = alloc::try_with_capacity(count)?;
    // Virtual array a[0..capacity] with a[x] == x unless x is a key here
    let mut swapped: HashMap<usize, usize> = HashMap::new();
    swapped.try_reserve(count).map_err(|_| Error::OutOfMemory {
        size: count.saturating_mul(3 * std::mem::size_of::<usize>()),
    })?;

    for i in 0..count {
        let j = rng.random_range(i..capacity);
        let at_j = swapped.get(&j).copied().unwrap_or(j);
        let at_i = swapped.get(&i).copied().unwrap_or(i);
        // Slot i is consumed, so only a[j] needs to be written back
        swapped.insert(j, at_i);
        positions.push(at_j);
    }
    Ok(positions)
}
