//! Timing harness
//!
//! [`time_it`] runs a closure once and reports how long it took on the
//! process CPU clock. [`measure`] repeats a closure according to a
//! [`HarnessConfig`] and summarizes the timed runs.
//!
//! The closure's return value is handed back untouched so callers can keep
//! using it, and so the optimizer cannot discard the measured work.

mod clock;
mod stats;

pub use clock::{Clock, Stopwatch};
pub use stats::SampleStats;

use crate::error::{Error, Result};
use crate::matrix::alloc;

/// Result of one timed execution
#[derive(Clone, Debug, PartialEq)]
pub struct Timed<R> {
    /// Whatever the closure returned
    pub result: R,
    /// Elapsed time in milliseconds, never negative
    pub elapsed_ms: f64,
}

/// Run `f` once on the process CPU clock
pub fn time_it<R, F: FnOnce() -> R>(f: F) -> Timed<R> {
    time_with(Clock::ProcessCpu, f)
}

/// Run `f` once on the given clock
pub fn time_with<R, F: FnOnce() -> R>(clock: Clock, f: F) -> Timed<R> {
    let sw = clock.start();
    let result = std::hint::black_box(f());
    let elapsed_ms = sw.elapsed().as_secs_f64() * 1e3;
    Timed { result, elapsed_ms }
}

/// How [`measure`] repeats a closure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Clock read around every timed run
    pub clock: Clock,
    /// Number of timed runs, at least 1
    pub samples: usize,
    /// Untimed runs before the first timed run
    pub warmup: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            clock: Clock::ProcessCpu,
            samples: 1,
            warmup: 0,
        }
    }
}

impl HarnessConfig {
    /// Set the clock
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the number of timed runs
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the number of warmup runs
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Reject configurations that would time nothing
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::invalid_argument(
                "samples",
                "at least one timed run is required",
            ));
        }
        Ok(())
    }
}

/// Repeated timings of one closure
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement<R> {
    /// Result of the last timed run
    pub result: R,
    /// Summary over every timed run
    pub stats: SampleStats,
    /// Clock the runs were timed on
    pub clock: Clock,
}

impl<R> Measurement<R> {
    /// Median run time in milliseconds
    pub fn median_ms(&self) -> f64 {
        self.stats.median
    }
}

/// Run `f` `warmup` times untimed, then `samples` times timed
pub fn measure<R, F: FnMut() -> R>(config: &HarnessConfig, mut f: F) -> Result<Measurement<R>> {
    config.validate()?;

    let mut samples = alloc::try_with_capacity(config.samples)?;

    for _ in 0..config.warmup {
        std::hint::black_box(f());
    }

    let mut last = None;
    for i in 0..config.samples {
        let timed = time_with(config.clock, &mut f);
        tracing::trace!(sample = i, elapsed_ms = timed.elapsed_ms, clock = %config.clock, "timed run");
        samples.push(timed.elapsed_ms);
        last = Some(timed.result);
    }

    match (last, SampleStats::from_samples(&samples)) {
        (Some(result), Some(stats)) => Ok(Measurement {
            result,
            stats,
            clock: config.clock,
        }),
        _ => Err(Error::invalid_argument(
            "samples",
            "at least one timed run is required",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_it_returns_result() {
        let t = time_it(|| 40 + 2);
        assert_eq!(t.result, 42);
        assert!(t.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_measure_counts_runs() {
        let mut calls = 0;
        let config = HarnessConfig::default()
            .with_clock(Clock::Monotonic)
            .with_samples(5)
            .with_warmup(2);
        let m = measure(&config, || {
            calls += 1;
            calls
        })
        .unwrap();
        assert_eq!(calls, 7);
        assert_eq!(m.result, 7);
        assert_eq!(m.stats.count, 5);
        assert!(m.stats.min <= m.stats.median && m.stats.median <= m.stats.max);
    }

    #[test]
    fn test_unallocatable_sample_count_is_oom() {
        let config = HarnessConfig::default()
            .with_samples(usize::MAX)
            .with_warmup(3);
        let mut calls = 0;
        let err = measure(&config, || calls += 1).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { .. }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let config = HarnessConfig::default().with_samples(0);
        let err = measure(&config, || ()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "samples", .. }));
    }
}
