//! Time sources

use std::fmt;
use std::time::{Duration, Instant};

/// Which clock a measurement reads
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Clock {
    /// CPU time consumed by this process
    ///
    /// Read with `clock_gettime(CLOCK_PROCESS_CPUTIME_ID)` on unix. Platforms
    /// without a process clock fall back to [`Clock::Monotonic`].
    #[default]
    ProcessCpu,
    /// Wall-clock time from the monotonic [`Instant`]
    Monotonic,
}

impl Clock {
    /// Short name used in reports
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProcessCpu => "cpu",
            Self::Monotonic => "wall",
        }
    }

    /// Start a stopwatch on this clock
    pub fn start(self) -> Stopwatch {
        let cpu = match self {
            Self::ProcessCpu => process_cpu_time(),
            Self::Monotonic => None,
        };
        Stopwatch {
            cpu,
            wall: Instant::now(),
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A running measurement started by [`Clock::start`]
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    cpu: Option<Duration>,
    wall: Instant,
}

impl Stopwatch {
    /// Time elapsed since the stopwatch started
    pub fn elapsed(&self) -> Duration {
        match (self.cpu, process_cpu_time()) {
            (Some(start), Some(now)) => now.saturating_sub(start),
            _ => self.wall.elapsed(),
        }
    }
}

#[cfg(unix)]
fn process_cpu_time() -> Option<Duration> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return None;
    }
    Some(Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32))
}

#[cfg(not(unix))]
fn process_cpu_time() -> Option<Duration> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin(iters: u64) -> u64 {
        let mut acc = 0u64;
        for i in 0..iters {
            acc = std::hint::black_box(acc.wrapping_mul(31).wrapping_add(i));
        }
        acc
    }

    #[test]
    fn test_clocks_advance() {
        for clock in [Clock::ProcessCpu, Clock::Monotonic] {
            let sw = clock.start();
            spin(200_000);
            let first = sw.elapsed();
            spin(200_000);
            assert!(sw.elapsed() >= first, "{} went backwards", clock);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_process_clock_available() {
        assert!(process_cpu_time().is_some());
    }
}
