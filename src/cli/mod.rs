//! Shared plumbing for the benchmark programs
//!
//! Every program flattens [`CommonArgs`] into its own clap parser, installs
//! logging with [`init_tracing`], and hands its fallible body to [`finish`]
//! which turns the error into the process exit code.

use crate::error::{Error, Result};
use crate::generator::{SparseSpec, generate_sparse};
use crate::harness::{Clock, HarnessConfig, Measurement, measure};
use crate::matrix::Matrix;
use crate::ops::BranchPattern;
use crate::random::{SamplingStrategy, ValueDistribution, seeded_rng};
use clap::{ArgAction, Args, Parser, ValueEnum};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt::Display;
use std::io::{BufWriter, ErrorKind, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Flags shared by every benchmark program
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Seed for every random draw (falls back to `SPARSEBENCH_SEED`, then OS entropy)
    #[arg(long, env = "SPARSEBENCH_SEED")]
    pub seed: Option<u64>,

    /// Number of timed runs per kernel
    #[arg(long, default_value_t = 1)]
    pub samples: usize,

    /// Untimed runs before the first timed run
    #[arg(long, default_value_t = 0)]
    pub warmup: usize,

    /// Clock used for timing
    #[arg(long, value_enum, default_value = "cpu")]
    pub clock: ClockArg,

    /// How unique non-zero positions are drawn
    #[arg(long, value_enum, default_value = "auto")]
    pub sampling: SamplingArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Harness configuration from the timing flags
    pub fn harness(&self) -> Result<HarnessConfig> {
        let config = HarnessConfig::default()
            .with_clock(self.clock.into())
            .with_samples(self.samples)
            .with_warmup(self.warmup);
        config.validate()?;
        Ok(config)
    }

    /// Random source for the whole run
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }

    /// Position sampling strategy for a request of `count` positions
    pub fn strategy(&self, count: usize) -> SamplingStrategy {
        self.sampling.strategy(count)
    }
}

/// `--clock` values
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ClockArg {
    /// Process CPU time
    Cpu,
    /// Monotonic wall-clock time
    Wall,
}

impl From<ClockArg> for Clock {
    fn from(arg: ClockArg) -> Self {
        match arg {
            ClockArg::Cpu => Clock::ProcessCpu,
            ClockArg::Wall => Clock::Monotonic,
        }
    }
}

/// `--sampling` values
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SamplingArg {
    /// Pick by density, with fallback
    Auto,
    /// Bounded rejection sampling only
    Rejection,
    /// Partial Fisher-Yates only
    Shuffle,
}

impl SamplingArg {
    /// Strategy for drawing `count` positions; rejection gets the default bound
    pub fn strategy(self, count: usize) -> SamplingStrategy {
        match self {
            Self::Auto => SamplingStrategy::Auto,
            Self::Rejection => SamplingStrategy::rejection_for(count),
            Self::Shuffle => SamplingStrategy::Shuffle,
        }
    }
}

/// `--pattern` values for the branch-predictor study
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PatternArg {
    /// Coin flip per output cell
    Random,
    /// Arms alternate cell by cell
    Alternating,
    /// Always the same arm
    Always,
}

impl PatternArg {
    /// Resolve into a [`BranchPattern`], drawing the coin seed from `rng`
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> BranchPattern {
        match self {
            Self::Random => BranchPattern::Random { seed: rng.random() },
            Self::Alternating => BranchPattern::Alternating,
            Self::Always => BranchPattern::AlwaysTaken,
        }
    }
}

/// Parse the command line, exiting 1 on usage errors and 0 for help/version
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Install a stderr fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count
/// starting from `warn`.
pub fn init_tracing(verbose: u8) {
    let installed = if std::env::var_os("RUST_LOG").is_some() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    if let Err(e) = installed {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Map the program body's result to an exit code, reporting any error
pub fn finish(result: Result<()>) -> ExitCode {
    finish_with(result, Error::exit_code)
}

/// Like [`finish`], with a program-specific mapping from error to exit code
pub fn finish_with(result: Result<()>, code: impl Fn(&Error) -> i32) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(u8::try_from(code(&e)).unwrap_or(1))
        }
    }
}

/// Print one line per item through a buffered writer
///
/// A closed reader (broken pipe) ends the listing quietly. Any other write
/// or flush failure is reported.
pub fn write_lines<W: Write, D: Display>(out: W, items: &[D]) -> Result<()> {
    let mut out = BufWriter::new(out);
    let written = items
        .iter()
        .try_for_each(|item| writeln!(out, "{}", item))
        .and_then(|()| out.flush());
    match written {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::Io(e.to_string())),
    }
}

/// Reject a zero value for a positional argument
pub fn require_nonzero(arg: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::invalid_argument(arg, "must be greater than zero"));
    }
    Ok(())
}

/// Timing line: `Label: %8.2f ms`, plus the spread when several runs were timed
pub fn format_timing<R>(label: &str, m: &Measurement<R>) -> String {
    let s = &m.stats;
    if s.count > 1 {
        format!(
            "{}: {:8.2} ms (min {:.2}, mean {:.2}, max {:.2}, n={}, {} clock)",
            label, s.median, s.min, s.mean, s.max, s.count, m.clock
        )
    } else {
        format!("{}: {:8.2} ms", label, s.median)
    }
}

/// Time `f` under `config` and print its timing line
pub fn timed<R, F: FnMut() -> Result<R>>(config: &HarnessConfig, label: &str, f: F) -> Result<R> {
    let m = measure(config, f)?;
    println!("{}", format_timing(label, &m));
    m.result
}

/// Right-hand operand for `A @ B` when A is `height × width`
///
/// The naive multiply needs B to be `width × width`. When A is square, `b`
/// is used as is; otherwise a fresh square operand is generated with the
/// same number of non-zeros, capped at its capacity.
pub fn square_operand<R: Rng + ?Sized>(
    b: Matrix<f64>,
    num_nonzero: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<Matrix<f64>> {
    let width = b.width();
    if b.height() == width {
        return Ok(b);
    }
    let capacity = width.saturating_mul(width);
    let k = num_nonzero.min(capacity);
    tracing::debug!(width, num_nonzero = k, "generating square multiply operand");
    generate_sparse(
        SparseSpec::new(width, width, k),
        ValueDistribution::Centered,
        strategy,
        rng,
    )
}
