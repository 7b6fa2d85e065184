//! Error types for sparsebench

use thiserror::Error;

/// Result type alias using sparsebench's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating buffers or running kernels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument provided to an operation or program
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Shape mismatch between operands
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape as (height, width)
        expected: (usize, usize),
        /// Actual shape as (height, width)
        got: (usize, usize),
    },

    /// More unique positions were requested than the buffer has slots
    #[error("Infeasible density: {requested} non-zero elements requested for {capacity} slots")]
    InfeasibleDensity {
        /// Requested number of unique positions
        requested: usize,
        /// Number of available slots
        capacity: usize,
    },

    /// Rejection sampling hit its attempt bound before placing every element
    #[error(
        "Sampling exhausted after {attempts} attempts: placed {placed} of {requested} unique positions"
    )]
    SamplingExhausted {
        /// Number of draws performed
        attempts: usize,
        /// Positions placed before giving up
        placed: usize,
        /// Requested number of positions
        requested: usize,
    },

    /// A value distribution kept producing zeros where a non-zero was required
    #[error("Value distribution produced only zeros in {draws} draws")]
    ZeroValues {
        /// Number of consecutive zero draws
        draws: usize,
    },

    /// Writing program output failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error from (height, width) pairs
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Process exit code for this error.
    ///
    /// Allocation failures exit with 2, everything else is a usage or
    /// precondition problem and exits with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::OutOfMemory { .. } => 2,
            _ => 1,
        }
    }
}
