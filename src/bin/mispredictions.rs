//! Branch-predictor study on sparse-valued matrix kernels
//!
//! Times add, the branchy multiply (one data-independent branch per output
//! cell), the same multiply without the branch, and a vector-matrix product.

use clap::Parser;
use sparsebench::cli::{self, CommonArgs, PatternArg};
use sparsebench::prelude::*;
use std::process::ExitCode;

/// Time scalar kernels with and without an unpredictable branch
#[derive(Parser, Debug)]
#[command(name = "mispredictions", version)]
struct Args {
    /// Number of columns
    width: usize,
    /// Number of rows
    height: usize,
    /// Non-zero elements per matrix
    num_elements: usize,
    /// Length of the left-multiplied vector; must equal height
    vector_size: usize,

    /// Branch outcome sequence for the branchy multiply
    #[arg(long, value_enum, default_value = "random")]
    pattern: PatternArg,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args: Args = cli::parse_args();
    cli::init_tracing(args.common.verbose);
    cli::finish(run(&args))
}

fn run(args: &Args) -> Result<()> {
    let config = args.common.harness()?;
    let mut rng = args.common.rng();
    let (width, height) = (args.width, args.height);

    if args.vector_size != height {
        return Err(Error::invalid_argument(
            "vector_size",
            format!("must equal height ({}), got {}", height, args.vector_size),
        ));
    }

    println!(
        "Sparse matrix size: {} x {} with {} non-zero elements",
        width, height, args.num_elements
    );

    let spec = SparseSpec::new(width, height, args.num_elements);
    let strategy = args.common.strategy(args.num_elements);
    let a: Matrix<f64> = generate_sparse(spec, ValueDistribution::Centered, strategy, &mut rng)?;
    let b: Matrix<f64> = generate_sparse(spec, ValueDistribution::Centered, strategy, &mut rng)?;
    let vector: Vector<f64> = generate_sparse(
        SparseSpec::vector(args.vector_size, args.vector_size),
        ValueDistribution::Centered,
        args.common.strategy(args.vector_size),
        &mut rng,
    )?;

    let pattern = args.pattern.resolve(&mut rng);
    tracing::info!(%pattern, "branch pattern");

    cli::timed(&config, "Addition time", || add(&a, &b, Backend::Scalar))?;

    let rhs = cli::square_operand(b, args.num_elements, strategy, &mut rng)?;
    let branchy = cli::timed(&config, "Multiplication time", || {
        matmul_branchy(&a, &rhs, pattern)
    })?;
    let plain = cli::timed(&config, "Plain multiplication time", || {
        matmul(&a, &rhs, Backend::Scalar)
    })?;
    debug_assert_eq!(branchy, plain);

    cli::timed(&config, "Vector-Matrix Multiplication time", || {
        vecmat(&vector, &a, Backend::Scalar)
    })?;

    Ok(())
}
