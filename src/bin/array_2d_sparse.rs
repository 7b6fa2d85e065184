//! Row-major versus column-major traversal of sparse-valued arrays
//!
//! Treats a flat buffer of `n` doubles as `h` rows of `n / h` columns, times
//! both traversal orders on two independently generated arrays, then times
//! add, multiply and matrix-vector product on them.

use clap::Parser;
use sparsebench::cli::{self, CommonArgs};
use sparsebench::prelude::*;
use std::process::ExitCode;

/// Time row- and column-order sums over two sparse `(n/h) × h` arrays
#[derive(Parser, Debug)]
#[command(name = "array_2d_sparse", version)]
struct Args {
    /// Total number of elements in each array
    n: usize,
    /// Number of rows
    h: usize,
    /// Non-zero elements per array
    num_elements: usize,

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
    let strategy = args.common.strategy(args.num_elements);

    println!(
        "Array size: {} kB",
        args.n.saturating_mul(std::mem::size_of::<f64>()) / 1024
    );

    cli::require_nonzero("h", args.h)?;
    if args.n % args.h != 0 {
        return Err(Error::invalid_argument(
            "n",
            format!("{} is not divisible by h = {}", args.n, args.h),
        ));
    }
    let (w, h) = (args.n / args.h, args.h);

    let spec = SparseSpec::new(w, h, args.num_elements);
    let array1: Matrix<f64> = generate_sparse(spec, ValueDistribution::Centered, strategy, &mut rng)?;
    let array2: Matrix<f64> = generate_sparse(spec, ValueDistribution::Centered, strategy, &mut rng)?;

    type SumFn = fn(&Matrix<f64>) -> f64;
    let orders: [(&str, SumFn); 2] = [("by columns", sum_by_columns), ("by rows", sum_by_rows)];

    for (name, array) in [("array1", &array1), ("array2", &array2)] {
        for (order, sum) in orders {
            let m = measure(&config, || sum(array))?;
            println!(
                "Calculated {} in {:8.2} ms on {}*{} {} {}.",
                m.result,
                m.median_ms(),
                w,
                h,
                name,
                order
            );
        }
    }

    cli::timed(&config, "Addition time", || add(&array1, &array2, Backend::Scalar))?;

    let rhs = cli::square_operand(array2.clone(), args.num_elements, strategy, &mut rng)?;
    cli::timed(&config, "Multiplication time", || {
        matmul(&array1, &rhs, Backend::Scalar)
    })?;

    let vector = generate_dense(w, 1, ValueDistribution::Centered, &mut rng)?;
    cli::timed(&config, "Matrix-Vector Multiplication time", || {
        matvec(&array1, &vector, Backend::Scalar)
    })?;

    Ok(())
}
