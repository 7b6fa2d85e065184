//! SIMD versus scalar kernels on dense random matrices

use clap::Parser;
use sparsebench::cli::{self, CommonArgs};
use sparsebench::prelude::*;
use std::process::ExitCode;

/// Time add, multiply and matrix-vector product with and without SIMD
#[derive(Parser, Debug)]
#[command(name = "simd", version)]
struct Args {
    /// Number of columns, a multiple of 4
    width: usize,
    /// Number of rows
    height: usize,

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

    cli::require_nonzero("width", width)?;
    cli::require_nonzero("height", height)?;
    if width % 4 != 0 {
        return Err(Error::invalid_argument(
            "width",
            format!("{} is not a multiple of 4", width),
        ));
    }

    println!(
        "Sparse matrix size: {} x {} with {} kB",
        width,
        height,
        width.saturating_mul(height) / 1024
    );
    println!("SIMD level: {}", active_simd());

    let a: Matrix<f64> = generate_dense(width, height, ValueDistribution::Centered, &mut rng)?;
    let b: Matrix<f64> = generate_dense(width, height, ValueDistribution::Centered, &mut rng)?;
    let rhs: Matrix<f64> = if width == height {
        b.clone()
    } else {
        generate_dense(width, width, ValueDistribution::Centered, &mut rng)?
    };
    let vector: Vector<f64> = generate_dense(width, 1, ValueDistribution::Centered, &mut rng)?;

    for backend in [Backend::Simd, Backend::Scalar] {
        cli::timed(&config, &format!("Addition time ({})", backend), || {
            add(&a, &b, backend)
        })?;
        cli::timed(&config, &format!("Multiplication time ({})", backend), || {
            matmul(&a, &rhs, backend)
        })?;
        cli::timed(
            &config,
            &format!("Vector-Matrix Multiplication time ({})", backend),
            || matvec(&a, &vector, backend),
        )?;
    }

    Ok(())
}
