//! Print random coordinate entries of a sparse square matrix

use clap::Parser;
use sparsebench::cli::{self, CommonArgs};
use sparsebench::prelude::*;
use std::process::ExitCode;

/// Generate unique (row, col, value) entries with values in 1..=100
#[derive(Parser, Debug)]
#[command(name = "sparse_matrix", version)]
struct Args {
    /// Number of entries to generate
    num_elements: usize,
    /// Side length of the square matrix
    matrix_size: usize,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args: Args = cli::parse_args();
    cli::init_tracing(args.common.verbose);
    // Allocation failures share exit code 1 with usage errors here
    cli::finish_with(run(&args), |_| 1)
}

fn run(args: &Args) -> Result<()> {
    let config = args.common.harness()?;
    let mut rng = args.common.rng();
    let strategy = args.common.strategy(args.num_elements);

    let m = measure(&config, || {
        generate_triplets::<u64, _>(
            args.num_elements,
            args.matrix_size,
            ValueDistribution::PERCENT,
            strategy,
            &mut rng,
        )
    })?;
    tracing::info!(
        entries = args.num_elements,
        median_ms = m.median_ms(),
        "generated triplets"
    );
    let triplets = m.result?;

    cli::write_lines(std::io::stdout().lock(), &triplets)
}
