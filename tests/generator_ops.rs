//! Tests for the sparse, dense and triplet generators.

mod common;

use common::SEED;
use sparsebench::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Sparse matrices
// ============================================================================

#[test]
fn test_exact_nonzero_count_repeated() {
    let mut rng = seeded_rng(Some(SEED));
    let spec = SparseSpec::new(4, 4, 3);
    for _ in 0..1000 {
        let m: Matrix<f64> =
            generate_sparse(spec, ValueDistribution::Centered, SamplingStrategy::Auto, &mut rng)
                .unwrap();
        assert_eq!(m.len(), 16);
        assert_eq!(m.count_nonzero(), 3);
    }
}

#[test]
fn test_every_strategy_places_exact_count() {
    let spec = SparseSpec::new(50, 40, 300);
    for strategy in [
        SamplingStrategy::Auto,
        SamplingStrategy::Shuffle,
        SamplingStrategy::rejection_for(300),
    ] {
        let mut rng = seeded_rng(Some(SEED));
        let m: Matrix<f32> =
            generate_sparse(spec, ValueDistribution::Centered, strategy, &mut rng).unwrap();
        assert_eq!(m.count_nonzero(), 300, "{:?}", strategy);
    }
}

#[test]
fn test_full_density_fills_every_slot() {
    let mut rng = seeded_rng(Some(SEED));
    let m: Matrix<i64> = generate_sparse(
        SparseSpec::new(6, 5, 30),
        ValueDistribution::SignedByte,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap();
    assert_eq!(m.count_nonzero(), 30);
    assert!(m.as_slice().iter().all(|&v| (-127..=128).contains(&v)));
}

#[test]
fn test_infeasible_density() {
    let mut rng = seeded_rng(Some(SEED));
    let err = generate_sparse::<f64, _>(
        SparseSpec::new(3, 3, 10),
        ValueDistribution::Centered,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InfeasibleDensity {
            requested: 10,
            capacity: 9
        }
    );
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_zero_request_and_empty_shape() {
    let mut rng = seeded_rng(Some(SEED));
    let m: Matrix<f64> = generate_sparse(
        SparseSpec::new(8, 8, 0),
        ValueDistribution::Centered,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap();
    assert_eq!(m.count_nonzero(), 0);

    let empty: Matrix<f64> = generate_sparse(
        SparseSpec::new(0, 0, 0),
        ValueDistribution::Centered,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_same_seed_same_matrix() {
    let a = common::sparse_f64(20, 10, 40, 7);
    let b = common::sparse_f64(20, 10, 40, 7);
    assert_eq!(a, b);
}

#[test]
fn test_centered_values_in_range() {
    let m = common::sparse_f64(30, 30, 200, SEED);
    for &v in m.as_slice() {
        assert!((-0.5..0.5).contains(&v), "value {} out of range", v);
    }
}

#[test]
fn test_float_only_distribution_rejected_for_integers() {
    let mut rng = seeded_rng(Some(SEED));
    let err = generate_sparse::<u64, _>(
        SparseSpec::new(4, 4, 2),
        ValueDistribution::Centered,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_sparse_vector() {
    let mut rng = seeded_rng(Some(SEED));
    let v: Vector<f64> = generate_sparse(
        SparseSpec::vector(12, 12),
        ValueDistribution::Gaussian { std_dev: 1.0 },
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap();
    assert!(v.is_vector());
    assert_eq!(v.count_nonzero(), 12);
}

// ============================================================================
// Dense matrices and triplets
// ============================================================================

#[test]
fn test_dense_shape() {
    let m = common::dense_f64(7, 3, SEED);
    assert_eq!(m.shape(), (3, 7));
}

#[test]
fn test_triplets_unique_and_in_bounds() {
    let mut rng = seeded_rng(Some(SEED));
    let triplets: Vec<Triplet<u64>> = generate_triplets(
        50,
        10,
        ValueDistribution::PERCENT,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap();

    assert_eq!(triplets.len(), 50);
    let mut seen = HashSet::new();
    for t in &triplets {
        assert!(t.row < 10 && t.col < 10);
        assert!((1..=100).contains(&t.value));
        assert!(seen.insert((t.row, t.col)), "duplicate {}", t);
    }
}

#[test]
fn test_triplet_display() {
    let t = Triplet {
        row: 2,
        col: 5,
        value: 42u64,
    };
    assert_eq!(t.to_string(), "Element at (2, 5) = 42");
}

#[test]
fn test_triplets_infeasible() {
    let mut rng = seeded_rng(Some(SEED));
    let err = generate_triplets::<u64, _>(
        5,
        2,
        ValueDistribution::PERCENT,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InfeasibleDensity { requested: 5, capacity: 4 }));
}
