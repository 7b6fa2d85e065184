//! Common test utilities
#![allow(dead_code)]

use sparsebench::prelude::*;

/// Seed used by every reproducible test
pub const SEED: u64 = 0x5eed;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Sparse f64 matrix with a fixed seed
pub fn sparse_f64(width: usize, height: usize, num_nonzero: usize, seed: u64) -> Matrix<f64> {
    let mut rng = seeded_rng(Some(seed));
    generate_sparse(
        SparseSpec::new(width, height, num_nonzero),
        ValueDistribution::Centered,
        SamplingStrategy::Auto,
        &mut rng,
    )
    .unwrap()
}

/// Dense f64 matrix with a fixed seed
pub fn dense_f64(width: usize, height: usize, seed: u64) -> Matrix<f64> {
    let mut rng = seeded_rng(Some(seed));
    generate_dense(width, height, ValueDistribution::Centered, &mut rng).unwrap()
}
