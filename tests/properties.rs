//! Property tests for the algebraic identities the kernels must satisfy.

use proptest::prelude::*;
use sparsebench::prelude::*;

/// Small integer-valued f64 matrices: every product and sum is exact
fn int_matrix(width: usize, height: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(-8i32..=8, width * height).prop_map(move |v| {
        let data = v.into_iter().map(f64::from).collect();
        Matrix::from_vec(data, width, height).unwrap()
    })
}

fn dims() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..12, 1usize..12, 1usize..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_commutative((w, h) in (1usize..20, 1usize..10), seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let a: Matrix<f64> = generate_dense(w, h, ValueDistribution::Centered, &mut rng).unwrap();
        let b: Matrix<f64> = generate_dense(w, h, ValueDistribution::Centered, &mut rng).unwrap();
        prop_assert_eq!(add(&a, &b, Backend::Simd).unwrap(), add(&b, &a, Backend::Simd).unwrap());
    }

    #[test]
    fn prop_add_zero((w, h) in (1usize..20, 1usize..10), seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let a: Matrix<f32> = generate_dense(w, h, ValueDistribution::Centered, &mut rng).unwrap();
        let zero = Matrix::zeros(w, h).unwrap();
        prop_assert_eq!(add(&a, &zero, Backend::Simd).unwrap(), a);
    }

    #[test]
    fn prop_matmul_identity(a in dims().prop_flat_map(|(m, k, _)| int_matrix(k, m))) {
        let i = Matrix::identity(a.width()).unwrap();
        prop_assert_eq!(&matmul(&a, &i, Backend::Simd).unwrap(), &a);
        prop_assert_eq!(&matmul(&a, &i, Backend::Scalar).unwrap(), &a);
    }

    #[test]
    fn prop_matmul_backends_agree(
        (a, b) in dims().prop_flat_map(|(m, k, n)| (int_matrix(k, m), int_matrix(n, k)))
    ) {
        prop_assert_eq!(
            matmul(&a, &b, Backend::Scalar).unwrap(),
            matmul(&a, &b, Backend::Simd).unwrap()
        );
    }

    #[test]
    fn prop_branchy_equals_plain(
        (a, b) in dims().prop_flat_map(|(m, k, n)| (int_matrix(k, m), int_matrix(n, k))),
        seed in any::<u64>(),
    ) {
        prop_assert_eq!(
            matmul_branchy(&a, &b, BranchPattern::Random { seed }).unwrap(),
            matmul(&a, &b, Backend::Scalar).unwrap()
        );
    }

    #[test]
    fn prop_gemv_backends_agree(
        (m, v, u) in (1usize..20, 1usize..12).prop_flat_map(|(w, h)| {
            (int_matrix(w, h), int_matrix(w, 1), int_matrix(h, 1))
        })
    ) {
        prop_assert_eq!(
            matvec(&m, &v, Backend::Scalar).unwrap(),
            matvec(&m, &v, Backend::Simd).unwrap()
        );
        prop_assert_eq!(
            vecmat(&u, &m, Backend::Scalar).unwrap(),
            vecmat(&u, &m, Backend::Simd).unwrap()
        );
    }

    #[test]
    fn prop_sparse_count_exact(
        (w, h) in (1usize..16, 1usize..16),
        fill in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let k = ((w * h) as f64 * fill) as usize;
        let mut rng = seeded_rng(Some(seed));
        let m: Matrix<f64> = generate_sparse(
            SparseSpec::new(w, h, k),
            ValueDistribution::Centered,
            SamplingStrategy::Auto,
            &mut rng,
        )
        .unwrap();
        prop_assert_eq!(m.count_nonzero(), k);
    }
}
