//! End-to-end scenarios for the Lanczos eigensolver and the truncated SVD
//! driver: known small decompositions, degenerate spectra, shortfall
//! behavior, the singular triplet relation, and seed determinism.

use rand::{SeedableRng, rngs::StdRng};
use trusvd::config::LanczosOptions;
use trusvd::eigen::{Lanczos, Which};
use trusvd::matrix::{Matrix, SparseMatrix};
use trusvd::svd::TruncatedSvd;

use approx::assert_abs_diff_eq;

/// diag(3, 1, 2): the top eigenpair of AAᵀ is (9, e₀), so the top singular
/// triplet is σ = 3 with left and right vectors ±e₀.
#[test]
fn diagonal_top_triplet() {
    let a = SparseMatrix::from_rows(&[
        vec![3.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 2.0],
    ]);

    let eigen = Lanczos::new(1, Which::Largest)
        .decompose(a.row_count(), |v| a.mult(&a.transpose_multiply(v)))
        .unwrap();
    assert_eq!(eigen.found(), 1);
    assert_abs_diff_eq!(eigen.values[0], 9.0, epsilon = 1e-8);

    let svd = TruncatedSvd::new(1).decompose(&a).unwrap();
    assert_eq!(svd.found(), 1);
    assert_abs_diff_eq!(svd.values[0], 3.0, epsilon = 1e-8);
    for v in [&svd.left[0], svd.right[0].as_ref().unwrap()] {
        assert_abs_diff_eq!(v.get(0).abs(), 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(v.get(1), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(v.get(2), 0.0, epsilon = 1e-8);
    }
}

/// [[0,1],[1,0]]: AAᵀ is the identity, a fully degenerate spectrum. Any
/// orthonormal set is a valid eigenbasis and the Krylov subspace collapses
/// after one step, so only the eigenvalues are checked: every returned value
/// must be 1, and at least one pair must come back.
#[test]
fn degenerate_spectrum_checks_values_only() {
    let a = SparseMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]);
    let eigen = Lanczos::new(2, Which::Largest)
        .decompose(a.row_count(), |v| a.mult(&a.transpose_multiply(v)))
        .unwrap();
    assert!(eigen.found() >= 1);
    for &value in &eigen.values {
        assert_abs_diff_eq!(value, 1.0, epsilon = 1e-10);
    }
    let svd = TruncatedSvd::new(2).decompose(&a).unwrap();
    for &sigma in &svd.values {
        assert_abs_diff_eq!(sigma, 1.0, epsilon = 1e-10);
    }
}

/// Requesting more pairs than the dimension must return at most
/// `row_count` pairs, never fail.
#[test]
fn oversized_request_is_clamped() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = SparseMatrix::random(3, 4, 0.8, &mut rng);
    let svd = TruncatedSvd::new(10).decompose(&a).unwrap();
    assert!(svd.found() <= a.row_count());
    assert!(svd.found() >= 1);
}

/// The Ritz values of a positive semi-definite operator carry no spurious
/// negative eigenvalues beyond round-off.
#[test]
fn psd_operator_values_are_nonnegative() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = SparseMatrix::random(12, 20, 0.3, &mut rng);
    let eigen = Lanczos::new(5, Which::Largest)
        .decompose(a.row_count(), |v| a.mult(&a.transpose_multiply(v)))
        .unwrap();
    for &value in &eigen.values {
        assert!(value >= -1e-8, "spurious negative eigenvalue {value}");
    }
}

/// Full-rank decomposition: values descending and nonnegative, and each
/// triplet satisfies A·vᵢ ≈ σᵢ·uᵢ.
#[test]
fn singular_triplet_relation_holds() {
    let a = SparseMatrix::from_rows(&[
        vec![1.0, 2.0, 0.0],
        vec![0.0, 3.0, 4.0],
        vec![1.0, 0.0, 1.0],
    ]);
    let svd = TruncatedSvd::new(3).decompose(&a).unwrap();
    assert_eq!(svd.found(), 3);
    for w in svd.values.windows(2) {
        assert!(w[0] >= w[1], "singular values not descending: {:?}", svd.values);
    }
    for i in 0..svd.found() {
        assert!(svd.values[i] >= 0.0);
        let v = svd.right[i].as_ref().expect("full-rank right vector");
        let av = a.mult(v);
        for j in 0..a.row_count() {
            assert_abs_diff_eq!(
                av.get(j),
                svd.values[i] * svd.left[i].get(j),
                epsilon = 1e-6
            );
        }
    }
}

/// Identical seeds reproduce the decomposition bit for bit; different seeds
/// agree on the singular values within tolerance.
#[test]
fn seeded_runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(29);
    let a = SparseMatrix::random(9, 6, 0.5, &mut rng);

    let first = TruncatedSvd::new(3).decompose(&a).unwrap();
    let second = TruncatedSvd::new(3).decompose(&a).unwrap();
    assert_eq!(first.values, second.values);
    for (u, w) in first.left.iter().zip(&second.left) {
        assert_eq!(u, w);
    }

    let reseeded = TruncatedSvd::new(3)
        .with_options(LanczosOptions {
            seed: 12345,
            ..LanczosOptions::default()
        })
        .decompose(&a)
        .unwrap();
    assert_eq!(reseeded.found(), first.found());
    for (&a, &b) in first.values.iter().zip(&reseeded.values) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-8);
    }
}

/// A wider margin may not change the answer on an easy spectrum, only the
/// work done; the option is honored end to end.
#[test]
fn margin_option_is_honored() {
    let a = SparseMatrix::from_rows(&[
        vec![5.0, 0.0, 0.0, 0.0],
        vec![0.0, 4.0, 0.0, 0.0],
        vec![0.0, 0.0, 3.0, 0.0],
        vec![0.0, 0.0, 0.0, 2.0],
    ]);
    let narrow = TruncatedSvd::new(2)
        .with_options(LanczosOptions {
            margin: 2,
            ..LanczosOptions::default()
        })
        .decompose(&a)
        .unwrap();
    let wide = TruncatedSvd::new(2)
        .with_options(LanczosOptions {
            margin: 32,
            ..LanczosOptions::default()
        })
        .decompose(&a)
        .unwrap();
    assert_eq!(narrow.found(), 2);
    assert_eq!(wide.found(), 2);
    for (&x, &y) in narrow.values.iter().zip(&wide.values) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-8);
    }
    assert_abs_diff_eq!(wide.values[0], 5.0, epsilon = 1e-8);
    assert_abs_diff_eq!(wide.values[1], 4.0, epsilon = 1e-8);
}
