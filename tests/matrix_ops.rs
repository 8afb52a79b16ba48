//! Tests for the matrix primitives: product definitions, the adjoint
//! identity, and the textual persistence round-trip, on small seeded random
//! matrices.

use rand::{Rng, SeedableRng, rngs::StdRng};
use trusvd::matrix::{DenseMatrix, Matrix, SparseMatrix};
use trusvd::vector::Vector;

use approx::assert_abs_diff_eq;

fn random_vector(n: usize, rng: &mut StdRng) -> Vector<f64> {
    Vector::from_slice(&(0..n).map(|_| rng.r#gen::<f64>() - 0.5).collect::<Vec<_>>())
}

/// `A.mult(x)` must agree elementwise with the textbook sum
/// `y[i] = Σ_j A[i][j]·x[j]`, even though the sparse product only walks
/// stored entries.
#[test]
fn mult_matches_elementwise_definition() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = SparseMatrix::random(8, 5, 0.4, &mut rng);
    let x = random_vector(5, &mut rng);
    let y = a.mult(&x);
    assert_eq!(y.size(), a.row_count());
    for i in 0..a.row_count() {
        let expected: f64 = (0..a.column_count()).map(|j| a.get(i, j) * x.get(j)).sum();
        assert_abs_diff_eq!(y.get(i), expected, epsilon = 1e-12);
    }
}

/// Adjoint identity: ⟨A·x, y⟩ == ⟨x, Aᵀ·y⟩ for all compatible x, y.
#[test]
fn transpose_multiply_is_the_adjoint() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = SparseMatrix::random(6, 9, 0.3, &mut rng);
    let x = random_vector(9, &mut rng);
    let y = random_vector(6, &mut rng);
    assert_abs_diff_eq!(
        a.mult(&x).dot(&y),
        x.dot(&a.transpose_multiply(&y)),
        epsilon = 1e-12
    );
}

/// Sparse and dense matrices built from the same data produce the same
/// products.
#[test]
fn sparse_and_dense_products_agree() {
    let rows = vec![
        vec![1.0, 0.0, -2.0],
        vec![0.0, 0.0, 3.5],
        vec![4.0, 5.0, 0.0],
        vec![0.0, -1.0, 0.0],
    ];
    let sparse = SparseMatrix::from_rows(&rows);
    let dense = DenseMatrix::from_rows(&rows);
    let x = Vector::from_slice(&[0.5, -1.0, 2.0]);
    let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(sparse.mult(&x), dense.mult(&x));
    assert_eq!(sparse.transpose_multiply(&y), dense.transpose_multiply(&y));
}

/// Round trip through the textual format preserves structural equality.
#[test]
fn serialization_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    let a = SparseMatrix::random(10, 7, 0.25, &mut rng);
    let back = SparseMatrix::from_text(&a.to_text()).unwrap();
    assert_eq!(back, a);
    assert_eq!(back.used(), a.used());
}

/// Reading the format through the io wrapper behaves like parsing the text.
#[test]
fn read_from_reader() {
    let a = SparseMatrix::from_rows(&[vec![0.0, 2.0], vec![1.0, 0.0]]);
    let text = a.to_text();
    let back = SparseMatrix::read_from(text.as_bytes()).unwrap();
    assert_eq!(back, a);
}

/// Growth: appended rows and columns start zeroed and report the previous
/// count, and products see the new shape.
#[test]
fn growth_keeps_shape_consistent() {
    let mut a = SparseMatrix::from_rows(&[vec![1.0, 2.0]]);
    assert_eq!(a.add_row(), 1);
    assert_eq!(a.add_column(), 2);
    a.put(1, 2, 5.0);
    let y = a.mult(&Vector::from_slice(&[1.0, 1.0, 1.0]));
    assert_eq!(y, Vector::from_slice(&[3.0, 5.0]));
}
