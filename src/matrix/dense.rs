//! Dense matrix: the same row-oriented contract over dense row vectors.
//!
//! Used where the fill-in is high enough that sparse bookkeeping costs more
//! than it saves. The eigensolver and SVD driver never care which variant
//! backs the operator; both satisfy the same [`Matrix`] contract.

use crate::matrix::Matrix;
use crate::vector::{DenseVector, Vector};
use num_traits::Float;

/// A dense matrix built from dense row vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    columns: usize,
    rows: Vec<DenseVector<T>>,
}

impl<T: Float> DenseMatrix<T> {
    /// An all-zero matrix of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: (0..rows).map(|_| DenseVector::new(columns)).collect(),
        }
    }

    /// Build from row data. Panics if the rows have unequal lengths.
    pub fn from_rows(values: &[Vec<T>]) -> Self {
        let columns = values.first().map_or(0, Vec::len);
        let rows = values
            .iter()
            .map(|row| {
                assert_eq!(row.len(), columns, "rows must share one column count");
                DenseVector::from_slice(row)
            })
            .collect();
        Self { columns, rows }
    }

    /// Borrow a row.
    pub fn row(&self, row: usize) -> &DenseVector<T> {
        &self.rows[row]
    }
}

impl<T: Float> Matrix<T> for DenseMatrix<T> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn used(&self) -> usize {
        self.rows.len() * self.columns
    }

    fn get(&self, row: usize, column: usize) -> T {
        self.rows[row].get(column)
    }

    fn put(&mut self, row: usize, column: usize, value: T) -> T {
        self.rows[row].put(column, value)
    }

    fn add(&mut self, row: usize, column: usize, delta: T) -> T {
        self.rows[row].add(column, delta)
    }

    fn mult(&self, x: &Vector<T>) -> Vector<T> {
        assert_eq!(
            x.size(),
            self.column_count(),
            "Vector.size() != column_count(): {}",
            x.size()
        );
        let y = self
            .rows
            .iter()
            .map(|row| {
                row.as_slice()
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (j, &v)| acc + v * x.get(j))
            })
            .collect();
        Vector::Dense(DenseVector::from_vec(y))
    }

    fn transpose_multiply(&self, x: &Vector<T>) -> Vector<T> {
        assert_eq!(
            x.size(),
            self.row_count(),
            "Vector.size() != row_count(): {}",
            x.size()
        );
        let mut y = vec![T::zero(); self.columns];
        for (i, row) in self.rows.iter().enumerate() {
            let xi = x.get(i);
            for (j, &v) in row.as_slice().iter().enumerate() {
                y[j] = y[j] + xi * v;
            }
        }
        Vector::Dense(DenseVector::from_vec(y))
    }
}
