//! Matrix module: row-oriented sparse and dense matrices over row vectors.

use crate::vector::Vector;

pub mod dense;
pub mod sparse;

pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;

/// Shared contract of the row-oriented matrix types.
///
/// A matrix is a rectangular collection of row vectors sharing one column
/// count. Both products validate the operand size up front and panic on a
/// mismatch; they never truncate or pad.
pub trait Matrix<T> {
    /// Number of rows.
    fn row_count(&self) -> usize;
    /// Number of columns.
    fn column_count(&self) -> usize;
    /// Count of explicitly stored entries across all rows.
    fn used(&self) -> usize;
    /// Element at `(row, column)`. Panics when either index is out of range.
    fn get(&self, row: usize, column: usize) -> T;
    /// Store `value` at `(row, column)`, returning the previous value.
    fn put(&mut self, row: usize, column: usize, value: T) -> T;
    /// Add `delta` at `(row, column)`, returning the new value.
    fn add(&mut self, row: usize, column: usize, delta: T) -> T;
    /// y = A·x over stored entries only. Panics unless
    /// `x.size() == column_count()`. The result is dense.
    fn mult(&self, x: &Vector<T>) -> Vector<T>;
    /// y = Aᵀ·x over stored entries only. Panics unless
    /// `x.size() == row_count()`. The result is dense.
    fn transpose_multiply(&self, x: &Vector<T>) -> Vector<T>;
}
