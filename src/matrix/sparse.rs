//! Sparse matrix: a growable list of sparse row vectors.
//!
//! Both products cost O(nnz), not O(rows × cols): they walk the stored
//! entries of each row only. The type also carries the textual persistence
//! format the crate round-trips for testing:
//!
//! ```text
//! columns rows used
//! len (column value) × len      -- once per row
//! ```
//!
//! Deserialization validates the declared nonzero total against the count
//! actually stored and rejects the stream otherwise.

use crate::error::TsvdError;
use crate::matrix::Matrix;
use crate::vector::{DenseVector, SparseVector, Vector};
use num_traits::Float;
use rand::Rng;
use std::fmt::Write as _;
use std::io::Read;

/// A sparse matrix built from sparse row vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    columns: usize,
    rows: Vec<SparseVector<T>>,
}

impl<T: Float> SparseMatrix<T> {
    /// An all-zero matrix of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut m = Self {
            columns,
            rows: Vec::with_capacity(rows),
        };
        for _ in 0..rows {
            m.add_row();
        }
        m
    }

    /// Build from dense row data, storing only the nonzero entries.
    /// Panics if the rows have unequal lengths.
    pub fn from_rows(values: &[Vec<T>]) -> Self {
        let columns = values.first().map_or(0, Vec::len);
        let mut m = Self {
            columns,
            rows: Vec::with_capacity(values.len()),
        };
        for row in values {
            assert_eq!(row.len(), columns, "rows must share one column count");
            m.rows.push(SparseVector::from_slice(row));
        }
        m
    }

    /// Append a row of zeros, returning the row count before the append.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(SparseVector::new(self.columns));
        self.rows.len() - 1
    }

    /// Append a column of zeros, resizing every row. Returns the column
    /// count before the append.
    pub fn add_column(&mut self) -> usize {
        self.columns += 1;
        for row in &mut self.rows {
            row.resize_to(self.columns);
        }
        self.columns - 1
    }

    /// Borrow a row.
    pub fn row(&self, row: usize) -> &SparseVector<T> {
        &self.rows[row]
    }

    /// Iterate the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &SparseVector<T>> {
        self.rows.iter()
    }

    /// Release excess backing capacity in every row.
    pub fn trim(&mut self) {
        for row in &mut self.rows {
            row.trim();
        }
    }

    /// Convert to dense row data, materializing the implicit zeros.
    pub fn to_dense_rows(&self) -> Vec<Vec<T>> {
        let mut dense = vec![vec![T::zero(); self.columns]; self.rows.len()];
        for (ri, row) in self.rows.iter().enumerate() {
            for e in row.entries() {
                dense[ri][e.index] = e.value;
            }
        }
        dense
    }
}

impl<T: Float> Matrix<T> for SparseMatrix<T> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn used(&self) -> usize {
        self.rows.iter().map(SparseVector::used).sum()
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
        let mut y = vec![T::zero(); self.row_count()];
        match x {
            Vector::Dense(xd) => {
                let xs = xd.as_slice();
                for (yi, row) in y.iter_mut().zip(&self.rows) {
                    *yi = row
                        .entries()
                        .fold(T::zero(), |acc, e| acc + xs[e.index] * e.value);
                }
            }
            _ => {
                for (yi, row) in y.iter_mut().zip(&self.rows) {
                    *yi = row
                        .entries()
                        .fold(T::zero(), |acc, e| acc + x.get(e.index) * e.value);
                }
            }
        }
        Vector::Dense(DenseVector::from_vec(y))
    }

    fn transpose_multiply(&self, x: &Vector<T>) -> Vector<T> {
        assert_eq!(
            x.size(),
            self.row_count(),
            "Vector.size() != row_count(): {}",
            x.size()
        );
        let mut y = vec![T::zero(); self.column_count()];
        for (i, row) in self.rows.iter().enumerate() {
            let xi = x.get(i);
            if xi == T::zero() {
                continue;
            }
            for e in row.entries() {
                y[e.index] = y[e.index] + xi * e.value;
            }
        }
        Vector::Dense(DenseVector::from_vec(y))
    }
}

impl SparseMatrix<f64> {
    /// A random matrix with the given fill density, entries uniform in
    /// [0, 1). The generator is caller-owned so results are reproducible.
    pub fn random(rows: usize, columns: usize, density: f64, rng: &mut impl Rng) -> Self {
        let mut m = Self::new(rows, columns);
        for i in 0..rows {
            for j in 0..columns {
                if rng.r#gen::<f64>() > density {
                    continue;
                }
                m.put(i, j, rng.r#gen::<f64>());
            }
        }
        m
    }

    /// Parse the textual persistence format.
    pub fn from_text(text: &str) -> Result<Self, TsvdError> {
        fn next<N: std::str::FromStr>(
            tokens: &mut std::str::SplitWhitespace<'_>,
            what: &str,
        ) -> Result<N, TsvdError>
        where
            N::Err: std::fmt::Display,
        {
            tokens
                .next()
                .ok_or_else(|| TsvdError::ParseError(format!("missing {what}")))?
                .parse::<N>()
                .map_err(|e| TsvdError::ParseError(format!("bad {what}: {e}")))
        }

        let mut tokens = text.split_whitespace();
        let columns: usize = next(&mut tokens, "column count")?;
        let rows: usize = next(&mut tokens, "row count")?;
        let used: usize = next(&mut tokens, "nonzero count")?;

        let mut matrix = Self::new(rows, columns);
        for row in 0..rows {
            let len: usize = next(&mut tokens, "row length")?;
            for _ in 0..len {
                let column: usize = next(&mut tokens, "column index")?;
                let value: f64 = next(&mut tokens, "value")?;
                if column >= columns {
                    return Err(TsvdError::ParseError(format!(
                        "column index {column} out of range for {columns} columns"
                    )));
                }
                matrix.put(row, column, value);
            }
        }
        let stored = matrix.used();
        if stored != used {
            return Err(TsvdError::MalformedMatrix {
                declared: used,
                stored,
            });
        }
        Ok(matrix)
    }

    /// Read the textual persistence format from a reader.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, TsvdError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Emit the textual persistence format. `f64` Display round-trips, so
    /// `from_text(to_text(m)) == m` structurally.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {}",
            self.column_count(),
            self.row_count(),
            self.used()
        );
        for row in &self.rows {
            let _ = write!(out, "{}", row.used());
            for e in row.entries() {
                let _ = write!(out, " {} {}", e.index, e.value);
            }
            out.push('\n');
        }
        out
    }
}
