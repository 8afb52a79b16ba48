//! Truncated SVD driver on top of the Lanczos eigensolver.
//!
//! For a matrix `A`, the driver runs the eigensolver on the symmetric
//! positive semi-definite operator `v ↦ A·(Aᵀ·v)` over the row space —
//! without ever forming `A·Aᵀ`. Eigenvalues become singular values by square
//! root; eigenvectors are the left singular vectors; right singular vectors
//! are recovered as `Aᵀu`, renormalized.

use crate::config::LanczosOptions;
use crate::eigen::{Lanczos, Which};
use crate::error::TsvdError;
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::cmp::Ordering;

/// A truncated singular value decomposition.
///
/// `values` are nonnegative and descending; `left` and `right` pair with
/// them positionally. The triplet count may be smaller than requested when
/// the eigensolver converges fewer pairs (small matrix, low rank); compare
/// [`found`] against the request. A right vector is `None` when its singular
/// value is numerically zero, in which case it is undefined rather than the
/// result of a division by zero.
///
/// [`found`]: Svd::found
#[derive(Debug, Clone)]
pub struct Svd {
    /// Singular values, descending.
    pub values: Vec<f64>,
    /// Unit-norm left singular vectors (row space of `A`).
    pub left: Vec<Vector<f64>>,
    /// Unit-norm right singular vectors (column space of `A`), or `None`
    /// where σ ≈ 0.
    pub right: Vec<Option<Vector<f64>>>,
}

impl Svd {
    /// Number of singular triplets actually computed.
    pub fn found(&self) -> usize {
        self.values.len()
    }
}

/// Driver computing the `k` largest singular triplets of a matrix.
pub struct TruncatedSvd {
    /// Requested number of singular triplets.
    pub nev: usize,
    /// Parameters forwarded to the inner Lanczos run.
    pub options: LanczosOptions,
}

impl TruncatedSvd {
    /// Create a driver for the `nev` largest singular triplets.
    pub fn new(nev: usize) -> Self {
        Self {
            nev,
            options: LanczosOptions::default(),
        }
    }

    /// Replace the iteration parameters.
    pub fn with_options(mut self, options: LanczosOptions) -> Self {
        self.options = options;
        self
    }

    /// Perform the decomposition. The matrix is only read; no state outlives
    /// the call.
    pub fn decompose<M: Matrix<f64>>(&self, a: &M) -> Result<Svd, TsvdError> {
        let eigen = Lanczos::new(self.nev, Which::Largest)
            .with_options(self.options)
            .decompose(a.row_count(), |v| a.mult(&a.transpose_multiply(v)))?;

        // A slightly negative Ritz value of a PSD operator is round-off;
        // clamp before ordering, since a −1e-16 value sorted by magnitude
        // would otherwise outrank a +1e-18 one and break the descending
        // order after the clamp.
        let mut pairs: Vec<(f64, Vector<f64>)> = eigen
            .values
            .iter()
            .zip(eigen.vectors)
            .map(|(&value, u)| (value.max(0.0).sqrt(), u))
            .collect();
        pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        // Ritz values of a PSD operator carry round-off of order ε·λ_max, so
        // ‖Aᵀu‖ for a zero singular value still comes out around √ε·σ_max.
        // Anything below that scale has no defined direction.
        const SIGMA_RELATIVE_ZERO: f64 = 1e-7;
        let sigma_max = pairs.first().map_or(0.0, |p| p.0);
        let zero_tol = self
            .options
            .breakdown_tol
            .max(sigma_max * SIGMA_RELATIVE_ZERO);

        let mut values = Vec::with_capacity(pairs.len());
        let mut left = Vec::with_capacity(pairs.len());
        let mut right = Vec::with_capacity(pairs.len());
        for (sigma, u) in pairs {
            values.push(sigma);
            let mut v = a.transpose_multiply(&u);
            let norm = v.norm();
            right.push(if norm <= zero_tol {
                None
            } else {
                v.scale(1.0 / norm);
                Some(v)
            });
            left.push(u);
        }
        Ok(Svd {
            values,
            left,
            right,
        })
    }
}
