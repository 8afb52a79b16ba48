//! Ritz extraction from the projected tridiagonal matrix.
//!
//! The Lanczos expansion reduces the operator to a small real symmetric
//! tridiagonal matrix (α on the diagonal, β off it). Its eigendecomposition
//! is delegated to faer's dense self-adjoint solver; at `m × m` with
//! `m = nev + margin` the cost is negligible next to the operator
//! applications.

use crate::error::TsvdError;
use faer::{Mat, Side};

/// Assemble the dense symmetric tridiagonal projection from the Lanczos
/// coefficients. `betas` must hold exactly one entry fewer than `alphas`.
pub(crate) fn assemble_tridiagonal(alphas: &[f64], betas: &[f64]) -> Mat<f64> {
    let m = alphas.len();
    assert!(m == 0 || betas.len() == m - 1, "betas must have length m - 1");
    Mat::from_fn(m, m, |i, j| {
        if i == j {
            alphas[i]
        } else if i == j + 1 {
            betas[j]
        } else if j == i + 1 {
            betas[i]
        } else {
            0.0
        }
    })
}

/// Diagonalize the projection, returning the Ritz values and the matrix
/// whose columns are the matching Ritz vectors in the reduced basis.
pub(crate) fn ritz_pairs(
    alphas: &[f64],
    betas: &[f64],
) -> Result<(Vec<f64>, Mat<f64>), TsvdError> {
    let t = assemble_tridiagonal(alphas, betas);
    let evd = t
        .as_ref()
        .self_adjoint_eigen(Side::Upper)
        .map_err(TsvdError::Eigen)?;
    let s = evd.S();
    let values = (0..alphas.len()).map(|i| s[i]).collect();
    Ok((values, evd.U().to_owned()))
}
