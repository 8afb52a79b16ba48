//! Few-eigenpair solvers for symmetric operators.

use crate::vector::Vector;

pub mod lanczos;
pub(crate) mod tridiag;

pub use lanczos::Lanczos;

/// Which end of the spectrum to extract, compared by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    /// The eigenvalues of largest magnitude.
    Largest,
    /// The eigenvalues of smallest magnitude.
    Smallest,
}

/// Eigenpairs of a symmetric operator, ordered per the selection policy.
///
/// The pair count may be smaller than requested when the Krylov subspace is
/// exhausted before enough pairs accumulate (small dimension, low operator
/// rank). That is a normal outcome, not an error; compare [`found`] against
/// the request.
///
/// [`found`]: EigenPairs::found
#[derive(Debug, Clone)]
pub struct EigenPairs {
    /// Eigenvalues, sorted by magnitude per the selection policy.
    pub values: Vec<f64>,
    /// Unit-norm eigenvectors, positionally paired with `values`.
    pub vectors: Vec<Vector<f64>>,
}

impl EigenPairs {
    /// Number of eigenpairs actually computed.
    pub fn found(&self) -> usize {
        self.values.len()
    }
}
