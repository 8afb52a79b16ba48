use thiserror::Error;

// Unified error type for trusvd
//
// Shape violations on the element/product hot paths (index out of range,
// vector size vs. matrix dimension) are programmer errors and panic via
// assertions at the call site; this enum covers the recoverable conditions.
// A convergence shortfall is not an error at all: the solvers report the
// number of pairs actually found and callers compare it to the request.

#[derive(Error, Debug)]
pub enum TsvdError {
    /// The serialized matrix declared a nonzero count that does not match
    /// the number of entries actually stored after reading all rows.
    #[error("malformed matrix: declared {declared} nonzeros, stored {stored}")]
    MalformedMatrix { declared: usize, stored: usize },
    /// A token in the serialized matrix stream was missing or unparsable.
    #[error("matrix parse error: {0}")]
    ParseError(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// faer's EvdError does not implement std::error::Error, so it is
    /// wrapped by value and displayed through Debug.
    #[error("tridiagonal eigendecomposition failed: {0:?}")]
    Eigen(faer::linalg::evd::EvdError),
}
