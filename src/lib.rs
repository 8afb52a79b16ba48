//! trusvd: truncated SVD via matrix-free Lanczos iteration
//!
//! This crate computes a small number of extremal eigenpairs of a large symmetric
//! operator given only a matrix-vector callback, and builds a truncated Singular
//! Value Decomposition of a sparse (or dense) matrix on top of that solver.
//! The derived operator `A·Aᵀ` is never formed explicitly; the eigensolver sees
//! an abstract vector space and an operator closure, nothing else.

pub mod config;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod svd;
pub mod vector;

// Re-exports for convenience
pub use config::LanczosOptions;
pub use eigen::{EigenPairs, Lanczos, Which};
pub use error::TsvdError;
pub use matrix::{DenseMatrix, Matrix, SparseMatrix};
pub use svd::{Svd, TruncatedSvd};
pub use vector::{DenseVector, Entry, SparseVector, Vector};
