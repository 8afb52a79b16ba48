//! Configuration for the iterative solvers.

pub mod options;
pub use options::LanczosOptions;
