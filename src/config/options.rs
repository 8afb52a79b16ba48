//! API options for the Lanczos eigensolver.
//!
//! This module provides the `LanczosOptions` struct, which carries the knobs
//! a caller may want to turn on a decomposition: the seed of the starting
//! vector, the number of extra Krylov steps taken beyond the requested pair
//! count, and the breakdown tolerance. All of them have sensible defaults;
//! the seed is explicit (never hidden global state) so that repeated runs on
//! identical input are bit-reproducible.

/// Lanczos iteration parameters.
#[derive(Debug, Clone, Copy)]
pub struct LanczosOptions {
    /// Seed for the pseudo-random unit-norm starting vector. Two runs with
    /// the same seed and input produce identical output.
    pub seed: u64,

    /// Extra Krylov steps beyond the requested pair count. The expansion
    /// runs for `min(n, nev + margin)` steps; a larger margin buys Ritz
    /// accuracy at the cost of extra operator applications and an O(m²)
    /// reorthogonalization term.
    pub margin: usize,

    /// Threshold under which an off-diagonal β is treated as zero and the
    /// Krylov subspace as exhausted (invariant subspace found).
    pub breakdown_tol: f64,
}

impl Default for LanczosOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            margin: 16,
            breakdown_tol: 1e-12,
        }
    }
}
