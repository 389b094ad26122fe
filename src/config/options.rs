//! API options for the dominant-eigenvector computation.
//!
//! This module provides the `EigenOptions` struct, which selects which
//! eigenpair counts as "dominant" and bounds the work an iterative backend
//! may spend before giving up. The dense backend ignores `tol` and
//! `max_iters`; the power iteration honours all of them.

/// Which eigenvalue the solver should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenTarget {
    /// Largest |λ| ("LM").
    #[default]
    LargestMagnitude,
    /// Largest λ ("LA").
    LargestAlgebraic,
}

/// Eigen-solver selection & parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenOptions {
    /// Target eigenvalue (largest magnitude or largest algebraic)
    pub target: EigenTarget,

    /// Relative residual tolerance ‖Av − λv‖ / |λ| for iterative backends
    pub tol: f64,

    /// Iteration cap for iterative backends
    pub max_iters: usize,

    /// Flip the result so that its largest-magnitude component is positive
    pub normalize_sign: bool,
}

impl Default for EigenOptions {
    fn default() -> Self {
        Self {
            target: EigenTarget::LargestMagnitude,
            tol: 1e-10,
            max_iters: 10_000,
            normalize_sign: true,
        }
    }
}

impl EigenOptions {
    pub fn with_target(mut self, target: EigenTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}
