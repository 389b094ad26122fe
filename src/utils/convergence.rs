//! Convergence tracking & tolerance checks for iterative eigen solvers.

/// Stopping criteria & stats.
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given the current residual `res_norm`,
    /// the normalising `scale` and iteration `i`.
    ///
    /// `converged` is only set when the relative residual is within `tol`;
    /// hitting `max_iters` stops without converging.
    pub fn check(&self, res_norm: T, scale: T, i: usize) -> (bool, SolveStats<T>) {
        let rel = if scale > T::zero() { res_norm / scale } else { res_norm };
        let converged = rel <= self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: rel,
                converged,
            },
        )
    }
}
