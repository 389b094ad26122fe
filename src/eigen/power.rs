//! Power iteration for the largest-magnitude eigenpair of a symmetric matrix.
//!
//! Each step applies `A` to the current unit vector `v`, forms the Rayleigh
//! quotient `λ = vᵀAv` and stops once the relative residual
//! `‖Av − λv‖ / |λ|` drops below `tol`. Convergence rate is `|λ₂ / λ₁|`.
//!
//! A start vector that happens to be an eigenvector of a smaller eigenvalue
//! converges at once to the wrong pair, so the iteration runs from two
//! unrelated start vectors and keeps the pair with the larger `|λ|`.
//!
//! When two eigenvalues share the largest magnitude with opposite signs
//! (`±λ`, as on every bipartite graph) the iterate settles into a period-two
//! cycle `v, v', v, …`. That cycle is detected as soon as `v_{k+1} ≈ v_{k−1}`
//! while the residual stays large, and the solve fails with `EigenSolve`
//! instead of running to `max_iters`. [`FaerEigenSolver`](crate::eigen::FaerEigenSolver)
//! handles such spectra and is the better backend for adjacency matrices.

use crate::config::{EigenOptions, EigenTarget};
use crate::core::traits::Scalar;
use crate::eigen::{check_packed, finalize_vector, unpack_symmetric, EigenSolver};
use crate::error::MatError;
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::{Float, NumCast};

/// Iterative backend that never forms a factorization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIteration;

impl PowerIteration {
    pub fn new() -> Self {
        PowerIteration
    }

    /// Run the iteration on a full row-major `n × n` buffer.
    ///
    /// Returns the last iterate and its statistics. `stats.converged` is false
    /// either when `max_iters` ran out or, with `stats.iterations < max_iters`,
    /// when the iterate oscillated between two vectors.
    pub fn run<T: Float>(
        &self,
        n: usize,
        a: &[T],
        opts: &EigenOptions,
    ) -> Result<(Vec<T>, SolveStats<T>), MatError> {
        let tol = <T as NumCast>::from(opts.tol)
            .ok_or(MatError::EigenSolve("tolerance not representable".to_string()))?;
        let conv = Convergence { tol, max_iters: opts.max_iters };

        let first = iterate(n, a, &conv, start_vector(n, Start::Sine))?;
        if !first.stats.converged || n < 2 {
            log_stats(&first.stats);
            return Ok((first.v, first.stats));
        }
        let second = iterate(n, a, &conv, start_vector(n, Start::Cosine))?;
        let spent = first.stats.iterations + second.stats.iterations;
        let mut best = if second.stats.converged && second.lambda.abs() > first.lambda.abs() {
            second
        } else {
            first
        };
        best.stats.iterations = spent;
        log_stats(&best.stats);
        Ok((best.v, best.stats))
    }
}

/// Two start vectors with strictly positive entries, so neither is orthogonal
/// to the Perron vector of a nonnegative matrix, and with no common direction.
#[derive(Debug, Clone, Copy)]
enum Start {
    Sine,
    Cosine,
}

fn start_vector<T: Float>(n: usize, kind: Start) -> Vec<T> {
    let mut v: Vec<T> = (0..n)
        .map(|i| {
            let t = (i + 1) as f64;
            let x = match kind {
                Start::Sine => 1.0 + 0.5 * t.sin(),
                Start::Cosine => 1.0 + 0.5 * (2.0 * t).cos(),
            };
            <T as NumCast>::from(x).unwrap_or_else(T::one)
        })
        .collect();
    normalize(&mut v);
    v
}

struct Run<T> {
    v: Vec<T>,
    lambda: T,
    stats: SolveStats<T>,
}

fn iterate<T: Float>(
    n: usize,
    a: &[T],
    conv: &Convergence<T>,
    mut v: Vec<T>,
) -> Result<Run<T>, MatError> {
    let mut w = vec![T::zero(); n];
    let mut prev = vec![T::zero(); n];
    let mut lambda = T::zero();
    let mut stats = SolveStats { iterations: 0, final_residual: T::infinity(), converged: false };
    let settled_floor = conv.tol.sqrt();

    for it in 1..=conv.max_iters {
        matvec(n, a, &v, &mut w);
        lambda = dot(&v, &w);
        let res = w
            .iter()
            .zip(&v)
            .map(|(&wi, &vi)| (wi - lambda * vi) * (wi - lambda * vi))
            .fold(T::zero(), |acc, x| acc + x)
            .sqrt();
        let (stop, s) = conv.check(res, lambda.abs(), it);
        stats = s;
        if stop {
            break;
        }
        if normalize(&mut w) == T::zero() {
            return Err(MatError::EigenSolve("iteration collapsed to the zero vector".to_string()));
        }
        // `prev` is v_{k-1}, `w` is now v_{k+1}
        let oscillating =
            it >= 2 && distance(&w, &prev) <= conv.tol && stats.final_residual > settled_floor;
        prev.copy_from_slice(&v);
        std::mem::swap(&mut v, &mut w);
        if oscillating {
            log::debug!("power iteration: period-two cycle after {it} iterations");
            break;
        }
    }
    Ok(Run { v, lambda, stats })
}

fn log_stats<T: Float>(stats: &SolveStats<T>) {
    log::debug!(
        "power iteration: {} iterations, relative residual {:?}, converged = {}",
        stats.iterations,
        stats.final_residual.to_f64(),
        stats.converged
    );
}

impl<T> EigenSolver<T> for PowerIteration
where
    T: Float + Scalar,
{
    fn dominant_eigenvector(
        &self,
        n: usize,
        packed_upper: &[T],
        opts: &EigenOptions,
    ) -> Result<Vec<T>, MatError> {
        if opts.target != EigenTarget::LargestMagnitude {
            return Err(MatError::Unsupported(
                "power iteration only targets the largest-magnitude eigenvalue",
            ));
        }
        check_packed(n, packed_upper)?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let a = unpack_symmetric(n, packed_upper);
        let (mut v, stats) = self.run(n, &a, opts)?;
        if !stats.converged {
            return Err(if stats.iterations < opts.max_iters {
                MatError::EigenSolve(format!(
                    "power iteration oscillates after {} iterations: the largest |λ| is \
                     shared by ±λ, use FaerEigenSolver",
                    stats.iterations
                ))
            } else {
                MatError::EigenSolve(format!(
                    "power iteration did not converge in {} iterations",
                    stats.iterations
                ))
            });
        }
        finalize_vector(&mut v, opts);
        Ok(v)
    }
}

fn matvec<T: Float>(n: usize, a: &[T], x: &[T], y: &mut [T]) {
    for i in 0..n {
        y[i] = T::zero();
        for j in 0..n {
            y[i] = y[i] + a[i * n + j] * x[j];
        }
    }
}

fn dot<T: Float>(x: &[T], y: &[T]) -> T {
    x.iter().zip(y).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

fn distance<T: Float>(x: &[T], y: &[T]) -> T {
    x.iter()
        .zip(y)
        .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
        .sqrt()
}

/// Scale to unit length; returns the previous norm.
fn normalize<T: Float>(v: &mut [T]) -> T {
    let norm = dot(v, v).sqrt();
    if norm > T::zero() {
        v.iter_mut().for_each(|x| *x = *x / norm);
    }
    norm
}
