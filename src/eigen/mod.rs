//! Dominant-eigenvector backends.
//!
//! A symmetric matrix crosses this boundary as its packed upper triangle:
//! `n * (n + 1) / 2` values, row by row, diagonal included. A backend returns
//! the eigenvector of the dominant eigenvalue as a dense vector of length `n`.
//!
//! Backends:
//! - [`FaerEigenSolver`]: full self-adjoint decomposition through faer.
//! - [`PowerIteration`]: Rayleigh-quotient power iteration, no factorization.

use crate::config::{EigenOptions, EigenTarget};
use crate::error::MatError;
use num_traits::{Float, NumCast};

/// Computes the eigenvector belonging to the dominant eigenvalue of a
/// symmetric matrix given in packed upper-triangular form.
pub trait EigenSolver<T> {
    fn dominant_eigenvector(
        &self,
        n: usize,
        packed_upper: &[T],
        opts: &EigenOptions,
    ) -> Result<Vec<T>, MatError>;
}

pub mod faer_sym;
pub use faer_sym::FaerEigenSolver;

pub mod power;
pub use power::PowerIteration;

/// Length of the packed upper triangle of an `n × n` matrix.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of `(i, j)` (with `i <= j`) inside the packed upper triangle.
#[inline]
pub fn packed_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i <= j && j < n);
    i * (2 * n - i + 1) / 2 + (j - i)
}

pub(crate) fn check_packed<T>(n: usize, packed_upper: &[T]) -> Result<(), MatError> {
    if packed_upper.len() != packed_len(n) {
        return Err(MatError::DimensionMismatch(format!(
            "packed upper triangle of a {n}x{n} matrix needs {} values, got {}",
            packed_len(n),
            packed_upper.len()
        )));
    }
    Ok(())
}

/// Expand the packed triangle into a full row-major `n × n` buffer.
pub(crate) fn unpack_symmetric<T: Copy>(n: usize, packed_upper: &[T]) -> Vec<T> {
    let mut full = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
            full.push(packed_upper[packed_index(n, lo, hi)]);
        }
    }
    full
}

/// Index of the eigenvalue selected by `target`.
///
/// Keys equal up to rounding count as tied; a tie goes to the algebraically
/// larger value (the positive root of a `±λ` pair), then to the later index.
pub(crate) fn select_eigenvalue<T: Float>(values: &[T], target: EigenTarget) -> Option<usize> {
    let key = |v: T| match target {
        EigenTarget::LargestMagnitude => v.abs(),
        EigenTarget::LargestAlgebraic => v,
    };
    let ulps = <T as NumCast>::from(64).unwrap_or_else(T::one);
    let mut best: Option<usize> = None;
    for (k, &v) in values.iter().enumerate() {
        let Some(b) = best else {
            best = Some(k);
            continue;
        };
        let (kv, kb) = (key(v), key(values[b]));
        let slack = T::epsilon() * ulps * kv.abs().max(kb.abs());
        if kv > kb + slack || ((kv - kb).abs() <= slack && v >= values[b]) {
            best = Some(k);
        }
    }
    best
}

/// Scale `v` to unit length and, if requested, make its largest-magnitude
/// component positive.
pub(crate) fn finalize_vector<T: Float>(v: &mut [T], opts: &EigenOptions) {
    let norm = v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt();
    if norm > T::zero() {
        v.iter_mut().for_each(|x| *x = *x / norm);
    }
    if opts.normalize_sign {
        let pivot = v
            .iter()
            .copied()
            .fold(T::zero(), |best, x| if x.abs() > best.abs() { x } else { best });
        if pivot < T::zero() {
            v.iter_mut().for_each(|x| *x = -*x);
        }
    }
}
