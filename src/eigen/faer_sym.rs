//! Dense symmetric eigensolver using Faer.
//!
//! Unpacks the upper triangle into a `faer::Mat`, runs the self-adjoint
//! eigendecomposition on its lower half (both halves hold the same values) and
//! returns the column of `U` that belongs to the targeted eigenvalue.
//!
//! # References
//! - Faer documentation: https://github.com/sarah-ek/faer-rs

use crate::config::EigenOptions;
use crate::core::traits::Scalar;
use crate::eigen::{check_packed, finalize_vector, select_eigenvalue, unpack_symmetric, EigenSolver};
use crate::error::MatError;
use faer::traits::RealField;
use faer::{Mat, Side};
use num_traits::Float;

/// Full-spectrum backend: exact up to floating-point rounding, O(n³).
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerEigenSolver;

impl FaerEigenSolver {
    pub fn new() -> Self {
        FaerEigenSolver
    }
}

impl<T> EigenSolver<T> for FaerEigenSolver
where
    T: RealField + Float + Scalar,
{
    fn dominant_eigenvector(
        &self,
        n: usize,
        packed_upper: &[T],
        opts: &EigenOptions,
    ) -> Result<Vec<T>, MatError> {
        check_packed(n, packed_upper)?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let full = unpack_symmetric(n, packed_upper);
        let a = Mat::from_fn(n, n, |i, j| full[i * n + j]);
        let evd = a
            .as_ref()
            .self_adjoint_eigen(Side::Lower)
            .map_err(|e| MatError::EigenSolve(format!("faer self-adjoint eigen: {e:?}")))?;

        let s = evd.S().column_vector();
        let eigenvalues: Vec<T> = (0..n).map(|k| s[k]).collect();
        let k = select_eigenvalue(&eigenvalues, opts.target)
            .ok_or(MatError::EigenSolve("empty spectrum".to_string()))?;

        let u = evd.U();
        let mut v: Vec<T> = (0..n).map(|i| u[(i, k)]).collect();
        finalize_vector(&mut v, opts);
        Ok(v)
    }
}
