//! Algebraic operators on [`DenseMatrix`].
//!
//! All operators allocate a fresh result and leave both operands untouched.
//! Row-oriented kernels (`kron`, `add`, `subtract`) run over rayon when the
//! `rayon` feature is enabled; the sequential and parallel paths produce the
//! same bits.

use crate::core::traits::Scalar;
use crate::error::MatError;
use crate::matrix::dense::{alloc_buffer, DenseMatrix};
use num_traits::Float;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

impl<T: Scalar> DenseMatrix<T> {
    /// Kronecker product `self ⊗ other`.
    ///
    /// Both operands must be square. Entry `(i_o·p + i_i, j_o·q + j_i)` of the
    /// result equals `self[i_o][j_o] * other[i_i][j_i]` where `other` is `p × q`.
    pub fn kron(&self, other: &Self) -> Result<Self, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare { rows: self.rows, cols: self.cols });
        }
        if !other.is_square() {
            return Err(MatError::NotSquare { rows: other.rows, cols: other.cols });
        }
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut out = DenseMatrix::new(rows, cols)?;
        if out.data.is_empty() {
            return Ok(out);
        }

        let fill_row = |r: usize, row: &mut [T]| {
            let (i_outer, i_inner) = (r / other.rows, r % other.rows);
            let a_row = &self.data[i_outer * self.cols..(i_outer + 1) * self.cols];
            let b_row = &other.data[i_inner * other.cols..(i_inner + 1) * other.cols];
            for (block, &a) in row.chunks_mut(other.cols).zip(a_row) {
                for (dst, &b) in block.iter_mut().zip(b_row) {
                    *dst = a * b;
                }
            }
        };

        #[cfg(feature = "rayon")]
        {
            out.data
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(r, row)| fill_row(r, row));
        }
        #[cfg(not(feature = "rayon"))]
        {
            out.data
                .chunks_mut(cols)
                .enumerate()
                .for_each(|(r, row)| fill_row(r, row));
        }
        Ok(out)
    }

    /// `diag(d) · M`: row `i` scaled by `d[i]`.
    pub fn diagonal_vector_times_matrix(&self, diag: &[T]) -> Result<Self, MatError> {
        if diag.len() != self.rows {
            return Err(MatError::DimensionMismatch(format!(
                "diagonal of length {} cannot left-multiply a {}x{} matrix",
                diag.len(),
                self.rows,
                self.cols
            )));
        }
        let mut out = self.clone();
        if self.cols > 0 {
            for (row, &d) in out.data.chunks_mut(self.cols).zip(diag) {
                row.iter_mut().for_each(|x| *x = d * *x);
            }
        }
        Ok(out)
    }

    /// `M · diag(d)`: column `j` scaled by `d[j]`.
    pub fn matrix_times_diagonal_vector(&self, diag: &[T]) -> Result<Self, MatError> {
        if diag.len() != self.cols {
            return Err(MatError::DimensionMismatch(format!(
                "diagonal of length {} cannot right-multiply a {}x{} matrix",
                diag.len(),
                self.rows,
                self.cols
            )));
        }
        let mut out = self.clone();
        if self.cols > 0 {
            for row in out.data.chunks_mut(self.cols) {
                for (x, &d) in row.iter_mut().zip(diag) {
                    *x = *x * d;
                }
            }
        }
        Ok(out)
    }

    /// Mᵀ.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        DenseMatrix { rows: self.cols, cols: self.rows, data, solver: self.solver.clone() }
    }

    /// Elementwise `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self, MatError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Self, op: &str, f: F) -> Result<Self, MatError>
    where
        F: Fn(T, T) -> T + Sync + Send,
    {
        if self.shape() != other.shape() {
            return Err(MatError::DimensionMismatch(format!(
                "cannot {op} a {}x{} and a {}x{} matrix",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = DenseMatrix::new(self.rows, self.cols)?;

        #[cfg(feature = "rayon")]
        {
            out.data
                .par_iter_mut()
                .zip(self.data.par_iter().zip(other.data.par_iter()))
                .for_each(|(dst, (&a, &b))| *dst = f(a, b));
        }
        #[cfg(not(feature = "rayon"))]
        {
            out.data
                .iter_mut()
                .zip(self.data.iter().zip(other.data.iter()))
                .for_each(|(dst, (&a, &b))| *dst = f(a, b));
        }
        Ok(out)
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatError> {
        if self.cols != other.rows {
            return Err(MatError::DimensionMismatch(format!(
                "cannot multiply a {}x{} by a {}x{} matrix",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut data = alloc_buffer(self.rows, other.cols, T::zero())?;
        // i-k-j order walks both row-major buffers contiguously.
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == T::zero() {
                    continue;
                }
                let b_row = &other.data[k * other.cols..(k + 1) * other.cols];
                let c_row = &mut data[i * other.cols..(i + 1) * other.cols];
                for (c, &b) in c_row.iter_mut().zip(b_row) {
                    *c = *c + a * b;
                }
            }
        }
        DenseMatrix::from_row_major(self.rows, other.cols, data)
    }

    /// Every entry multiplied by `value`.
    pub fn scale(&self, value: T) -> Self {
        let mut out = self.clone();
        out.data.iter_mut().for_each(|x| *x = *x * value);
        out
    }
}

impl<T: Scalar + Float> DenseMatrix<T> {
    /// ‖M‖_F = sqrt(Σ M[i][j]²).
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}
