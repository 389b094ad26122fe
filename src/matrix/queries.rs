//! Graph-oriented queries and extraction on an adjacency/weight matrix.

use crate::config::EigenOptions;
use crate::core::traits::Scalar;
use crate::eigen::{packed_len, EigenSolver};
use crate::error::MatError;
use crate::matrix::dense::DenseMatrix;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

impl<T: Scalar> DenseMatrix<T> {
    /// Rows `i` with `M[i][vertex] == 1`, ascending.
    ///
    /// This scans column `vertex`, i.e. the sources of edges *into* `vertex`;
    /// it is the usual neighbour set only when the matrix is symmetric.
    pub fn neighbors(&self, vertex: usize) -> Result<Vec<usize>, MatError> {
        if vertex >= self.cols {
            return Err(MatError::IndexOutOfRange {
                row: 0,
                col: vertex,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows)
            .filter(|&i| self.data[i * self.cols + vertex] == T::one())
            .collect())
    }

    /// Sum of each row (the weighted out-degree vector), length `rows`.
    pub fn row_sums(&self) -> Vec<T> {
        if self.cols == 0 {
            return vec![T::zero(); self.rows];
        }
        let sum = |row: &[T]| row.iter().fold(T::zero(), |acc, &x| acc + x);

        #[cfg(feature = "rayon")]
        {
            self.data.par_chunks(self.cols).map(sum).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.data.chunks(self.cols).map(sum).collect()
        }
    }

    /// Submatrix of the rows with `row_mask[i]` and the columns with
    /// `col_mask[j]`, both kept in ascending order.
    pub fn scattered_selection(&self, row_mask: &[bool], col_mask: &[bool]) -> Result<Self, MatError> {
        if row_mask.len() != self.rows || col_mask.len() != self.cols {
            return Err(MatError::DimensionMismatch(format!(
                "masks of length {}x{} do not match a {}x{} matrix",
                row_mask.len(),
                col_mask.len(),
                self.rows,
                self.cols
            )));
        }
        let rows: Vec<usize> = selected(row_mask);
        let cols: Vec<usize> = selected(col_mask);

        let mut out = DenseMatrix::new(rows.len(), cols.len())?;
        let mut k = 0;
        for &i in &rows {
            for &j in &cols {
                out.data[k] = self.data[i * self.cols + j];
                k += 1;
            }
        }
        Ok(out)
    }

    /// Upper triangle (diagonal included), row by row. Requires a square matrix.
    pub fn packed_upper(&self) -> Result<Vec<T>, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare { rows: self.rows, cols: self.cols });
        }
        let n = self.rows;
        let mut packed = Vec::with_capacity(packed_len(n));
        for i in 0..n {
            packed.extend_from_slice(&self.data[i * n + i..(i + 1) * n]);
        }
        Ok(packed)
    }

    /// Eigenvector of the dominant eigenvalue using the attached solver with
    /// default options.
    ///
    /// Fails with `Unsupported` when no solver was attached via
    /// [`DenseMatrix::with_eigen_solver`].
    pub fn top_eigenvector(&self) -> Result<Vec<T>, MatError> {
        let solver = self.solver.as_ref().ok_or(MatError::Unsupported(
            "top_eigenvector requires an eigen solver; attach one with with_eigen_solver",
        ))?;
        self.top_eigenvector_with(&**solver, &EigenOptions::default())
    }

    /// Eigenvector of the dominant eigenvalue computed by `solver`.
    pub fn top_eigenvector_with(
        &self,
        solver: &dyn EigenSolver<T>,
        opts: &EigenOptions,
    ) -> Result<Vec<T>, MatError> {
        if !self.is_symmetric() {
            return Err(MatError::NotSymmetric);
        }
        let packed = self.packed_upper()?;
        let v = solver.dominant_eigenvector(self.rows, &packed, opts)?;
        if v.len() != self.rows {
            return Err(MatError::EigenSolve(format!(
                "solver returned a vector of length {} for a {}x{} matrix",
                v.len(),
                self.rows,
                self.cols
            )));
        }
        Ok(v)
    }
}

fn selected(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}
