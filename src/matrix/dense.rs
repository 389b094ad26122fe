//! Row-major dense matrix over one contiguous buffer.
//!
//! Element `(i, j)` of a `rows × cols` matrix lives at offset `i * cols + j`.
//! The buffer length always equals `rows * cols`; it is only reallocated by a
//! constructor, `clone` or `assign`, never by element mutation.
//!
//! Element access is checked: `get`/`set`/`insert` return
//! [`MatError::IndexOutOfRange`], while the `Index`/`IndexMut` operators panic
//! the way slice indexing does.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::core::traits::{MatShape, Scalar};
use crate::eigen::EigenSolver;
use crate::error::MatError;

/// Shared handle to an injected eigen-solver backend.
pub type SharedEigenSolver<T> = Arc<dyn EigenSolver<T> + Send + Sync>;

/// Dense matrix that exclusively owns its row-major buffer.
pub struct DenseMatrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
    pub(crate) solver: Option<SharedEigenSolver<T>>,
}

/// Allocate a `rows * cols` buffer filled with `value`, reporting overflow or
/// allocator failure as `OutOfMemory` instead of aborting.
pub(crate) fn alloc_buffer<T: Clone>(rows: usize, cols: usize, value: T) -> Result<Vec<T>, MatError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatError::OutOfMemory { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatError::OutOfMemory { rows, cols })?;
    data.resize(len, value);
    Ok(data)
}

impl<T: Scalar> DenseMatrix<T> {
    /// Zero-filled `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatError> {
        Self::filled(rows, cols, T::zero())
    }

    /// `rows × cols` matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, MatError> {
        let data = alloc_buffer(rows, cols, value)?;
        Ok(Self { rows, cols, data, solver: None })
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self, MatError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatError::OutOfMemory { rows, cols })?;
        if data.len() != expected {
            return Err(MatError::DimensionMismatch(format!(
                "buffer of length {} cannot back a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data, solver: None })
    }

    /// Construct by evaluating `f(i, j)` for every entry in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                m.data[i * cols + j] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Attach the eigen-solver backend used by [`DenseMatrix::top_eigenvector`].
    pub fn with_eigen_solver(mut self, solver: SharedEigenSolver<T>) -> Self {
        self.solver = Some(solver);
        self
    }

    pub fn set_eigen_solver(&mut self, solver: Option<SharedEigenSolver<T>>) {
        self.solver = solver;
    }

    pub fn eigen_solver(&self) -> Option<&SharedEigenSolver<T>> {
        self.solver.as_ref()
    }

    /// Replace this matrix with a deep copy of `other`.
    ///
    /// The previous buffer is released (or reused when large enough); `other`'s
    /// storage is never shared.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> Result<usize, MatError> {
        if i < self.rows && j < self.cols {
            Ok(i * self.cols + j)
        } else {
            Err(MatError::IndexOutOfRange { row: i, col: j, rows: self.rows, cols: self.cols })
        }
    }

    /// Entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, MatError> {
        let k = self.offset(i, j)?;
        Ok(self.data[k])
    }

    /// Overwrite entry `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), MatError> {
        let k = self.offset(i, j)?;
        self.data[k] = value;
        Ok(())
    }

    /// Store `value` at `(i, j)` while building a matrix incrementally.
    /// Same contract as [`DenseMatrix::set`].
    pub fn insert(&mut self, i: usize, j: usize, value: T) -> Result<(), MatError> {
        self.set(i, j, value)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True iff the matrix is square and `M[i][j] == M[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.data[i * n + j] != self.data[j * n + i] {
                    return false;
                }
            }
        }
        true
    }

    /// The row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[T], MatError> {
        if i >= self.rows {
            return Err(MatError::IndexOutOfRange { row: i, col: 0, rows: self.rows, cols: self.cols });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Elementwise equality; false as soon as the shapes differ.
    pub fn equals(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data.iter().zip(&other.data).all(|(a, b)| a == b)
    }
}

impl<T: Scalar> Default for DenseMatrix<T> {
    /// 1×1 zero matrix.
    fn default() -> Self {
        Self { rows: 1, cols: 1, data: vec![T::zero()], solver: None }
    }
}

impl<T: Clone> Clone for DenseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
            solver: self.solver.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.data.clone_from(&source.data);
        self.solver.clone_from(&source.solver);
    }
}

impl<T: Scalar> PartialEq for DenseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .field("eigen_solver", &self.solver.is_some())
            .finish()
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}
