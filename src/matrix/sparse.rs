// Sparse boundary: triplet form and a faer-backed CSR matrix

use crate::core::traits::{MatShape, Scalar};
use crate::error::MatError;
use crate::matrix::dense::DenseMatrix;
use faer::sparse::{
    SparseRowMat,         // owning numeric CSR alias
    SymbolicSparseRowMat, // owning symbolic CSR alias
};
use faer::traits::ComplexField;
use faer::Mat;
use num_traits::Zero;

/// One nonzero entry: `(row, col, value)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseElement<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Nonzero entries in row-major order.
    pub fn sparse_form(&self) -> Vec<SparseElement<T>> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != T::zero())
            .map(|(k, &value)| SparseElement { row: k / self.cols, col: k % self.cols, value })
            .collect()
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|v| **v != T::zero()).count()
    }

    /// Zero matrix with `elements` scattered in; later duplicates overwrite.
    pub fn from_sparse_form(
        rows: usize,
        cols: usize,
        elements: &[SparseElement<T>],
    ) -> Result<Self, MatError> {
        let mut m = DenseMatrix::new(rows, cols)?;
        for e in elements {
            m.set(e.row, e.col, e.value)?;
        }
        Ok(m)
    }

    /// Copy into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.data[i * self.cols + j])
    }

    /// Copy out of a `faer::Mat`.
    pub fn from_faer(mat: &Mat<T>) -> Result<Self, MatError> {
        DenseMatrix::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[(i, j)])
    }
}

/// CSR matrix built from, or expanded back into, a [`DenseMatrix`].
pub struct CsrMatrix<T> {
    inner: SparseRowMat<usize, T>,
    nnz: usize,
}

impl<T: ComplexField + Scalar> CsrMatrix<T> {
    /// Build a CSR from raw row-ptr, col-idx, and values.
    ///
    /// `row_ptr` has `nrows + 1` entries, starts at 0, never decreases and ends
    /// at `col_idx.len()`; within a row the column indices strictly increase.
    /// Violations are reported as errors rather than handed to faer.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, MatError> {
        if row_ptr.len() != nrows + 1 || col_idx.len() != values.len() {
            return Err(MatError::DimensionMismatch(format!(
                "CSR arrays: row_ptr {} (want {}), col_idx {}, values {}",
                row_ptr.len(),
                nrows + 1,
                col_idx.len(),
                values.len()
            )));
        }
        check_row_ptr(&row_ptr, col_idx.len())?;
        for (i, w) in row_ptr.windows(2).enumerate() {
            let row = &col_idx[w[0]..w[1]];
            if let Some(&bad) = row.iter().find(|&&j| j >= ncols) {
                return Err(MatError::IndexOutOfRange { row: i, col: bad, rows: nrows, cols: ncols });
            }
            if let Some(p) = row.windows(2).find(|p| p[0] >= p[1]) {
                return Err(MatError::Parse(format!(
                    "CSR row {i}: column indices must strictly increase, found {} then {}",
                    p[0], p[1]
                )));
            }
        }
        let nnz = values.len();
        // second argument `None` means "no separate row_nnz"
        let symbolic = SymbolicSparseRowMat::new_checked(nrows, ncols, row_ptr, None, col_idx);
        let inner = SparseRowMat::new(symbolic, values);
        Ok(Self { inner, nnz })
    }

    /// Compress the nonzeros of `dense`.
    pub fn from_dense(dense: &DenseMatrix<T>) -> Result<Self, MatError> {
        let (rows, cols) = dense.shape();
        let mut row_ptr = vec![0; rows + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        for i in 0..rows {
            for j in 0..cols {
                let v = dense.data[i * cols + j];
                if v != <T as Zero>::zero() {
                    col_idx.push(j);
                    values.push(v);
                }
            }
            row_ptr[i + 1] = col_idx.len();
        }
        CsrMatrix::from_csr(rows, cols, row_ptr, col_idx, values)
    }

    /// Expand back into a dense row-major matrix.
    pub fn to_dense(&self) -> Result<DenseMatrix<T>, MatError> {
        let dense = self.inner.to_dense();
        DenseMatrix::from_fn(dense.nrows(), dense.ncols(), |i, j| dense[(i, j)])
    }

    /// Stored entries.
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// y = A * x.  `x.len() == ncols()`, `y.len() == nrows()`.
    pub fn spmv(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        if x.len() != self.ncols() || y.len() != self.nrows() {
            return Err(MatError::DimensionMismatch(format!(
                "spmv with a {}x{} matrix: x has {}, y has {}",
                self.nrows(),
                self.ncols(),
                x.len(),
                y.len()
            )));
        }
        let symbolic = self.inner.symbolic();
        let (row_ptr, col_idx) = (symbolic.row_ptr(), symbolic.col_idx());
        let val = self.inner.val();
        for (yi, w) in y.iter_mut().zip(row_ptr.windows(2)) {
            *yi = col_idx[w[0]..w[1]]
                .iter()
                .zip(&val[w[0]..w[1]])
                .fold(<T as Zero>::zero(), |acc, (&j, &a)| acc + a * x[j]);
        }
        Ok(())
    }
}

fn check_row_ptr(row_ptr: &[usize], nnz: usize) -> Result<(), MatError> {
    if row_ptr[0] != 0 {
        return Err(MatError::Parse(format!("CSR row_ptr must start at 0, found {}", row_ptr[0])));
    }
    if let Some(i) = row_ptr.windows(2).position(|w| w[0] > w[1]) {
        return Err(MatError::Parse(format!(
            "CSR row_ptr decreases at row {i}: {} then {}",
            row_ptr[i],
            row_ptr[i + 1]
        )));
    }
    let last = row_ptr[row_ptr.len() - 1];
    if last != nnz {
        return Err(MatError::DimensionMismatch(format!(
            "CSR row_ptr ends at {last} but {nnz} entries are stored"
        )));
    }
    Ok(())
}

impl<T: ComplexField> MatShape for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
}
