//! Matrix module: the dense row-major matrix and its sparse boundary.

pub mod dense;
pub use dense::{DenseMatrix, SharedEigenSolver};
pub mod io;
pub mod ops;
pub mod queries;
pub mod sparse;
pub use sparse::{CsrMatrix, SparseElement};
