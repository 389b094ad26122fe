//! Core traits for densegraph.

use std::fmt;

use num_traits::Num;

/// Element type of a dense matrix: any copyable integral or floating number.
///
/// `Num` supplies `zero()`/`one()` and the `+ - *` operators; `Display` is needed
/// for the text rendering. `Send + Sync` lets the row kernels run on rayon.
pub trait Scalar: Copy + Num + PartialEq + fmt::Debug + fmt::Display + Send + Sync {}

impl<T> Scalar for T where T: Copy + Num + PartialEq + fmt::Debug + fmt::Display + Send + Sync {}

/// Shape of a 2-D matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;

    /// `rows == cols`.
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
