//! Core traits shared by the dense and sparse matrix types.

pub mod traits;
pub use traits::{MatShape, Scalar};
