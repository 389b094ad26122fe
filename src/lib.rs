//! densegraph: dense row-major matrices for spectral graph analysis
//!
//! This crate provides a generic, fixed-shape matrix over one contiguous buffer, used as the
//! adjacency/weight matrix of a graph: neighbour queries, degree vectors, Kronecker products for
//! graph-product constructions, scattered selection for coarsening, and the dominant eigenvector
//! through a pluggable eigen-solver backend.

pub mod config;
pub mod core;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use eigen::{EigenSolver, FaerEigenSolver, PowerIteration};
pub use error::*;
pub use matrix::*;
pub use utils::convergence::SolveStats;
