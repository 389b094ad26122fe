use std::path::PathBuf;

use thiserror::Error;

// Unified error type for densegraph

#[derive(Error, Debug)]
pub enum MatError {
    #[error("file not found or not readable: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("out of memory allocating a {rows}x{cols} matrix")]
    OutOfMemory { rows: usize, cols: usize },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not symmetric")]
    NotSymmetric,
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("eigen solve error: {0}")]
    EigenSolve(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
