//! Edge-list loading and text rendering.
//!
//! # Edge-list format
//! Whitespace-separated integers: `rows`, `cols`, a line-count header that is
//! read and ignored, then `i j` pairs with 1-based vertex ids. Every pair sets
//! entry `(i - 1, j - 1)` to one; all other entries are zero.
//!
//! ```text
//! 3 3
//! 3
//! 1 2
//! 2 3
//! 3 1
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::core::traits::Scalar;
use crate::error::MatError;
use crate::matrix::dense::DenseMatrix;

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.split_whitespace(), pos: 0 }
    }

    fn next<N: FromStr>(&mut self, what: &str) -> Result<Option<N>, MatError> {
        let Some(tok) = self.inner.next() else {
            return Ok(None);
        };
        self.pos += 1;
        tok.parse::<N>().map(Some).map_err(|_| {
            MatError::Parse(format!("token {} ({what}): expected an integer, found {tok:?}", self.pos))
        })
    }

    fn require<N: FromStr>(&mut self, what: &str) -> Result<N, MatError> {
        self.next(what)?
            .ok_or_else(|| MatError::Parse(format!("unexpected end of input, missing {what}")))
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// Load an unweighted edge list from `path`.
    pub fn from_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self, MatError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| MatError::FileNotFound(path.to_path_buf()))?;
        log::debug!("loading edge list from {}", path.display());
        Self::from_edge_list_reader(BufReader::new(file))
    }

    /// Load an unweighted edge list from any buffered reader.
    pub fn from_edge_list_reader<R: BufRead>(mut reader: R) -> Result<Self, MatError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_edge_list_str(&text)
    }

    /// Parse an unweighted edge list held in memory.
    pub fn from_edge_list_str(text: &str) -> Result<Self, MatError> {
        let mut tokens = Tokens::new(text);
        let rows: usize = tokens.require("row count")?;
        let cols: usize = tokens.require("column count")?;
        let mut m = DenseMatrix::new(rows, cols)?;

        // line-count header, unused
        let _: Option<i64> = tokens.next("line-count header")?;

        let mut edges = 0usize;
        while let Some(i) = tokens.next::<usize>("source vertex")? {
            let j: usize = tokens.require("target vertex")?;
            if i == 0 || j == 0 {
                return Err(MatError::Parse(format!(
                    "vertex ids are 1-based, found pair ({i}, {j}) near token {}",
                    tokens.pos
                )));
            }
            m.set(i - 1, j - 1, T::one())?;
            edges += 1;
        }
        log::debug!("edge list: {rows}x{cols} matrix, {edges} edges");
        Ok(m)
    }
}

/// `Size: {rows}*{cols}`, then the buffer with a line break after every
/// `cols`-th value, then a blank-line block.
impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}*{}", self.rows, self.cols)?;
        for (k, x) in self.data.iter().enumerate() {
            write!(f, "{x} ")?;
            if (k + 1) % self.cols == 0 {
                writeln!(f)?;
            }
        }
        write!(f, "\n\n\n")
    }
}
