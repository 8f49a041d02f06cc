//! Term-document matrix abstractions.
//!
//! Rows are vocabulary terms, columns are documents, values are
//! non-negative term-frequency counts (or other term weights). The
//! weighting pipeline reads matrices through [`TermDocMatrix`] and never
//! mutates caller storage.

mod csr;

pub use csr::CsrMatrix;

use crate::errors::{WeightingError, WeightingResult};

/// Read access to a term-document matrix.
///
/// `row_nnz` is an optional fast-path capability: representations that
/// track stored non-zeros per row (compressed-row form) answer in O(1),
/// everything else falls back to a full scan of the row. Both paths must
/// describe the same matrix contents, so the capability is purely an
/// optimization.
pub trait TermDocMatrix {
    /// `(terms, documents)`.
    fn shape(&self) -> (usize, usize);

    /// Value of term `row` in document `col`.
    ///
    /// Panics when `row` or `col` is outside [`shape`](Self::shape), like
    /// slice indexing.
    fn value_at(&self, row: usize, col: usize) -> f64;

    /// Stored non-zero count for `row`, when the representation can
    /// answer without scanning.
    fn row_nnz(&self, _row: usize) -> Option<usize> {
        None
    }

    /// Coerce to compressed-row sparse form.
    ///
    /// The default scans `value_at` over every cell and drops zeros;
    /// sparse implementations override it with something cheaper.
    fn to_csr(&self) -> CsrMatrix {
        CsrMatrix::from_term_doc(self)
    }
}

/// Dense row-major term-document matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Build from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`WeightingError::InvalidShape`] when `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> WeightingResult<Self> {
        if data.len() != rows * cols {
            return Err(WeightingError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// An all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Set one cell. Panics outside the matrix bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }
}

impl TermDocMatrix for DenseMatrix {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn value_at(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }
}
