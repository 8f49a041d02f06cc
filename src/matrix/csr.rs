use crate::errors::{WeightingError, WeightingResult};

use super::TermDocMatrix;

/// Compressed-row sparse matrix.
///
/// `indptr[i]..indptr[i + 1]` bounds the stored entries of row `i` in
/// `indices`/`values`; indices within a row are strictly increasing.
/// Constructors never store explicit zeros, so for a term-document count
/// matrix the stored count of a row equals the term's document frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Build from `(row, col, value)` triplets.
    ///
    /// Zero values are dropped, duplicate coordinates are summed, and
    /// entries within each row end up in column order.
    ///
    /// # Errors
    ///
    /// Returns [`WeightingError::EntryOutOfBounds`] for any coordinate
    /// outside `rows` x `cols`.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        entries: &[(usize, usize, f64)],
    ) -> WeightingResult<Self> {
        let mut buckets: Vec<Vec<(usize, f64)>> = vec![Vec::new(); rows];
        for &(row, col, value) in entries {
            if row >= rows || col >= cols {
                return Err(WeightingError::EntryOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            if value != 0.0 {
                buckets[row].push((col, value));
            }
        }

        let mut indptr = Vec::with_capacity(rows + 1);
        indptr.push(0);
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for bucket in &mut buckets {
            bucket.sort_by_key(|&(col, _)| col);
            let mut it = bucket.iter().copied().peekable();
            while let Some((col, mut value)) = it.next() {
                while it.peek().is_some_and(|&(next_col, _)| next_col == col) {
                    value += it.next().unwrap().1;
                }
                if value != 0.0 {
                    indices.push(col);
                    values.push(value);
                }
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            rows,
            cols,
            indptr,
            indices,
            values,
        })
    }

    /// Build by scanning element access of any term-document matrix.
    pub fn from_term_doc<M: TermDocMatrix + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.shape();
        let mut indptr = Vec::with_capacity(rows + 1);
        indptr.push(0);
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for i in 0..rows {
            for j in 0..cols {
                let v = matrix.value_at(i, j);
                if v != 0.0 {
                    indices.push(j);
                    values.push(v);
                }
            }
            indptr.push(indices.len());
        }
        Self {
            rows,
            cols,
            indptr,
            indices,
            values,
        }
    }

    /// `(terms, documents)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        self.indptr[row]..self.indptr[row + 1]
    }

    /// Column indices stored for `row`, in increasing order.
    pub fn row_indices(&self, row: usize) -> &[usize] {
        &self.indices[self.row_range(row)]
    }

    /// Values stored for `row`, parallel to [`row_indices`](Self::row_indices).
    pub fn row_values(&self, row: usize) -> &[f64] {
        &self.values[self.row_range(row)]
    }

    pub(crate) fn row_values_mut(&mut self, row: usize) -> &mut [f64] {
        let range = self.row_range(row);
        &mut self.values[range]
    }

    /// Iterate `(document, value)` pairs stored for `row`.
    pub fn iter_row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row_indices(row)
            .iter()
            .copied()
            .zip(self.row_values(row).iter().copied())
    }

    /// Transposed copy. Stored entries keep their values; rows of the
    /// result stay in column order.
    pub fn transpose(&self) -> CsrMatrix {
        let mut indptr = vec![0usize; self.cols + 1];
        for &col in &self.indices {
            indptr[col + 1] += 1;
        }
        for c in 0..self.cols {
            indptr[c + 1] += indptr[c];
        }

        let mut next = indptr[..self.cols].to_vec();
        let mut indices = vec![0usize; self.values.len()];
        let mut values = vec![0.0f64; self.values.len()];
        for row in 0..self.rows {
            for k in self.row_range(row) {
                let col = self.indices[k];
                let slot = next[col];
                indices[slot] = row;
                values[slot] = self.values[k];
                next[col] += 1;
            }
        }

        CsrMatrix {
            rows: self.cols,
            cols: self.rows,
            indptr,
            indices,
            values,
        }
    }

    /// Diagonal multiply: scale row `i` by `weights[i]` into a new matrix.
    /// Entries stay stored even when the weight is 0.0.
    pub(crate) fn scale_rows(&self, weights: &[f64]) -> CsrMatrix {
        debug_assert_eq!(weights.len(), self.rows);
        let mut out = self.clone();
        for row in 0..out.rows {
            let w = weights[row];
            for value in out.row_values_mut(row) {
                *value *= w;
            }
        }
        out
    }
}

impl TermDocMatrix for CsrMatrix {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn value_at(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols);
        let range = self.row_range(row);
        match self.indices[range.clone()].binary_search(&col) {
            Ok(k) => self.values[range.start + k],
            Err(_) => 0.0,
        }
    }

    fn row_nnz(&self, row: usize) -> Option<usize> {
        Some(self.indptr[row + 1] - self.indptr[row])
    }

    fn to_csr(&self) -> CsrMatrix {
        self.clone()
    }
}
