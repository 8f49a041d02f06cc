//! L2 normalization of weighted results.
//!
//! One row routine serves both axes: column mode transposes, normalizes
//! what are now rows, and transposes back. Each transpose produces a new
//! matrix value, so the pre- and post-transpose states never alias.

use crate::config::Normalization;
use crate::matrix::CsrMatrix;

/// Scale every row of `matrix` to unit L2 length, in place.
///
/// Rows whose sum of squares is exactly 0.0 are left untouched (this
/// covers both empty rows and rows whose stored entries were all scaled
/// to zero by a zero IDF weight).
pub(crate) fn l2_normalize_rows(matrix: &mut CsrMatrix) {
    for row in 0..matrix.rows() {
        let sum: f64 = matrix.row_values(row).iter().map(|v| v * v).sum();
        if sum == 0.0 {
            continue;
        }
        let norm = sum.sqrt();
        for value in matrix.row_values_mut(row) {
            *value /= norm;
        }
    }
}

/// Apply the configured normalization, consuming and returning the matrix.
pub(crate) fn apply(mode: Normalization, mut matrix: CsrMatrix) -> CsrMatrix {
    match mode {
        Normalization::None => matrix,
        Normalization::Row => {
            l2_normalize_rows(&mut matrix);
            matrix
        }
        Normalization::Column => {
            let mut transposed = matrix.transpose();
            l2_normalize_rows(&mut transposed);
            transposed.transpose()
        }
    }
}
