//! Error taxonomy for the weighting pipeline.
//!
//! Nothing is recovered locally; every failure propagates to the caller.

/// Weighting pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum WeightingError {
    #[error("dimension mismatch: model holds {model_terms} term weights, matrix has {matrix_terms} term rows")]
    DimensionMismatch {
        model_terms: usize,
        matrix_terms: usize,
    },

    #[error("no fitted model: call fit() or load() before transform()")]
    NotFitted,

    #[error("invalid matrix shape: {rows}x{cols} cannot hold {len} values")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[error("entry ({row}, {col}) outside {rows}x{cols} matrix")]
    EntryOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("model decode failed: {reason}")]
    DecodeFailed { reason: String },

    #[error("model stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type WeightingResult<T> = Result<T, WeightingError>;
