//! Fitted IDF weight model and its binary persistence format.

use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::errors::{WeightingError, WeightingResult};
use crate::matrix::TermDocMatrix;

/// Diagonal IDF weight model: one weight per vocabulary term.
///
/// Conceptually an `m` x `m` diagonal matrix; only the diagonal is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfModel {
    weights: Vec<f64>,
}

impl IdfModel {
    /// Fit from a term-document matrix.
    ///
    /// For each term row `i` with document frequency `df_i` (count of
    /// documents holding a non-zero entry) over `n` documents:
    ///
    /// ```text
    /// w_i = ln((1 + n) / (1 + df_i)) + weight_padding
    /// ```
    ///
    /// The +1 smoothing keeps the logarithm's argument positive even when
    /// a term occurs in zero or all documents. `weight_padding` shifts
    /// every weight uniformly so near-zero-IDF terms are not suppressed
    /// entirely.
    ///
    /// Document frequency comes from [`TermDocMatrix::row_nnz`] when the
    /// representation answers, otherwise from a scan of the row; both
    /// paths yield identical weights for identical contents.
    pub fn fit<M: TermDocMatrix + ?Sized>(matrix: &M, weight_padding: f64) -> Self {
        let (terms, docs) = matrix.shape();
        let mut weights = Vec::with_capacity(terms);
        for i in 0..terms {
            let df = match matrix.row_nnz(i) {
                Some(nnz) => nnz,
                None => (0..docs).filter(|&j| matrix.value_at(i, j) != 0.0).count(),
            };
            weights.push(((1 + docs) as f64 / (1 + df) as f64).ln() + weight_padding);
        }
        debug!(terms, docs, "fitted IDF model");
        Self { weights }
    }

    /// Wrap an existing weight vector as a model.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Term dimension of the model.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Diagonal weights, one per term.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Serialize the model: dimension as `u64` little-endian, then each
    /// weight as `f64` little-endian in term order.
    pub fn save<W: Write>(&self, writer: &mut W) -> WeightingResult<()> {
        writer.write_all(&(self.weights.len() as u64).to_le_bytes())?;
        for weight in &self.weights {
            writer.write_all(&weight.to_le_bytes())?;
        }
        Ok(())
    }

    /// Deserialize a model written by [`save`](Self::save).
    ///
    /// The stream is untrusted structure: truncation fails with
    /// [`WeightingError::DecodeFailed`] and memory grows only with bytes
    /// actually read, so a hostile dimension field cannot force a huge
    /// allocation up front.
    pub fn load<R: Read>(reader: &mut R) -> WeightingResult<Self> {
        let mut dim_bytes = [0u8; 8];
        reader.read_exact(&mut dim_bytes).map_err(decode_error)?;
        let dim: usize = u64::from_le_bytes(dim_bytes)
            .try_into()
            .map_err(|_| WeightingError::DecodeFailed {
                reason: "dimension exceeds addressable size".to_string(),
            })?;

        let mut weights = Vec::new();
        let mut buf = [0u8; 8];
        for _ in 0..dim {
            reader.read_exact(&mut buf).map_err(decode_error)?;
            weights.push(f64::from_le_bytes(buf));
        }
        debug!(terms = weights.len(), "loaded IDF model");
        Ok(Self { weights })
    }
}

fn decode_error(err: std::io::Error) -> WeightingError {
    if err.kind() == ErrorKind::UnexpectedEof {
        WeightingError::DecodeFailed {
            reason: "unexpected end of model stream".to_string(),
        }
    } else {
        WeightingError::Io(err)
    }
}
