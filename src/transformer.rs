//! TfidfTransformer — the main entry point for the crate.
//!
//! Weights a raw term-document matrix by how commonly each term occurs
//! across the corpus: a word appearing in nearly every document (like
//! "the") is scaled down, a rare word is scaled up. Weighting is a
//! multiply by the fitted diagonal IDF model, optionally followed by L2
//! normalization of rows or columns.

use std::io::{Read, Write};

use tracing::debug;

use crate::config::{Normalization, WeightingConfig};
use crate::errors::{WeightingError, WeightingResult};
use crate::matrix::{CsrMatrix, TermDocMatrix};
use crate::model::IdfModel;
use crate::normalize;
use crate::traits::Transformer;

/// TF-IDF weighting transformer.
///
/// Holds the fitted [`IdfModel`] and the configuration knobs. Fitting and
/// loading replace the model and take `&mut self`; transforming and
/// saving read it through `&self`.
#[derive(Debug, Clone, Default)]
pub struct TfidfTransformer {
    model: Option<IdfModel>,
    config: WeightingConfig,
}

impl TfidfTransformer {
    /// A transformer with default configuration (no padding, no
    /// normalization) and no fitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transformer with explicit configuration.
    pub fn with_config(config: WeightingConfig) -> Self {
        Self {
            model: None,
            config,
        }
    }

    /// Padding added to every IDF weight during [`fit`](Transformer::fit).
    pub fn weight_padding(&self) -> f64 {
        self.config.weight_padding
    }

    /// Set the weight padding. Takes effect on the next fit; an already
    /// fitted model keeps the padding it was fit with.
    pub fn set_weight_padding(&mut self, padding: f64) {
        self.config.weight_padding = padding;
    }

    /// Normalization applied after weighting.
    pub fn normalization(&self) -> Normalization {
        self.config.normalization
    }

    /// Set the normalization mode. Takes effect on the next transform.
    pub fn set_normalization(&mut self, mode: Normalization) {
        self.config.normalization = mode;
    }

    /// The fitted model, if any.
    pub fn model(&self) -> Option<&IdfModel> {
        self.model.as_ref()
    }

    /// Serialize the fitted model into `writer` (see [`IdfModel::save`]
    /// for the layout).
    ///
    /// # Errors
    ///
    /// [`WeightingError::NotFitted`] when no model has been fit or
    /// loaded; stream failures surface as [`WeightingError::Io`].
    pub fn save<W: Write>(&self, writer: &mut W) -> WeightingResult<()> {
        let model = self.model.as_ref().ok_or(WeightingError::NotFitted)?;
        model.save(writer)
    }

    /// Deserialize a model from `reader` and install it, fully replacing
    /// any previous model.
    ///
    /// Replacement is atomic: the previous model stays installed and
    /// usable when decoding fails.
    ///
    /// # Errors
    ///
    /// [`WeightingError::DecodeFailed`] on truncated or malformed
    /// streams, [`WeightingError::Io`] on other stream failures.
    pub fn load<R: Read>(&mut self, reader: &mut R) -> WeightingResult<()> {
        self.model = Some(IdfModel::load(reader)?);
        Ok(())
    }
}

impl Transformer for TfidfTransformer {
    /// Count term occurrences across documents and fit the IDF model,
    /// replacing any previous model. The input matrix is not modified.
    fn fit<M: TermDocMatrix + ?Sized>(&mut self, matrix: &M) -> &mut Self {
        self.model = Some(IdfModel::fit(matrix, self.config.weight_padding));
        self
    }

    /// Multiply `matrix` by the fitted diagonal IDF model and apply the
    /// configured normalization. Always returns a new compressed-row
    /// matrix; never aliases the caller's storage.
    fn transform<M: TermDocMatrix + ?Sized>(&self, matrix: &M) -> WeightingResult<CsrMatrix> {
        let model = self.model.as_ref().ok_or(WeightingError::NotFitted)?;
        let csr = matrix.to_csr();
        if model.len() != csr.rows() {
            return Err(WeightingError::DimensionMismatch {
                model_terms: model.len(),
                matrix_terms: csr.rows(),
            });
        }

        let product = csr.scale_rows(model.weights());
        debug!(
            terms = product.rows(),
            docs = product.cols(),
            nnz = product.nnz(),
            mode = ?self.config.normalization,
            "applied IDF weighting"
        );
        Ok(normalize::apply(self.config.normalization, product))
    }
}
