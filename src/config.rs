use serde::{Deserialize, Serialize};

/// L2 normalization applied to the weighted matrix after a transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Leave the weighted matrix as produced by the diagonal multiply.
    #[default]
    None,
    /// Scale every row to unit L2 length (all-zero rows are skipped).
    Row,
    /// Scale every column to unit L2 length (all-zero columns are skipped).
    Column,
}

/// Weighting transformer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Added to every IDF weight after the logarithm, so terms occurring
    /// in every document keep a non-zero weight. Read at fit time.
    pub weight_padding: f64,
    /// L2 normalization mode applied after weighting.
    pub normalization: Normalization,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            weight_padding: 0.0,
            normalization: Normalization::None,
        }
    }
}
