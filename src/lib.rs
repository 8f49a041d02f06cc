//! # tfidf-weighting
//!
//! TF-IDF weighting for term-document matrices: fit an inverse document
//! frequency model from a corpus, apply it as a diagonal multiply, and
//! optionally L2-normalize the sparse result by rows or columns. The
//! fitted model can be persisted to and restored from a byte stream.
//!
//! Building the term-document matrix from raw text (tokenization,
//! vocabulary assignment) is a separate pipeline stage and out of scope.
//!
//! ```
//! use tfidf_weighting::{DenseMatrix, TermDocMatrix, TfidfTransformer, Transformer};
//!
//! // 2 terms x 3 documents: term 0 occurs everywhere, term 1 in one doc.
//! let counts = DenseMatrix::from_vec(2, 3, vec![
//!     1.0, 2.0, 1.0,
//!     0.0, 3.0, 0.0,
//! ]).unwrap();
//!
//! let mut transformer = TfidfTransformer::new();
//! let weighted = transformer.fit_transform(&counts).unwrap();
//!
//! // The ubiquitous term is weighted down relative to the rare one.
//! assert!(weighted.value_at(0, 1) < weighted.value_at(1, 1));
//! ```

pub mod config;
pub mod errors;
pub mod matrix;
pub mod model;
pub mod traits;
pub mod transformer;

mod normalize;

// Re-export the most commonly used types at the crate root.
pub use config::{Normalization, WeightingConfig};
pub use errors::{WeightingError, WeightingResult};
pub use matrix::{CsrMatrix, DenseMatrix, TermDocMatrix};
pub use model::IdfModel;
pub use traits::Transformer;
pub use transformer::TfidfTransformer;
