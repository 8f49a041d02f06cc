//! Shared seams for pipeline stages.

use crate::errors::WeightingResult;
use crate::matrix::{CsrMatrix, TermDocMatrix};

/// Matrix-to-matrix transformer with a separate training step.
///
/// `fit` learns state from a training matrix and takes exclusive access;
/// `transform` is a read against the fitted state, so transforms against
/// an unchanging transformer can run in parallel from multiple threads.
pub trait Transformer {
    /// Learn state from a training matrix. Returns `self` for chaining.
    fn fit<M: TermDocMatrix + ?Sized>(&mut self, matrix: &M) -> &mut Self;

    /// Produce a transformed copy of `matrix` using the fitted state.
    ///
    /// # Errors
    ///
    /// Propagates fitted-state/input disagreements (missing model,
    /// dimension mismatch); never mutates the input.
    fn transform<M: TermDocMatrix + ?Sized>(&self, matrix: &M) -> WeightingResult<CsrMatrix>;

    /// [`fit`](Self::fit) then [`transform`](Self::transform) on the same
    /// matrix. Identical to calling the two steps manually; provided for
    /// workflows with no held-out fitting corpus.
    fn fit_transform<M: TermDocMatrix + ?Sized>(
        &mut self,
        matrix: &M,
    ) -> WeightingResult<CsrMatrix> {
        self.fit(matrix).transform(matrix)
    }
}
