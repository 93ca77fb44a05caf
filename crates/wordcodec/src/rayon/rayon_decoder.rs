//! # Parallel Decoder

use crate::{
    decoders::{Decoded, ScoreDecoder},
    types::ScoreType,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<F: ScoreType, D: ScoreDecoder<F>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: std::marker::PhantomData<F>,
}

impl<F, D> ParallelRayonDecoder<F, D>
where
    F: ScoreType,
    D: ScoreDecoder<F>,
{
    /// Create a new parallel decoder.
    ///
    /// ## Arguments
    /// * `inner` - The score decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<F, D> ScoreDecoder<F> for ParallelRayonDecoder<F, D>
where
    F: ScoreType,
    D: ScoreDecoder<F>,
{
    fn decode_scores(
        &self,
        scores: &[F],
    ) -> Decoded {
        self.inner.decode_scores(scores)
    }

    fn decode_batch(
        &self,
        batch: &[Vec<F>],
    ) -> Vec<Decoded> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|scores| self.inner.decode_scores(scores))
            .collect()
    }
}
