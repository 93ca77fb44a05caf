//! # Score Decoder Trait

use crate::{embedding::Boundary, types::ScoreType};

/// The result of decoding a single score vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A boundary marker won.
    Boundary(Boundary),

    /// A vocabulary word won.
    Word(String),

    /// Nothing could be decoded: an empty, or over-wide, score vector.
    Unknown,
}

impl Decoded {
    /// Get the decoded word, if any.
    pub fn word(&self) -> Option<&str> {
        match self {
            Decoded::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Returns `true` for [`Boundary::Eos`].
    pub fn is_eos(&self) -> bool {
        matches!(self, Decoded::Boundary(Boundary::Eos))
    }
}

/// Collect the words of a decoded sequence, up to the first EOS.
pub(crate) fn words_until_eos<I>(decoded: I) -> Vec<String>
where
    I: IntoIterator<Item = Decoded>,
{
    decoded
        .into_iter()
        .take_while(|decoded| !decoded.is_eos())
        .filter_map(|decoded| match decoded {
            Decoded::Word(word) => Some(word),
            _ => None,
        })
        .collect()
}

/// Trait for score vector decoders.
pub trait ScoreDecoder<F: ScoreType>: Send + Sync {
    /// Decode a single raw score vector.
    ///
    /// ## Arguments
    /// * `scores` - a model output row, in the embedding layout.
    fn decode_scores(
        &self,
        scores: &[F],
    ) -> Decoded;

    /// Decode a batch of score vectors.
    ///
    /// ## Arguments
    /// * `batch` - model output rows.
    ///
    /// ## Returns
    /// One [`Decoded`] per row, in order.
    fn decode_batch(
        &self,
        batch: &[Vec<F>],
    ) -> Vec<Decoded> {
        batch.iter().map(|scores| self.decode_scores(scores)).collect()
    }

    /// Decode a sequence of score vectors into words.
    ///
    /// Decoding stops at the first EOS; BOS and unknown rows are skipped.
    fn decode_sequence(
        &self,
        rows: &[Vec<F>],
    ) -> Vec<String> {
        words_until_eos(self.decode_batch(rows))
    }

    /// Decode a sequence of score vectors into a space-joined sentence.
    ///
    /// See [`Self::decode_sequence`].
    fn decode_sentence(
        &self,
        rows: &[Vec<F>],
    ) -> String {
        self.decode_sequence(rows).join(" ")
    }
}
