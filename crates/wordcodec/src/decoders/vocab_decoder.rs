//! # Vocabulary Decoder

use std::sync::Arc;

use crate::{
    decoders::{Decoded, ScoreDecoder, closest_index, score_decoder::words_until_eos},
    embedding::{EmbeddingLayout, EmbeddingSlot},
    types::ScoreType,
    vocab::Vocabulary,
};

/// Decode a single raw score vector against `vocab`.
///
/// The highest score (see [`closest_index`]) selects a boundary marker or word.
///
/// ## Returns
/// [`Decoded::Unknown`] for an empty score vector, or when the winning
/// position is beyond the vocabulary.
pub fn decode_scores<F: ScoreType>(
    vocab: &Vocabulary,
    scores: &[F],
) -> Decoded {
    let layout = EmbeddingLayout::new(vocab.len());

    let slot = closest_index(scores).and_then(|idx| layout.slot(idx));
    match slot {
        Some(EmbeddingSlot::Boundary(boundary)) => Decoded::Boundary(boundary),
        Some(EmbeddingSlot::Word(idx)) => match vocab.get(idx) {
            Some(word) => Decoded::Word(word.to_string()),
            None => Decoded::Unknown,
        },
        None => Decoded::Unknown,
    }
}

/// Decode a sequence of score vectors against `vocab`.
///
/// Decoding stops at the first EOS; BOS and unknown rows are skipped.
pub fn decode_sequence<F: ScoreType>(
    vocab: &Vocabulary,
    rows: &[Vec<F>],
) -> Vec<String> {
    words_until_eos(rows.iter().map(|scores| decode_scores(vocab, scores)))
}

/// A [`ScoreDecoder`] over a shared [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct VocabDecoder {
    vocab: Arc<Vocabulary>,
}

impl VocabDecoder {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary the model's embedding space is built over.
    pub fn new<V: Into<Arc<Vocabulary>>>(vocab: V) -> Self {
        Self {
            vocab: vocab.into(),
        }
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }
}

impl<F: ScoreType> ScoreDecoder<F> for VocabDecoder {
    fn decode_scores(
        &self,
        scores: &[F],
    ) -> Decoded {
        decode_scores(&self.vocab, scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decoders::{closest_embedding, reconstruct_word},
        embedding::Boundary,
        types::{check_is_send, check_is_sync},
    };

    fn test_decoder() -> VocabDecoder {
        let vocab = Vocabulary::try_from_tokens(
            ["how", "are", "you"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        VocabDecoder::new(vocab)
    }

    #[test]
    fn test_decode_scores() {
        type F = f64;
        let decoder = test_decoder();
        check_is_send(&decoder);
        check_is_sync(&decoder);

        let decode = |scores: &[F]| decoder.decode_scores(scores);

        assert_eq!(decode(&[0.9, 0.1, 0.2, 0.0, 0.0]), Decoded::Boundary(Boundary::Bos));
        assert_eq!(decode(&[0.1, 0.9, 0.2, 0.0, 0.0]), Decoded::Boundary(Boundary::Eos));
        assert_eq!(decode(&[0.1, 0.2, 0.3, 0.0, 0.4]), Decoded::Word("you".to_string()));
        assert_eq!(decode(&[]), Decoded::Unknown);
        assert_eq!(decode(&[0.0, 0.0, 0.0, 0.0, 0.0, 9.0]), Decoded::Unknown);

        let vocab = decoder.vocabulary();
        assert_eq!(
            decode_scores::<F>(vocab, &[0.0, 0.0, 0.1, 0.7, 0.2]),
            Decoded::Word("are".to_string())
        );
    }

    #[test]
    fn test_agrees_with_reconstruct() {
        type F = f32;
        let decoder = test_decoder();
        let vocab = decoder.vocabulary().clone();

        let scores: Vec<F> = vec![-1.0, 0.5, 2.0, 1.0, 2.0];
        let word = reconstruct_word(&vocab, &closest_embedding(&scores));
        assert_eq!(word, "how");
        assert_eq!(decoder.decode_scores(&scores).word(), Some(word.as_str()));
    }

    #[test]
    fn test_decode_sequence_without_eos() {
        type F = f64;
        let decoder = test_decoder();

        let rows: Vec<Vec<F>> = vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.9],
            vec![0.0, 0.0, 0.9, 0.0, 0.0],
        ];
        assert_eq!(decode_sequence(decoder.vocabulary(), &rows), vec!["you", "how"]);
        assert!(decode_sequence::<F>(decoder.vocabulary(), &[]).is_empty());
    }

    #[test]
    fn test_decode_sequence() {
        type F = f64;
        let decoder = test_decoder();

        let rows: Vec<Vec<F>> = vec![
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.8, 0.1, 0.1],
            vec![0.0, 0.0, 0.1, 0.8, 0.1],
            vec![],
            vec![0.0, 0.0, 0.1, 0.1, 0.8],
            vec![0.0, 0.9, 0.1, 0.1, 0.1],
            vec![0.0, 0.0, 0.8, 0.1, 0.1],
        ];

        assert_eq!(decoder.decode_sequence(&rows), vec!["how", "are", "you"]);
        assert_eq!(
            decode_sequence(decoder.vocabulary(), &rows),
            decoder.decode_sequence(&rows)
        );
        assert_eq!(decoder.decode_sentence(&rows), "how are you");
        assert_eq!(ScoreDecoder::<F>::decode_batch(&decoder, &rows).len(), rows.len());
    }
}
