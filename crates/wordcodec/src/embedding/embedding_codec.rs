//! # Embedding Codec

use crate::{
    embedding::{Boundary, EmbeddingLayout, RESERVED_SLOTS},
    errors::{CodecError, CodecResult},
    tokenizer::SentenceTokenizer,
    types::{ScoreType, one_hot},
    vocab::Vocabulary,
};

/// Encode a word as a one-hot embedding over `vocab`.
///
/// The word must already be tokenized; it is matched exactly, with no
/// stemming or case folding.
///
/// ## Returns
/// A vector of `vocab.embedding_size()`; `1` at the word's position,
/// or all zeros if the word is not in the vocabulary.
pub fn encode_word<F: ScoreType>(
    vocab: &Vocabulary,
    word: &str,
) -> Vec<F> {
    let layout = EmbeddingLayout::new(vocab.len());
    match vocab.index_of(word) {
        Some(idx) => one_hot(layout.size(), layout.word_position(idx)),
        None => vec![F::zero(); layout.size()],
    }
}

/// Encode a boundary marker embedding.
///
/// ## Arguments
/// * `embedding_size` - the embedding size; usually [`Vocabulary::embedding_size`].
/// * `which` - the marker.
///
/// ## Returns
/// A vector of `embedding_size` with a `1` at `which.index()`;
/// or [`CodecError::EmbeddingTooSmall`] if `embedding_size < 2`.
pub fn encode_boundary<F: ScoreType>(
    embedding_size: usize,
    which: Boundary,
) -> CodecResult<Vec<F>> {
    if embedding_size < RESERVED_SLOTS {
        return Err(CodecError::EmbeddingTooSmall {
            size: embedding_size,
        });
    }
    Ok(one_hot(embedding_size, which.index()))
}

/// Encodes words and sentences against a borrowed [`Vocabulary`].
#[derive(Debug, Clone, Copy)]
pub struct EmbeddingCodec<'a> {
    vocab: &'a Vocabulary,
    tokenizer: &'a SentenceTokenizer,
}

impl<'a> EmbeddingCodec<'a> {
    /// Create a new codec.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary.
    /// * `tokenizer` - the tokenizer used by [`Self::encode_sentence`];
    ///   it should match the one which built `vocab`.
    pub fn new(
        vocab: &'a Vocabulary,
        tokenizer: &'a SentenceTokenizer,
    ) -> Self {
        Self { vocab, tokenizer }
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocab
    }

    /// Get the embedding layout.
    pub fn layout(&self) -> EmbeddingLayout {
        EmbeddingLayout::new(self.vocab.len())
    }

    /// The embedding size: `|V| + 2`.
    pub fn embedding_size(&self) -> usize {
        self.vocab.embedding_size()
    }

    /// Encode a (pre-tokenized) word; see [`encode_word`].
    pub fn encode_word<F: ScoreType>(
        &self,
        word: &str,
    ) -> Vec<F> {
        encode_word(self.vocab, word)
    }

    /// Encode a boundary marker in this codec's embedding space.
    pub fn encode_boundary<F: ScoreType>(
        &self,
        which: Boundary,
    ) -> Vec<F> {
        one_hot(self.embedding_size(), which.index())
    }

    /// The BOS embedding.
    pub fn bos<F: ScoreType>(&self) -> Vec<F> {
        self.encode_boundary(Boundary::Bos)
    }

    /// The EOS embedding.
    pub fn eos<F: ScoreType>(&self) -> Vec<F> {
        self.encode_boundary(Boundary::Eos)
    }

    /// Encode pre-tokenized words, framed by BOS and EOS.
    pub fn encode_tokens<F, I>(
        &self,
        tokens: I,
    ) -> Vec<Vec<F>>
    where
        F: ScoreType,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        // BOS + words + EOS.
        let mut rows = Vec::with_capacity(tokens.size_hint().0 + 2);
        rows.push(self.bos());
        rows.extend(tokens.map(|token| self.encode_word(token.as_ref())));
        rows.push(self.eos());
        rows
    }

    /// Tokenize and encode a sentence, framed by BOS and EOS.
    ///
    /// ## Returns
    /// `[BOS, w_1, ..., w_n, EOS]`; words missing from the vocabulary encode as all zeros.
    pub fn encode_sentence<F: ScoreType>(
        &self,
        sentence: &str,
    ) -> Vec<Vec<F>> {
        self.encode_tokens(self.tokenizer.tokenize(sentence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vocab() -> Vocabulary {
        Vocabulary::try_from_tokens(
            ["hi", "hello", "world"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_encode_word() {
        type F = f64;
        let vocab = test_vocab();

        for (k, word) in vocab.iter().enumerate() {
            let embedding: Vec<F> = encode_word(&vocab, word);
            assert_eq!(embedding.len(), vocab.len() + 2);
            for (pos, &value) in embedding.iter().enumerate() {
                let expected = if pos == k + 2 { 1.0 } else { 0.0 };
                assert_eq!(value, expected, "{word:?} @ {pos}");
            }
        }
    }

    #[test]
    fn test_encode_missing_word() {
        type F = f32;
        let vocab = test_vocab();

        let embedding: Vec<F> = encode_word(&vocab, "bye");
        assert_eq!(embedding, vec![0.0; 5]);

        // No case folding.
        let embedding: Vec<F> = encode_word(&vocab, "Hello");
        assert!(embedding.iter().all(|&v| v == 0.0));

        let embedding: Vec<F> = encode_word(&Vocabulary::default(), "hi");
        assert_eq!(embedding, vec![0.0, 0.0]);
    }

    #[test]
    fn test_encode_boundary() {
        type F = f64;

        let bos: Vec<F> = encode_boundary(4, Boundary::Bos).unwrap();
        assert_eq!(bos, vec![1.0, 0.0, 0.0, 0.0]);

        let eos: Vec<F> = encode_boundary(4, Boundary::Eos).unwrap();
        assert_eq!(eos, vec![0.0, 1.0, 0.0, 0.0]);

        let eos: Vec<F> = encode_boundary(2, Boundary::Eos).unwrap();
        assert_eq!(eos, vec![0.0, 1.0]);

        for size in [0, 1] {
            assert!(matches!(
                encode_boundary::<F>(size, Boundary::Bos),
                Err(CodecError::EmbeddingTooSmall { size: s }) if s == size
            ));
        }
    }

    #[test]
    fn test_codec() {
        type F = f64;
        let vocab = test_vocab();
        let tokenizer = SentenceTokenizer::unstemmed();
        let codec = EmbeddingCodec::new(&vocab, &tokenizer);

        assert_eq!(codec.embedding_size(), 5);
        assert_eq!(codec.layout(), EmbeddingLayout::new(3));
        assert_eq!(codec.vocabulary(), &vocab);

        assert_eq!(codec.bos::<F>(), encode_boundary::<F>(5, Boundary::Bos).unwrap());
        assert_eq!(codec.eos::<F>(), encode_boundary::<F>(5, Boundary::Eos).unwrap());
        assert_eq!(codec.encode_word::<F>("world"), vec![0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_encode_sentence() {
        type F = f32;
        let vocab = test_vocab();
        let tokenizer = SentenceTokenizer::unstemmed();
        let codec = EmbeddingCodec::new(&vocab, &tokenizer);

        let rows: Vec<Vec<F>> = codec.encode_sentence("Hello  WORLD bye");
        assert_eq!(rows, vec![
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
        ]);

        let rows: Vec<Vec<F>> = codec.encode_sentence("");
        assert_eq!(rows, vec![codec.bos::<F>(), codec.eos::<F>()]);
    }
}
