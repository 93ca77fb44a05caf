//! # Vocabulary

use crate::{
    errors::{CodecError, CodecResult},
    types::WCHashMap,
};

/// Check if `token` can be stored in a vocabulary.
///
/// Tokens must be non-empty and free of line breaks;
/// the vocab file format stores one token per line.
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.contains(['\n', '\r'])
}

/// An ordered, duplicate-free list of tokens.
///
/// The token at index `k` is encoded at embedding position `k + 2`.
///
/// Vocabularies are read-only; build them with [`crate::vocab::VocabularyBuilder`].
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: WCHashMap<String, usize>,
}

impl PartialEq for Vocabulary {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Create a vocabulary from an ordered, duplicate-free token list.
    ///
    /// ## Returns
    /// A [`CodecError::VocabConflict`] for the first duplicated or invalid token
    /// (see [`is_valid_token`]), if any.
    pub fn try_from_tokens(tokens: Vec<String>) -> CodecResult<Self> {
        let mut index: WCHashMap<String, usize> = WCHashMap::default();
        index.reserve(tokens.len());

        for (idx, token) in tokens.iter().enumerate() {
            if !is_valid_token(token) {
                return Err(CodecError::VocabConflict(format!(
                    "invalid token {token:?} at index {idx}"
                )));
            }
            if index.insert(token.clone(), idx).is_some() {
                return Err(CodecError::VocabConflict(format!(
                    "duplicate token {token:?} at index {idx}"
                )));
            }
        }

        Ok(Self { tokens, index })
    }

    /// Assemble a vocabulary from a token list and its inverse index.
    ///
    /// The caller guarantees `index[tokens[k]] == k` for every `k`.
    pub(crate) fn from_parts(
        tokens: Vec<String>,
        index: WCHashMap<String, usize>,
    ) -> Self {
        debug_assert_eq!(tokens.len(), index.len());
        Self { tokens, index }
    }

    /// Get the number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The size of embeddings over this vocabulary: `len() + 2`.
    pub fn embedding_size(&self) -> usize {
        self.len() + 2
    }

    /// Get the tokens, in index order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over the tokens, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Get the token at `index`, if any.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Get the index of `token`, if present.
    ///
    /// Matching is exact; no stemming or case folding is applied.
    pub fn index_of(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Check if the vocabulary contains `token`.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// Consume the vocabulary, returning the tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a str;
    type IntoIter = core::iter::Map<core::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.tokens.iter().map(as_str)
    }
}
