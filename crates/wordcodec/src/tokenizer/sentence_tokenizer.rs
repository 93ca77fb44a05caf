use std::sync::Arc;

use crate::{
    stemming::{IdentityStemmer, WordStemmer},
    tokenizer::TokenizerOptions,
};

/// Splits sentences into stemmed word tokens.
#[derive(Clone)]
pub struct SentenceTokenizer {
    options: TokenizerOptions,
    stemmer: Arc<dyn WordStemmer>,
}

impl core::fmt::Debug for SentenceTokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("SentenceTokenizer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        TokenizerOptions::default().init()
    }
}

impl SentenceTokenizer {
    /// Create a tokenizer with an explicit stemmer.
    ///
    /// ## Arguments
    /// * `options` - the tokenizer options; `options.language` is informational here.
    /// * `stemmer` - the stemmer to apply to each word.
    pub fn new(
        options: TokenizerOptions,
        stemmer: Arc<dyn WordStemmer>,
    ) -> Self {
        Self { options, stemmer }
    }

    /// Create a lowercasing tokenizer which does no stemming.
    pub fn unstemmed() -> Self {
        Self::new(TokenizerOptions::default(), Arc::new(IdentityStemmer))
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the stemmer.
    pub fn stemmer(&self) -> &Arc<dyn WordStemmer> {
        &self.stemmer
    }

    /// Stem a single word.
    ///
    /// The word is not lowercased.
    pub fn stem(
        &self,
        word: &str,
    ) -> String {
        self.stemmer.stem(word).into_owned()
    }

    /// Split a sentence into tokens.
    ///
    /// ## Arguments
    /// * `sentence` - the sentence to split.
    ///
    /// ## Returns
    /// One token per whitespace-delimited word, in order;
    /// empty for an empty or whitespace-only sentence.
    pub fn tokenize(
        &self,
        sentence: &str,
    ) -> Vec<String> {
        if self.options.lowercase {
            self.split_and_stem(&sentence.to_lowercase())
        } else {
            self.split_and_stem(sentence)
        }
    }

    fn split_and_stem(
        &self,
        sentence: &str,
    ) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|word| self.stem(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    /// Strips a trailing "s"; enough to see the stemmer is applied.
    struct PluralStemmer;

    impl WordStemmer for PluralStemmer {
        fn stem<'a>(
            &self,
            word: &'a str,
        ) -> Cow<'a, str> {
            Cow::Borrowed(word.strip_suffix('s').unwrap_or(word))
        }
    }

    fn plural_tokenizer() -> SentenceTokenizer {
        SentenceTokenizer::new(TokenizerOptions::default(), Arc::new(PluralStemmer))
    }

    #[test]
    fn test_tokenize() {
        let tokenizer = plural_tokenizer();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);

        assert_eq!(
            tokenizer.tokenize("The  Dogs\tchase\n CATS"),
            vec!["the", "dog", "chase", "cat"]
        );
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_stem_does_not_lowercase() {
        let tokenizer = plural_tokenizer();
        assert_eq!(tokenizer.stem("Dogs"), "Dog");
    }

    #[test]
    fn test_token_count_matches_word_count() {
        let tokenizer = SentenceTokenizer::default();
        let samples = [
            "hello world",
            "The quick brown fox jumps over the lazy dog.",
            "  multiple   spaces  ",
            "line1\nline2\r\nline3",
            "caf\u{00e9} na\u{00ef}ve",
            "a",
        ];
        for sample in samples {
            let tokens = tokenizer.tokenize(sample);
            assert_eq!(tokens.len(), sample.split_whitespace().count(), "{sample:?}");
            for token in &tokens {
                assert_eq!(token, &token.to_lowercase());
            }
        }
    }

    #[test]
    fn test_no_lowercase() {
        let tokenizer = SentenceTokenizer::new(
            TokenizerOptions::default().with_lowercase(false),
            Arc::new(IdentityStemmer),
        );
        assert_eq!(tokenizer.tokenize("Hello World"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_unstemmed() {
        let tokenizer = SentenceTokenizer::unstemmed();
        assert_eq!(tokenizer.tokenize("Running CATS"), vec!["running", "cats"]);
    }
}
