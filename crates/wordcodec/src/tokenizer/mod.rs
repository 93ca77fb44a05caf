//! # Sentence Tokenizer
//!
//! Sentences are lowercased, split on runs of whitespace, and stemmed
//! word-by-word into tokens.
//!
//! ```rust
//! use wordcodec::tokenizer::{TokenizerOptions, tokenize};
//!
//! assert_eq!(tokenize("Hello   World"), vec!["hello", "world"]);
//!
//! let tokenizer = TokenizerOptions::default().with_lowercase(false).init();
//! assert_eq!(tokenizer.tokenize("Hi"), vec!["Hi"]);
//! ```

mod sentence_tokenizer;
mod tokenizer_options;

use std::sync::OnceLock;

#[doc(inline)]
pub use sentence_tokenizer::SentenceTokenizer;
#[doc(inline)]
pub use tokenizer_options::TokenizerOptions;

/// The shared default (english, lowercasing) tokenizer.
pub fn default_tokenizer() -> &'static SentenceTokenizer {
    static DEFAULT: OnceLock<SentenceTokenizer> = OnceLock::new();
    DEFAULT.get_or_init(|| TokenizerOptions::default().init())
}

/// Tokenize a sentence with the [`default_tokenizer`].
///
/// See [`SentenceTokenizer::tokenize`].
pub fn tokenize(sentence: &str) -> Vec<String> {
    default_tokenizer().tokenize(sentence)
}

/// Stem a word with the [`default_tokenizer`].
///
/// See [`SentenceTokenizer::stem`].
pub fn stem(word: &str) -> String {
    default_tokenizer().stem(word)
}
