//! # Vocabulary
//!
//! This module provides the token vocabulary and related io mechanisms.
//!
//! * [`VocabularyBuilder`] - accumulates unique tokens from a corpus, in first-seen order.
//! * [`Vocabulary`] - the immutable, ordered token list it produces.
//! * [`io`] - a one-token-per-line text format.
//!
//! Insertion order is significant: a token's index in the vocabulary
//! defines its position in every embedding (see [`crate::embedding`]).

pub mod io;

mod vocab_builder;
mod vocabulary;

#[doc(inline)]
pub use vocab_builder::{SentenceOrder, VocabBuilderOptions, VocabularyBuilder};
#[doc(inline)]
pub use vocabulary::{Vocabulary, is_valid_token};

use crate::corpus::Conversation;

/// Build a [`Vocabulary`] from a conversation corpus.
///
/// Each conversation contributes its answer tokens, then its question tokens,
/// using the default english tokenizer.
///
/// ## Arguments
/// * `conversations` - the corpus.
pub fn build_vocabulary<'a, I>(conversations: I) -> Vocabulary
where
    I: IntoIterator<Item = &'a Conversation>,
{
    let mut builder = VocabBuilderOptions::default().init();
    builder.update_from_conversations(conversations);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_vocabulary() {
        let corpus = vec![
            Conversation::new("hello", "hi"),
            Conversation::new("hi bob", "hello you"),
        ];
        let vocab = build_vocabulary(&corpus);
        assert_eq!(vocab.tokens(), &["hi", "hello", "you", "bob"]);
    }

    #[test]
    fn test_build_vocabulary_covers_corpus() {
        let corpus = vec![
            Conversation::new("What is your name", "My name is Bot"),
            Conversation::new("what time is it", "It is noon"),
            Conversation::new("", "   "),
        ];
        let vocab = build_vocabulary(&corpus);

        let mut seen = std::collections::BTreeSet::new();
        for token in vocab.iter() {
            assert!(seen.insert(token.to_string()), "duplicate token {token:?}");
        }

        for conv in &corpus {
            for sentence in [&conv.question, &conv.answer] {
                for token in crate::tokenizer::tokenize(sentence) {
                    assert!(vocab.contains(&token), "missing token {token:?}");
                }
            }
        }
    }
}
