//! # `wordcodec` One-Hot Sentence Codec
//!
//! This crate turns natural-language sentences into fixed-width one-hot
//! embeddings for a sequence model; and turns the model's raw output scores
//! back into words.
//!
//! See:
//! * [`tokenizer`] to split sentences into stemmed, lowercase tokens.
//! * [`stemming`] for the pluggable stemmer capability.
//! * [`corpus`] to load question/answer conversation records.
//! * [`vocab`] to build, save, and load token vocabularies.
//! * [`embedding`] to encode words and boundary markers into embeddings.
//! * [`decoders`] to select words from model score vectors.
//!
//! ## Embedding Layout
//!
//! Every embedding for a vocabulary `V` has `|V| + 2` positions:
//!
//! | position    | meaning                    |
//! |-------------|----------------------------|
//! | `0`         | BOS, beginning-of-sequence |
//! | `1`         | EOS, end-of-sequence       |
//! | `k + 2`     | vocabulary word `k`        |
//!
//! Encoders and decoders share this layout; see [`embedding::EmbeddingLayout`].
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordcodec::{
//!     corpus::Conversation,
//!     decoders::{closest_embedding, reconstruct_word},
//!     embedding::EmbeddingCodec,
//!     tokenizer::TokenizerOptions,
//!     vocab::build_vocabulary,
//! };
//!
//! type F = f64;
//!
//! // Answers are scanned before questions.
//! let corpus = vec![Conversation::new("hello", "hi")];
//! let vocab = build_vocabulary(&corpus);
//! assert_eq!(vocab.tokens(), &["hi".to_string(), "hello".to_string()]);
//!
//! let tokenizer = TokenizerOptions::default().init();
//! let codec = EmbeddingCodec::new(&vocab, &tokenizer);
//!
//! let hello: Vec<F> = codec.encode_word("hello");
//! assert_eq!(hello, vec![0.0, 0.0, 0.0, 1.0]);
//!
//! let scores: Vec<F> = vec![0.1, 0.2, 0.1, 0.9];
//! let closest = closest_embedding(&scores);
//! assert_eq!(closest, vec![0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(reconstruct_word(&vocab, &closest), "hello");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod corpus;
pub mod decoders;
pub mod embedding;
pub mod errors;
pub mod stemming;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{CodecError, CodecResult};
#[doc(inline)]
pub use types::ScoreType;
