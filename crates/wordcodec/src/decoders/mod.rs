//! # Score Decoders
//!
//! A sequence model emits raw score vectors in the embedding space
//! (see [`crate::embedding::EmbeddingLayout`]). Decoding picks the
//! highest-scoring position.
//!
//! * [`closest_embedding`] - snap a score vector to the nearest one-hot embedding.
//! * [`reconstruct_word`] - read the word out of a one-hot embedding.
//! * [`decode_scores`] / [`decode_sequence`] - decode score vectors into [`Decoded`] words.
//! * [`VocabDecoder`] - a [`ScoreDecoder`] for whole score vectors and sequences.
//!
//! ## Tie-Break
//!
//! Positions are scanned left to right, keeping the first strictly greater score;
//! so the first occurrence of the maximum wins. NaN scores never win over a
//! real score.

mod closest;
pub(crate) mod score_decoder;
mod vocab_decoder;

#[doc(inline)]
pub use closest::{closest_embedding, closest_index, reconstruct_word, try_reconstruct_word};
#[doc(inline)]
pub use score_decoder::{Decoded, ScoreDecoder};
#[doc(inline)]
pub use vocab_decoder::{VocabDecoder, decode_scores, decode_sequence};
