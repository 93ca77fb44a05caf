//! # Embeddings
//!
//! Words and boundary markers share a single one-hot embedding space
//! of `|V| + 2` positions; see [`EmbeddingLayout`].
//!
//! * [`encode_word`] - a word's one-hot embedding.
//! * [`encode_boundary`] - a BOS/EOS marker embedding.
//! * [`EmbeddingCodec`] - a vocabulary-bound encoder, including sentence framing.
//!
//! ## Example
//!
//! ```rust
//! use wordcodec::{
//!     embedding::{Boundary, encode_boundary, encode_word},
//!     vocab::Vocabulary,
//! };
//!
//! type F = f32;
//!
//! let vocab = Vocabulary::try_from_tokens(vec!["hi".into(), "hello".into()]).unwrap();
//!
//! let hello: Vec<F> = encode_word(&vocab, "hello");
//! assert_eq!(hello, vec![0.0, 0.0, 0.0, 1.0]);
//!
//! let eos: Vec<F> = encode_boundary(vocab.embedding_size(), Boundary::Eos).unwrap();
//! assert_eq!(eos, vec![0.0, 1.0, 0.0, 0.0]);
//! ```

mod embedding_codec;
mod embedding_layout;

#[doc(inline)]
pub use embedding_codec::{EmbeddingCodec, encode_boundary, encode_word};
#[doc(inline)]
pub use embedding_layout::{Boundary, EmbeddingLayout, EmbeddingSlot, RESERVED_SLOTS};
