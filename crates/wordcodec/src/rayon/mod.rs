//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel decoders.

mod rayon_decoder;

pub use rayon_decoder::ParallelRayonDecoder;
