//! # Common Types and Traits
use core::fmt::{Debug, Display};

use num_traits::Float;

/// A floating point type usable as an embedding / score value.
///
/// Embeddings are one-hot vectors over these values;
/// model score vectors are arbitrary reals.
pub trait ScoreType: 'static + Float + Default + Debug + Display + Send + Sync {}

impl<F> ScoreType for F where F: 'static + Float + Default + Debug + Display + Send + Sync {}

/// Build a one-hot vector of `size` with a `1` at `index`.
///
/// An out-of-range `index` yields the all-zero vector.
pub fn one_hot<F: ScoreType>(
    size: usize,
    index: usize,
) -> Vec<F> {
    let mut embedding = vec![F::zero(); size];
    if let Some(slot) = embedding.get_mut(index) {
        *slot = F::one();
    }
    embedding
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: S) {}
