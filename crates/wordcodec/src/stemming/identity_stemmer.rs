//! # Identity Stemmer

use std::borrow::Cow;

use crate::stemming::WordStemmer;

/// A [`WordStemmer`] which returns every word unchanged.
///
/// This is the fallback when no real stemmer can be initialized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityStemmer;

impl WordStemmer for IdentityStemmer {
    fn stem<'a>(
        &self,
        word: &'a str,
    ) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}
