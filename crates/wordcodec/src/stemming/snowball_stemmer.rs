//! # Snowball Stemmer

use std::borrow::Cow;

use rust_stemmers::{Algorithm, Stemmer};

use crate::stemming::{StemmerLanguage, WordStemmer};

/// A [`WordStemmer`] backed by the ``rust-stemmers`` Snowball algorithms.
pub struct SnowballStemmer {
    language: StemmerLanguage,
    stemmer: Stemmer,
}

impl core::fmt::Debug for SnowballStemmer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl SnowballStemmer {
    /// Create a new stemmer for the language.
    pub fn new(language: StemmerLanguage) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(algorithm_for(language)),
        }
    }

    /// The stemmer language.
    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

fn algorithm_for(language: StemmerLanguage) -> Algorithm {
    match language {
        StemmerLanguage::Arabic => Algorithm::Arabic,
        StemmerLanguage::Danish => Algorithm::Danish,
        StemmerLanguage::Dutch => Algorithm::Dutch,
        StemmerLanguage::English => Algorithm::English,
        StemmerLanguage::Finnish => Algorithm::Finnish,
        StemmerLanguage::French => Algorithm::French,
        StemmerLanguage::German => Algorithm::German,
        StemmerLanguage::Greek => Algorithm::Greek,
        StemmerLanguage::Hungarian => Algorithm::Hungarian,
        StemmerLanguage::Italian => Algorithm::Italian,
        StemmerLanguage::Norwegian => Algorithm::Norwegian,
        StemmerLanguage::Portuguese => Algorithm::Portuguese,
        StemmerLanguage::Romanian => Algorithm::Romanian,
        StemmerLanguage::Russian => Algorithm::Russian,
        StemmerLanguage::Spanish => Algorithm::Spanish,
        StemmerLanguage::Swedish => Algorithm::Swedish,
        StemmerLanguage::Tamil => Algorithm::Tamil,
        StemmerLanguage::Turkish => Algorithm::Turkish,
    }
}

impl WordStemmer for SnowballStemmer {
    fn stem<'a>(
        &self,
        word: &'a str,
    ) -> Cow<'a, str> {
        self.stemmer.stem(word)
    }
}
