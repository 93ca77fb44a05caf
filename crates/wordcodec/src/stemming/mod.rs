//! # Word Stemming
//!
//! Stemming is a pluggable capability behind [`WordStemmer`]:
//! * [`SnowballStemmer`] - the Snowball stemmers, when the "snowball" feature is enabled.
//! * [`IdentityStemmer`] - returns words unchanged.
//!
//! The stemmer is selected once, at construction time, by [`load_stemmer`];
//! which falls back to [`IdentityStemmer`] (with a logged warning) when
//! the requested stemmer cannot be initialized.
//!
//! All stemmers are `Send + Sync` and hold no per-call state;
//! a single instance may be shared across threads.

mod identity_stemmer;
mod stemmer_language;

#[cfg(feature = "snowball")]
mod snowball_stemmer;

use std::{borrow::Cow, sync::Arc};

#[doc(inline)]
pub use identity_stemmer::IdentityStemmer;
#[cfg(feature = "snowball")]
#[doc(inline)]
pub use snowball_stemmer::SnowballStemmer;
#[doc(inline)]
pub use stemmer_language::StemmerLanguage;

use crate::errors::{CodecError, CodecResult};

/// The default stemming language.
pub const DEFAULT_LANGUAGE: &str = "english";

/// A word stemming capability.
pub trait WordStemmer: Send + Sync {
    /// Reduce a (lowercase) word to its stem.
    ///
    /// ## Arguments
    /// * `word` - the word to stem.
    ///
    /// ## Returns
    /// The stem; borrowed from `word` when unchanged.
    fn stem<'a>(
        &self,
        word: &'a str,
    ) -> Cow<'a, str>;
}

/// Try to initialize a stemmer for the named language.
///
/// ## Arguments
/// * `language` - a language name, e.g. `"english"`; matched case-insensitively.
///
/// ## Returns
/// The stemmer, or [`CodecError::StemmerUnavailable`].
pub fn try_load_stemmer(language: &str) -> CodecResult<Arc<dyn WordStemmer>> {
    let language: StemmerLanguage = language
        .trim()
        .parse()
        .map_err(|_| CodecError::StemmerUnavailable(format!("unknown language {language:?}")))?;

    cfg_if::cfg_if! {
        if #[cfg(feature = "snowball")] {
            Ok(Arc::new(SnowballStemmer::new(language)))
        } else {
            Err(CodecError::StemmerUnavailable(format!(
                "{language} requires the \"snowball\" feature"
            )))
        }
    }
}

/// Load a stemmer for the named language, falling back to [`IdentityStemmer`].
///
/// Initialization failure is recoverable: a warning is logged,
/// and words will pass through un-stemmed.
///
/// ## Arguments
/// * `language` - a language name, e.g. `"english"`.
pub fn load_stemmer(language: &str) -> Arc<dyn WordStemmer> {
    match try_load_stemmer(language) {
        Ok(stemmer) => stemmer,
        Err(err) => {
            log::warn!("Unable to load stemmer. Returning un-stemmed words. {err}");
            Arc::new(IdentityStemmer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    #[test]
    fn test_unknown_language_falls_back() {
        assert!(matches!(
            try_load_stemmer("klingon"),
            Err(CodecError::StemmerUnavailable(_))
        ));

        let stemmer = load_stemmer("klingon");
        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem("cats"), "cats");
    }

    #[test]
    fn test_stemmer_is_shareable() {
        let stemmer = load_stemmer(DEFAULT_LANGUAGE);
        check_is_send(stemmer.clone());
        check_is_sync(stemmer.clone());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stemmer = stemmer.clone();
                std::thread::spawn(move || stemmer.stem("hello").into_owned())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "hello");
        }
    }

    #[cfg(feature = "snowball")]
    #[test]
    fn test_load_english() {
        let stemmer = try_load_stemmer("English").unwrap();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
    }

    #[cfg(not(feature = "snowball"))]
    #[test]
    fn test_english_without_snowball() {
        assert!(try_load_stemmer(DEFAULT_LANGUAGE).is_err());
        assert_eq!(load_stemmer(DEFAULT_LANGUAGE).stem("running"), "running");
    }
}
