use crate::{
    stemming::{DEFAULT_LANGUAGE, load_stemmer},
    tokenizer::SentenceTokenizer,
};

/// Options for configuring a [`SentenceTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The stemming language.
    pub language: String,

    /// Lowercase sentences before splitting.
    pub lowercase: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl TokenizerOptions {
    /// Create new (lowercasing) options.
    ///
    /// ## Arguments
    /// * `language` - The stemming language.
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self {
            language: language.into(),
            lowercase: true,
        }
    }

    /// Sets the stemming language.
    pub fn with_language<S: Into<String>>(
        self,
        language: S,
    ) -> Self {
        Self {
            language: language.into(),
            ..self
        }
    }

    /// Sets the lowercase option.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Initializes a [`SentenceTokenizer`] from these options.
    ///
    /// The stemmer is selected here, once; see [`load_stemmer`].
    pub fn init(self) -> SentenceTokenizer {
        let stemmer = load_stemmer(&self.language);
        SentenceTokenizer::new(self, stemmer)
    }
}
