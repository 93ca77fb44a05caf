//! # Error Types

/// Errors from wordcodec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Embedding size is below the minimum (2, the BOS/EOS slots).
    #[error("embedding size ({size}) must be >= 2")]
    EmbeddingTooSmall {
        /// The embedding size that was too small.
        size: usize,
    },

    /// No stemmer could be initialized for the requested language.
    #[error("stemmer unavailable: {0}")]
    StemmerUnavailable(String),

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (json, malformed records, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return CodecError::Io(err.into());
        }
        CodecError::Parse(err.to_string())
    }
}

/// Result type for wordcodec operations.
pub type CodecResult<T> = core::result::Result<T, CodecError>;
