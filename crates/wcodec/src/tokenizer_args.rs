use wordcodec::{
    stemming::DEFAULT_LANGUAGE,
    tokenizer::{SentenceTokenizer, TokenizerOptions},
};

/// Tokenizer configuration arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Stemming language.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Keep the original case of words.
    #[arg(long)]
    pub no_lowercase: bool,
}

impl TokenizerArgs {
    /// The configured tokenizer options.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::new(self.language.clone()).with_lowercase(!self.no_lowercase)
    }

    /// Build the configured tokenizer.
    pub fn init(&self) -> SentenceTokenizer {
        self.options().init()
    }
}
