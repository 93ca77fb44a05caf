use log::LevelFilter;

mod decode;
mod encode;
mod tokenize;
mod vocab;

/// Subcommands for wcodec
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from conversation corpus files.
    Vocab(vocab::VocabArgs),

    /// Print the stemmed tokens of each input line.
    Tokenize(tokenize::TokenizeArgs),

    /// Encode each input line as a JSON array of one-hot embedding rows.
    Encode(encode::EncodeArgs),

    /// Decode each input line of JSON score rows into a sentence.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// The log level used when neither `-q` nor `-v` is given.
    ///
    /// `vocab` reports its progress at `info`; the streaming commands
    /// only surface warnings, such as a stemmer fallback.
    pub fn default_log_level(&self) -> LevelFilter {
        match self {
            Commands::Vocab(_) => LevelFilter::Info,
            _ => LevelFilter::Warn,
        }
    }

    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
