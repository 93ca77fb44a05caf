//! # wcodec
//!
//! Command-line front end for the `wordcodec` one-hot sentence codec:
//! build a vocabulary from a conversation corpus, then tokenize, encode,
//! and decode sentences against it.
mod commands;
mod input_output;
mod logging;
mod tokenizer_args;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// wcodec: one-hot sentence codec tools.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    #[command(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(args.command.default_log_level())?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use log::LevelFilter;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_log_flags() {
        let args = Args::try_parse_from(["wcodec", "tokenize", "-vv", "--input", "-"]).unwrap();
        assert_eq!(args.logging.verbose, 2);
        assert_eq!(
            args.logging.level_filter(args.command.default_log_level()),
            LevelFilter::Debug
        );

        let args = Args::try_parse_from(["wcodec", "-q", "vocab", "corpus.json"]).unwrap();
        assert!(args.logging.quiet);
        assert_eq!(args.command.default_log_level(), LevelFilter::Info);
    }
}
