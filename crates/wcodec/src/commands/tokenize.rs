use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::TokenizerArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[clap(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.init();

        let mut writer = self.output.open_writer()?;
        for (_, line) in self.input.lines()? {
            let tokens = tokenizer.tokenize(&line?);
            writeln!(writer, "{}", tokens.join(" "))?;
        }
        writer.flush()?;

        Ok(())
    }
}
