use std::io::Write;

use wordcodec::{embedding::EmbeddingCodec, vocab::io::load_vocabulary_path};

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::TokenizerArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Vocabulary file, as written by the vocab command.
    #[arg(long)]
    vocab: String,

    #[clap(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = load_vocabulary_path(&self.vocab)?;
        let tokenizer = self.tokenizer.init();
        let codec = EmbeddingCodec::new(&vocab, &tokenizer);
        log::info!("Embedding Size: {}", codec.embedding_size());

        let mut writer = self.output.open_writer()?;
        for (_, line) in self.input.lines()? {
            let rows: Vec<Vec<f32>> = codec.encode_sentence(&line?);
            serde_json::to_writer(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}
