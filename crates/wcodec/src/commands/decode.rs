use std::io::Write;

use wordcodec::{
    decoders::{ScoreDecoder, VocabDecoder},
    rayon::ParallelRayonDecoder,
    vocab::io::load_vocabulary_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Vocabulary file, as written by the vocab command.
    #[arg(long)]
    vocab: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = load_vocabulary_path(&self.vocab)?;
        let decoder = ParallelRayonDecoder::new(VocabDecoder::new(vocab));

        let mut writer = self.output.open_writer()?;
        for (line_no, line) in self.input.lines()? {
            let line = line?;
            if line.trim().is_empty() {
                writeln!(writer)?;
                continue;
            }

            let rows: Vec<Vec<f64>> = serde_json::from_str(&line)
                .map_err(|e| format!("line {line_no}: {e}"))?;
            writeln!(writer, "{}", decoder.decode_sentence(&rows))?;
        }
        writer.flush()?;

        Ok(())
    }
}
