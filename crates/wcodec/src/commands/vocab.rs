use wordcodec::{
    corpus::load_conversations_path,
    vocab::{SentenceOrder, VocabBuilderOptions, io::write_vocabulary},
};

use crate::{input_output::OutputArgs, tokenizer_args::TokenizerArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Corpus files; JSON arrays, or JSON lines (`*.jsonl`).
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    tokenizer: TokenizerArgs,

    /// Scan questions before answers.
    #[arg(long)]
    question_first: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let order = if self.question_first {
            SentenceOrder::QuestionFirst
        } else {
            SentenceOrder::AnswerFirst
        };

        let mut builder = VocabBuilderOptions::default()
            .with_tokenizer(self.tokenizer.options())
            .with_order(order)
            .init();

        log::info!("Reading corpus:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            let conversations = load_conversations_path(path)?;
            builder.update_from_conversations(&conversations);
        }

        let vocab = builder.build();
        log::info!("Vocabulary Size: {}", vocab.len());

        log::info!("Writing vocabulary: {}", self.output.describe());
        let mut writer = self.output.open_writer()?;
        write_vocabulary(&vocab, &mut writer)?;

        Ok(())
    }
}
