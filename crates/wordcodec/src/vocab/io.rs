//! # Vocabulary IO
//!
//! Vocabularies are stored as text, one token per line, in index order:
//! ```terminaloutput
//! {TOKEN 0}
//! {TOKEN 1}
//! ...
//! ```
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordcodec::vocab::{Vocabulary, io::load_vocabulary_path};
//!
//! fn example() -> wordcodec::CodecResult<Vocabulary> {
//!     load_vocabulary_path("vocab.txt")
//! }
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{errors::CodecResult, vocab::Vocabulary};

/// Load a [`Vocabulary`] from a vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocabulary_path<P: AsRef<Path>>(path: P) -> CodecResult<Vocabulary> {
    let path = path.as_ref();
    let vocab = read_vocabulary(BufReader::new(File::open(path)?))?;
    log::info!("Loaded {} tokens from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`Vocabulary`] from a vocab line reader.
///
/// Empty lines are skipped; duplicate tokens are a
/// [`crate::errors::CodecError::VocabConflict`].
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocabulary<R: BufRead>(reader: R) -> CodecResult<Vocabulary> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim_end_matches('\r');
        if token.is_empty() {
            continue;
        }
        tokens.push(token.to_string());
    }

    Vocabulary::try_from_tokens(tokens)
}

/// Save a [`Vocabulary`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocabulary_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> CodecResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocabulary(vocab, &mut writer)
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
///
/// Every [`Vocabulary`] token is non-empty and single-line,
/// so the written file reads back to an equal vocabulary.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocabulary<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> CodecResult<()> {
    for token in vocab.iter() {
        writeln!(writer, "{token}")?;
    }
    writer.flush()?;
    Ok(())
}
