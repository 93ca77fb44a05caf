//! # Conversation IO

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    corpus::Conversation,
    errors::{CodecError, CodecResult},
};

/// Load conversations from a file.
///
/// Files with a `.jsonl` extension are read as JSON lines;
/// all others as a single JSON array.
///
/// ## Arguments
/// * `path` - the path to the corpus file.
pub fn load_conversations_path<P: AsRef<Path>>(path: P) -> CodecResult<Vec<Conversation>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let is_jsonl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    let conversations = if is_jsonl {
        read_conversations_jsonl(reader)?
    } else {
        read_conversations_json(reader)?
    };

    log::info!(
        "Loaded {} conversations from {}",
        conversations.len(),
        path.display()
    );
    Ok(conversations)
}

/// Read conversations from a JSON array.
///
/// ## Arguments
/// * `reader` - the JSON source.
pub fn read_conversations_json<R: Read>(reader: R) -> CodecResult<Vec<Conversation>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read conversations from JSON lines.
///
/// Blank lines are skipped.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_conversations_jsonl<R: BufRead>(reader: R) -> CodecResult<Vec<Conversation>> {
    let mut conversations = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let conversation = serde_json::from_str(&line)
            .map_err(|e| CodecError::Parse(format!("line {}: {e}", idx + 1)))?;
        conversations.push(conversation);
    }
    Ok(conversations)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_read_json() {
        let data = r#"[
            {"question": "hi", "answer": "hello"},
            {"question": "how are you", "answer": "fine"}
        ]"#;
        let conversations = read_conversations_json(data.as_bytes()).unwrap();
        assert_eq!(conversations, vec![
            Conversation::new("hi", "hello"),
            Conversation::new("how are you", "fine"),
        ]);
    }

    #[test]
    fn test_read_jsonl() {
        let data = concat!(
            "{\"question\": \"hi\", \"answer\": \"hello\"}\n",
            "\n",
            "  \n",
            "{\"question\": \"a\", \"answer\": \"b\"}\n",
        );
        let conversations = read_conversations_jsonl(data.as_bytes()).unwrap();
        assert_eq!(conversations, vec![
            Conversation::new("hi", "hello"),
            Conversation::new("a", "b"),
        ]);
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_conversations_json("[{\"question\": \"hi\"}]".as_bytes()),
            Err(CodecError::Parse(_))
        ));

        let data = "{\"question\": \"hi\", \"answer\": \"x\"}\nnope\n";
        let err = read_conversations_jsonl(data.as_bytes()).unwrap_err();
        match err {
            CodecError::Parse(msg) => assert!(msg.starts_with("line 2:"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_path() {
        let dir = TempDir::new("wordcodec_corpus").unwrap();

        let json_path = dir.path().join("corpus.json");
        std::fs::write(&json_path, r#"[{"question": "hi", "answer": "hello"}]"#).unwrap();

        let jsonl_path = dir.path().join("corpus.jsonl");
        let mut file = File::create(&jsonl_path).unwrap();
        writeln!(file, r#"{{"question": "hi", "answer": "hello"}}"#).unwrap();
        drop(file);

        let expected = vec![Conversation::new("hi", "hello")];
        assert_eq!(load_conversations_path(&json_path).unwrap(), expected);
        assert_eq!(load_conversations_path(&jsonl_path).unwrap(), expected);

        assert!(matches!(
            load_conversations_path(dir.path().join("missing.json")),
            Err(CodecError::Io(_))
        ));
    }
}
