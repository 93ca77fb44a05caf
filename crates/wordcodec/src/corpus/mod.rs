//! # Conversation Corpus
//!
//! A corpus is a sequence of [`Conversation`] records; each an ordered
//! `(question, answer)` pair of sentences.
//!
//! ## Formats
//!
//! * JSON - a single array of records.
//! * JSON lines (`*.jsonl`) - one record per line; blank lines are skipped.
//!
//! ```terminaloutput
//! {"question": "hi", "answer": "hello"}
//! ```

mod conversation_io;

#[doc(inline)]
pub use conversation_io::*;

/// A question/answer conversation record.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Conversation {
    /// The question sentence.
    pub question: String,

    /// The answer sentence.
    pub answer: String,
}

impl Conversation {
    /// Create a new conversation.
    ///
    /// ## Arguments
    /// * `question` - the question sentence.
    /// * `answer` - the answer sentence.
    pub fn new<Q, A>(
        question: Q,
        answer: A,
    ) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl<Q, A> From<(Q, A)> for Conversation
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}
