//! # Vocabulary Builder

use crate::{
    corpus::Conversation,
    tokenizer::{SentenceTokenizer, TokenizerOptions},
    types::WCHashMap,
    vocab::{Vocabulary, is_valid_token},
};

/// The order in which a conversation's sentences are scanned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SentenceOrder {
    /// Answer tokens first, then question tokens.
    #[default]
    AnswerFirst,

    /// Question tokens first, then answer tokens.
    QuestionFirst,
}

impl SentenceOrder {
    /// The conversation's sentences, in scan order.
    pub fn sentences<'a>(
        &self,
        conversation: &'a Conversation,
    ) -> [&'a str; 2] {
        match self {
            SentenceOrder::AnswerFirst => [
                conversation.answer.as_str(),
                conversation.question.as_str(),
            ],
            SentenceOrder::QuestionFirst => [
                conversation.question.as_str(),
                conversation.answer.as_str(),
            ],
        }
    }
}

/// Options for [`VocabularyBuilder`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VocabBuilderOptions {
    /// The sentence tokenizer options.
    pub tokenizer: TokenizerOptions,

    /// The sentence scan order.
    pub order: SentenceOrder,
}

impl VocabBuilderOptions {
    /// Sets the tokenizer options.
    pub fn with_tokenizer(
        self,
        tokenizer: TokenizerOptions,
    ) -> Self {
        Self { tokenizer, ..self }
    }

    /// Sets the sentence scan order.
    pub fn with_order(
        self,
        order: SentenceOrder,
    ) -> Self {
        Self { order, ..self }
    }

    /// Initializes a [`VocabularyBuilder`] from these options.
    pub fn init(self) -> VocabularyBuilder {
        VocabularyBuilder::new(self.tokenizer.init(), self.order)
    }
}

/// Accumulates unique tokens, in first-seen order.
///
/// Membership is tracked in a hash index alongside the ordered token list;
/// [`VocabularyBuilder::build`] freezes both into a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    tokenizer: SentenceTokenizer,
    order: SentenceOrder,

    tokens: Vec<String>,
    index: WCHashMap<String, usize>,
}

impl VocabularyBuilder {
    /// Create an empty builder.
    ///
    /// ## Arguments
    /// * `tokenizer` - splits corpus sentences into tokens.
    /// * `order` - the conversation sentence scan order.
    pub fn new(
        tokenizer: SentenceTokenizer,
        order: SentenceOrder,
    ) -> Self {
        Self {
            tokenizer,
            order,
            tokens: Vec::new(),
            index: WCHashMap::default(),
        }
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &SentenceTokenizer {
        &self.tokenizer
    }

    /// Get the number of unique tokens seen so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens have been seen.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token, if not already present.
    ///
    /// Tokens rejected by [`is_valid_token`] are dropped; the stemmer may
    /// reduce punctuation-only words (e.g. `''s`) to the empty string.
    ///
    /// ## Returns
    /// `true` if the token was new.
    pub fn push_token<S: AsRef<str>>(
        &mut self,
        token: S,
    ) -> bool {
        let token = token.as_ref();
        if !is_valid_token(token) || self.index.contains_key(token) {
            return false;
        }
        self.index.insert(token.to_string(), self.tokens.len());
        self.tokens.push(token.to_string());
        true
    }

    /// Append each new token, in order.
    pub fn extend_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.push_token(token);
        }
    }

    /// Tokenize a sentence and append its new tokens.
    pub fn update_from_sentence(
        &mut self,
        sentence: &str,
    ) {
        let tokens = self.tokenizer.tokenize(sentence);
        self.extend_tokens(tokens);
    }

    /// Append the new tokens of a conversation, in the configured sentence order.
    pub fn update_from_conversation(
        &mut self,
        conversation: &Conversation,
    ) {
        for sentence in self.order.sentences(conversation) {
            self.update_from_sentence(sentence);
        }
    }

    /// Append the new tokens of each conversation, in order.
    pub fn update_from_conversations<'a, I>(
        &mut self,
        conversations: I,
    ) where
        I: IntoIterator<Item = &'a Conversation>,
    {
        for conversation in conversations {
            self.update_from_conversation(conversation);
        }
    }

    /// Freeze the accumulated tokens into a [`Vocabulary`].
    pub fn build(self) -> Vocabulary {
        log::debug!("Built vocabulary of {} tokens", self.tokens.len());
        Vocabulary::from_parts(self.tokens, self.index)
    }
}
