//! Question interpreter: free text in, plain-text answer out.
//!
//! Each call is independent. The interpreter holds only the shared,
//! immutable batch store and its rule table.

use std::sync::Arc;

use tracing::debug;

use smelter_core::config::InterpreterConfig;
use smelter_core::types::{BatchRecord, LookupKey};
use smelter_store::BatchStore;

use crate::error::ChatError;
use crate::parser::extract_key;
use crate::response;
use crate::rules::{Attribute, RuleTable};

/// Answer for a question with no batch id and no timestamp.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I don't understand the question.";

/// Structured outcome of interpreting a question, before phrasing.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation<'a> {
    /// No batch id or timestamp in the text.
    NoKey,
    /// A key was found but names no stored batch.
    NotFound(LookupKey),
    /// A key resolved to a batch and a rule picked the attribute.
    Resolved {
        key: LookupKey,
        attribute: Attribute,
        batch: &'a BatchRecord,
    },
}

impl Interpretation<'_> {
    /// Render the outcome as the user-facing answer.
    pub fn to_answer(&self) -> String {
        match self {
            Interpretation::NoKey => FALLBACK_ANSWER.to_string(),
            Interpretation::NotFound(key) => response::not_found(key),
            Interpretation::Resolved {
                key,
                attribute,
                batch,
            } => response::render(key, *attribute, batch),
        }
    }
}

/// Keyword-driven question answering over a [`BatchStore`].
pub struct QuestionInterpreter {
    store: Arc<BatchStore>,
    rules: RuleTable,
    /// Longest question `try_answer` accepts, in characters.
    max_question_chars: Option<usize>,
}

impl QuestionInterpreter {
    pub fn new(store: Arc<BatchStore>, config: &InterpreterConfig) -> Self {
        Self {
            store,
            rules: RuleTable::from_config(config),
            max_question_chars: None,
        }
    }

    /// Limit the question length accepted by [`Self::try_answer`].
    pub fn with_max_question_chars(mut self, max: usize) -> Self {
        self.max_question_chars = Some(max);
        self
    }

    pub fn store(&self) -> &BatchStore {
        &self.store
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn max_question_chars(&self) -> Option<usize> {
        self.max_question_chars
    }

    /// Resolve the question to a key, a batch and an attribute.
    pub fn interpret<'s>(&'s self, question: &str) -> Interpretation<'s> {
        let Some(key) = extract_key(question) else {
            debug!("No batch id or timestamp in question");
            return Interpretation::NoKey;
        };

        let Some(batch) = self.store.find(&key) else {
            debug!(kind = %key.kind(), key = key.value(), "Batch not found");
            return Interpretation::NotFound(key);
        };

        let lowered = question.to_lowercase();
        let attribute = self.rules.classify(&lowered, key.kind());
        debug!(
            kind = %key.kind(),
            key = key.value(),
            attribute = attribute.as_str(),
            "Question resolved"
        );

        Interpretation::Resolved {
            key,
            attribute,
            batch,
        }
    }

    /// Answer a question. Never fails: unknown batches and unrecognised
    /// questions are answered in plain text.
    pub fn answer(&self, question: &str) -> String {
        self.interpret(question).to_answer()
    }

    /// Like [`Self::answer`], but rejects questions over the length limit.
    pub fn try_answer(&self, question: &str) -> Result<String, ChatError> {
        if let Some(max) = self.max_question_chars {
            if question.chars().count() > max {
                return Err(ChatError::QuestionTooLong(max));
            }
        }
        Ok(self.answer(question))
    }
}
