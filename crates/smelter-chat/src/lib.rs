//! Question answering over batch records.
//!
//! Extracts a lookup key from free text, classifies the requested attribute
//! through an ordered keyword rule table, and renders a plain-text answer.

pub mod error;
pub mod interpreter;
pub mod parser;
pub mod response;
pub mod rules;

pub use error::ChatError;
pub use interpreter::{Interpretation, QuestionInterpreter, FALLBACK_ANSWER};
pub use parser::{extract_batch_id, extract_key, extract_timestamp};
pub use rules::{Attribute, Rule, RuleScope, RuleTable};
