//! Error types for question answering.

/// Errors from the question interpreter.
///
/// Unknown batches and unrecognised questions are answers, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("question exceeds maximum length of {0} characters")]
    QuestionTooLong(usize),
}
