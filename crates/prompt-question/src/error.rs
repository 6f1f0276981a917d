use thiserror::Error;

/// Errors raised while building a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
