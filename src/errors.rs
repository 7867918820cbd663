use thiserror::Error;

/// Error type for SQS consumer operations.
///
/// The consumer makes no distinction between transient and permanent
/// failures; both variants carry the underlying failure as display text.
/// The enum is `Clone + PartialEq` so callers (and tests) can compare
/// errors propagated through the queue-management helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqsConsumerError {
    /// A queue transport call failed (receive, delete or create).
    #[error("queue transport error: {0}")]
    Transport(String),

    /// A user-supplied message handler returned an error.
    #[error("message handler error: {0}")]
    Handler(String),
}

impl SqsConsumerError {
    /// Wraps a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        SqsConsumerError::Transport(message.into())
    }

    /// Wraps a handler failure.
    pub fn handler(message: impl Into<String>) -> Self {
        SqsConsumerError::Handler(message.into())
    }
}
