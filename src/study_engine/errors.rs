use thiserror::Error;

/// Contract violations of the deck engine. Callers prevent these by
/// construction; neither leaves the session modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid review policy: {0}")]
    Invalid(&'static str),
    #[error("unreadable review policy: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of the word-generation collaborator, passed to the caller as-is.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word source unavailable: {0}")]
    Unavailable(String),
    #[error("word source did not return a list of words")]
    NotAnArray,
    #[error("failed to parse the word list: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StudyError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
