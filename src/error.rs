use std::path::PathBuf;
use thiserror::Error;

/// Everything that can fail during token setup, from reading the flat config
/// through talking to the token-generator worker and persisting the result.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("config file '{0}' not found")]
    NotFound(PathBuf),

    #[error("invalid config line {line}: {content}")]
    InvalidFormat { line: usize, content: String },

    #[error("required config key '{0}' is missing")]
    MissingField(&'static str),

    #[error("request timed out")]
    Timeout,

    #[error("connection error")]
    Connection,

    #[error("{0}")]
    Transport(String),

    #[error("no response data")]
    EmptyResponse,

    #[error("unexpected response from token generator: {0}")]
    UnexpectedResponse(serde_json::Value),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
