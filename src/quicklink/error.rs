use thiserror::Error;

/// Structural defects found while parsing a single placeholder.
///
/// These never abort a call. The processor records their text in
/// `ProcessResult::errors` and the validator reports them as diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("argument placeholder {{{0}}} is missing a name attribute")]
    MissingName(String),

    #[error("malformed placeholder {{{0}}}: unbalanced quote")]
    UnterminatedQuote(String),
}

#[derive(Error, Debug)]
pub enum QuicklinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, QuicklinkError>;
