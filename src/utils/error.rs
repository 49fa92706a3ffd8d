use thiserror::Error;
use std::io;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: face element must contain at least 3 vertices, found {found}")]
    MalformedFace { line: usize, found: usize },

    #[error("must have at least 3 vertices to triangulate, got {count}")]
    Triangulation { count: usize },

    #[error("line {line}: invalid number '{token}'")]
    NumericFormat { line: usize, token: String },

    #[error("line {line}: '{directive}' expects {expected} value(s), found {found}")]
    MissingValue {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: index {raw} reaches before the start of {len} element(s)")]
    IndexOutOfRange { line: usize, raw: i64, len: usize },
}

impl ParseError {
    /// Source line the error was raised on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedFace { line, .. }
            | ParseError::NumericFormat { line, .. }
            | ParseError::MissingValue { line, .. }
            | ParseError::IndexOutOfRange { line, .. } => Some(*line),
            ParseError::Triangulation { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request failed with status {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RetrievalError {
    /// HTTP status of the failed request, `0` when the failure never reached a response.
    pub fn status(&self) -> u16 {
        match self {
            RetrievalError::Status { status, .. } => *status,
            RetrievalError::Transport(e) => e.status().map_or(0, |s| s.as_u16()),
            RetrievalError::Io(_) => 0,
        }
    }

    pub fn status_text(&self) -> String {
        match self {
            RetrievalError::Status { status_text, .. } => status_text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
