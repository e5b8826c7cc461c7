//! Accumulated, non-fatal parse errors.

use serde::Serialize;

/// Error taxonomy. None of these abort a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ErrorKind {
    /// Unrecognized section, or too few columns for a record kind.
    Structural,
    /// A numeric or enumerated field failed to parse; a default was used.
    Field,
    /// A record names a node or link identifier that is not defined.
    Reference,
    /// An identifier was defined again within its namespace.
    Redefinition,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Structural,
        ErrorKind::Field,
        ErrorKind::Reference,
        ErrorKind::Redefinition,
    ];
}

/// One problem found while parsing, tied to its source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("line {line} {section}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 1-based line number.
    pub line: usize,
    /// Verbatim header of the section active at that line, or empty.
    pub section: String,
    pub message: String,
}

/// Failures of the file-level wrappers around the parser.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to read network file: {path}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
