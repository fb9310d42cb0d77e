use std::path::PathBuf;
use thiserror::Error;

/// Why a single log line was rejected. Never fatal to an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("line does not match the netmon log grammar")]
    NoMatch,

    #[error("invalid timestamp '{value}'")]
    Timestamp { value: String },

    #[error("field '{field}' is not an integer: '{value}'")]
    Integer { field: &'static str, value: String },

    #[error("field '{field}' is neither a decimal nor 'null': '{value}'")]
    Rtt { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid {bound} time '{input}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimeRange {
        bound: &'static str,
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to read log file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
