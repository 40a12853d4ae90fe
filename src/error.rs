//! Error types.
//!
//! The only runtime error boundary is destination construction. Everything
//! downstream of a successfully opened destination is fail-silent.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the logging facility.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A file destination could not be opened for writing.
    #[error("couldn't open log file {}: {source}", .path.display())]
    DestinationOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A level name did not match any known level.
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    /// A JSON configuration document could not be parsed.
    #[error("invalid logging configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoggingError>;
