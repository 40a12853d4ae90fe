//! Logger configuration.
//!
//! The defaults describe the process-wide console setup: Info, Warning and
//! Debug to stdout, Error to stderr, no files, debug threshold 0.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logger::{DEFAULT_STDERR_LEVELS, DEFAULT_STDOUT_LEVELS};
use crate::record::Level;

fn all_levels() -> Vec<Level> {
    Level::ALL.to_vec()
}

/// A file destination to open when building a logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub path: PathBuf,
    #[serde(default = "all_levels")]
    pub levels: Vec<Level>,
}

/// How to build a logger: console routing, files and debug threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub debug_level: i32,
    pub stdout_levels: Vec<Level>,
    pub stderr_levels: Vec<Level>,
    pub files: Vec<FileConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug_level: 0,
            stdout_levels: DEFAULT_STDOUT_LEVELS.to_vec(),
            stderr_levels: DEFAULT_STDERR_LEVELS.to_vec(),
            files: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_debug_level(mut self, debug_level: i32) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Add a file subscribed under every level.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(FileConfig {
            path: path.into(),
            levels: all_levels(),
        });
        self
    }
}
