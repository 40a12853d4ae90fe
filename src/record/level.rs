//! Message severity levels.
//!
//! Levels are routing keys, not a ranking: there is no ordering between them
//! and no threshold filtering by level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggingError;

/// Severity of a log message, and the key destinations subscribe under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(alias = "info")]
    Info,
    #[serde(alias = "debug")]
    Debug,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "error")]
    Error,
}

impl Level {
    /// Every level, the default subscription set for a new destination.
    pub const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Error, Level::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(LoggingError::UnknownLevel(s.to_string())),
        }
    }
}
