//! The destination contract.

use std::fmt;

/// Which kind of sink a destination writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    Stdout,
    Stderr,
    File,
    /// Caller-supplied implementation.
    Custom,
}

impl DestinationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationKind::Stdout => "stdout",
            DestinationKind::Stderr => "stderr",
            DestinationKind::File => "file",
            DestinationKind::Custom => "custom",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sink accepting fully rendered log lines.
///
/// Destinations are shared between routing entries (and between loggers)
/// behind an `Arc`, so `write` takes `&self`. Implementations must write
/// each line as one uninterrupted unit: concurrent callers may see their
/// lines in any order, but never spliced together. Write failures are not
/// reported to the caller.
pub trait Destination: Send + Sync + fmt::Debug {
    fn write(&self, line: &str);

    fn kind(&self) -> DestinationKind {
        DestinationKind::Custom
    }
}
