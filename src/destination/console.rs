//! Standard output and standard error destinations.
//!
//! Each line is written while holding the stream's process-wide lock, so
//! lines from different threads never interleave.

use std::io::{self, Write};

use super::sink::{Destination, DestinationKind};

/// Writes lines to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl Destination for StdoutDestination {
    fn write(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(line.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("DESTINATION_WRITE_FAILED kind=stdout error={}", e);
        }
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Stdout
    }
}

/// Writes lines to the process's standard error.
#[derive(Debug, Default)]
pub struct StderrDestination;

impl StderrDestination {
    pub fn new() -> Self {
        Self
    }
}

impl Destination for StderrDestination {
    fn write(&self, line: &str) {
        let mut err = io::stderr().lock();
        // Failures are dropped: `log` output usually goes to stderr as well.
        let _ = err.write_all(line.as_bytes()).and_then(|_| err.flush());
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Stderr
    }
}
