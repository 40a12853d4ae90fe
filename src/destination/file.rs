//! File destination.
//!
//! Owns the only handle to its file. The handle is opened (created or
//! truncated) before the destination exists and is closed when the last
//! `Arc` to the destination is dropped.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::sink::{Destination, DestinationKind};
use crate::error::{LoggingError, Result};

/// Writes lines to a file on local disk, flushing after every line.
#[derive(Debug)]
pub struct FileDestination {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileDestination {
    /// Open `path` for writing, truncating any existing content.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            log::warn!(
                "DESTINATION_OPEN_FAILED kind=file path={} error={}",
                path.display(),
                source
            );
            LoggingError::DestinationOpen {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Destination for FileDestination {
    fn write(&self, line: &str) {
        let mut file = self.file.lock();
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            log::warn!(
                "DESTINATION_WRITE_FAILED kind=file path={} error={}",
                self.path.display(),
                e
            );
        }
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::File
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        log::debug!("DESTINATION_CLOSED kind=file path={}", self.path.display());
    }
}
