//! Shared helpers for integration tests.

#![cfg(target_os = "linux")]

use std::fs;
use std::path::Path;

/// Number of this process's open descriptors pointing at `path`.
pub fn open_handles(path: &Path) -> usize {
    let target = match fs::canonicalize(path) {
        Ok(target) => target,
        Err(_) => return 0,
    };
    fs::read_dir("/proc/self/fd")
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| fs::read_link(entry.path()).ok())
                .filter(|link| *link == target)
                .count()
        })
        .unwrap_or(0)
}
