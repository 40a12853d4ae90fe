//! Process-wide logger.
//!
//! A single optional `Logger` in a global slot, with explicit
//! `setup_logging` / `shutdown_logging` lifecycle and free functions that
//! forward to it. Every forwarding function requires the slot to be
//! populated and panics otherwise: using the façade outside its lifecycle
//! is a programming error.

use std::path::Path;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use super::instance::Logger;
use crate::config::LoggingConfig;
use crate::error::Result;
use crate::record::{Annotation, Level};

lazy_static! {
    static ref GLOBAL_LOGGER: RwLock<Option<Logger>> = RwLock::new(None);
}

const NOT_SET_UP: &str =
    "process-wide logger used before setup_logging() or after shutdown_logging()";

fn with_logger<R>(f: impl FnOnce(&Logger) -> R) -> R {
    let slot = GLOBAL_LOGGER.read();
    match slot.as_ref() {
        Some(logger) => f(logger),
        None => panic!("{}", NOT_SET_UP),
    }
}

fn with_logger_mut<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let mut slot = GLOBAL_LOGGER.write();
    match slot.as_mut() {
        Some(logger) => f(logger),
        None => panic!("{}", NOT_SET_UP),
    }
}

/// Install `logger` as the process-wide logger, returning the previous one.
fn install(logger: Logger) -> Option<Logger> {
    GLOBAL_LOGGER.write().replace(logger)
}

/// Create the process-wide logger with the default console routing
/// (Info, Warning and Debug to stdout, Error to stderr).
///
/// Replaces, and closes, any logger set up earlier.
pub fn setup_logging(debug_level: i32) {
    let previous = install(Logger::console(debug_level));
    ::log::info!(
        "LOGGING_SETUP debug_level={} replaced={}",
        debug_level,
        previous.is_some()
    );
    drop(previous);
}

/// Create the process-wide logger from configuration.
///
/// On error the current process-wide logger, if any, is left in place.
pub fn setup_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let logger = Logger::from_config(config)?;
    let previous = install(logger);
    ::log::info!(
        "LOGGING_SETUP debug_level={} files={} replaced={}",
        config.debug_level,
        config.files.len(),
        previous.is_some()
    );
    drop(previous);
    Ok(())
}

/// Release the process-wide logger, closing files it owned.
pub fn shutdown_logging() {
    let previous = GLOBAL_LOGGER.write().take();
    ::log::info!("LOGGING_SHUTDOWN active={}", previous.is_some());
    drop(previous);
}

/// Whether the process-wide logger is currently set up.
pub fn is_logging_active() -> bool {
    GLOBAL_LOGGER.read().is_some()
}

pub fn set_debug_level(debug_level: i32) {
    with_logger_mut(|logger| logger.set_debug_level(debug_level));
}

pub fn debug_level() -> i32 {
    with_logger(Logger::debug_level)
}

/// Add a file destination subscribed under every level.
pub fn add_file_destination(path: impl AsRef<Path>) -> Result<()> {
    add_file_destination_for(path, &Level::ALL)
}

/// Add a file destination subscribed under `levels`.
pub fn add_file_destination_for(path: impl AsRef<Path>, levels: &[Level]) -> Result<()> {
    with_logger_mut(|logger| logger.add_file_destination(path, levels))
}

pub fn log(level: Level, doing: &str, result: &str, annotations: &[Annotation]) {
    with_logger(|logger| logger.log(level, doing, result, annotations));
}

pub fn log_with(
    level: Level,
    doing: &str,
    result: &str,
    persistent: &[Annotation],
    adhoc: &[Annotation],
) {
    with_logger(|logger| logger.log_with(level, doing, result, persistent, adhoc));
}

pub fn info(doing: &str, result: &str, annotations: &[Annotation]) {
    log(Level::Info, doing, result, annotations);
}

pub fn info_with(doing: &str, result: &str, persistent: &[Annotation], adhoc: &[Annotation]) {
    log_with(Level::Info, doing, result, persistent, adhoc);
}

pub fn warning(doing: &str, result: &str, annotations: &[Annotation]) {
    log(Level::Warning, doing, result, annotations);
}

pub fn warning_with(doing: &str, result: &str, persistent: &[Annotation], adhoc: &[Annotation]) {
    log_with(Level::Warning, doing, result, persistent, adhoc);
}

pub fn error(doing: &str, result: &str, annotations: &[Annotation]) {
    log(Level::Error, doing, result, annotations);
}

pub fn error_with(doing: &str, result: &str, persistent: &[Annotation], adhoc: &[Annotation]) {
    log_with(Level::Error, doing, result, persistent, adhoc);
}

/// Log at `Level::Debug` if `debug_level` is within the process-wide threshold.
pub fn debug(debug_level: i32, doing: &str, result: &str, annotations: &[Annotation]) {
    with_logger(|logger| logger.debug(debug_level, doing, result, annotations));
}

pub fn debug_with(
    debug_level: i32,
    doing: &str,
    result: &str,
    persistent: &[Annotation],
    adhoc: &[Annotation],
) {
    with_logger(|logger| logger.debug_with(debug_level, doing, result, persistent, adhoc));
}
