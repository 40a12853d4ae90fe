//! Logger instances.
//!
//! A `Logger` owns a routing table and a debug verbosity threshold. Loggers
//! are independent of each other; the process-wide one in `facade` is just
//! a `Logger` kept in a global slot.

use std::path::Path;
use std::sync::Arc;

use crate::config::LoggingConfig;
use crate::destination::{Destination, FileDestination, StderrDestination, StdoutDestination};
use crate::error::Result;
use crate::format::format_message;
use crate::record::{combine, Annotation, Level};
use crate::routing::RoutingTable;

/// Levels the default console setup sends to standard output.
pub const DEFAULT_STDOUT_LEVELS: [Level; 3] = [Level::Info, Level::Warning, Level::Debug];

/// Levels the default console setup sends to standard error.
pub const DEFAULT_STDERR_LEVELS: [Level; 1] = [Level::Error];

/// Formats messages and dispatches them to subscribed destinations.
///
/// Logging takes `&self` and is safe to call from many threads at once;
/// registration and threshold changes take `&mut self`. Dropping the logger
/// releases its destination handles, closing files it held last.
#[derive(Debug, Default)]
pub struct Logger {
    routes: RoutingTable,
    debug_level: i32,
}

impl Logger {
    /// An empty logger: no destinations, debug threshold 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger with the default console routing: Info, Warning and Debug to
    /// standard output, Error to standard error.
    pub fn console(debug_level: i32) -> Self {
        let mut logger = Self::new();
        logger.add_stdout_destination(&DEFAULT_STDOUT_LEVELS);
        logger.add_stderr_destination(&DEFAULT_STDERR_LEVELS);
        logger.set_debug_level(debug_level);
        logger
    }

    /// Build a logger from configuration.
    ///
    /// Fails on the first file that cannot be opened; files opened before
    /// the failure are closed again when the partial logger is dropped.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        if !config.stdout_levels.is_empty() {
            logger.add_stdout_destination(&config.stdout_levels);
        }
        if !config.stderr_levels.is_empty() {
            logger.add_stderr_destination(&config.stderr_levels);
        }
        for file in &config.files {
            logger.add_file_destination(&file.path, &file.levels)?;
        }
        logger.set_debug_level(config.debug_level);
        Ok(logger)
    }

    /// Subscribe a caller-built destination under `levels`.
    ///
    /// The same `Arc` may be registered with several loggers; the destination
    /// lives until the last of them releases it.
    pub fn add_destination(&mut self, destination: Arc<dyn Destination>, levels: &[Level]) {
        log::debug!(
            "DESTINATION_ADDED kind={} levels={:?}",
            destination.kind(),
            levels
        );
        self.routes.subscribe(destination, levels);
    }

    pub fn add_stdout_destination(&mut self, levels: &[Level]) {
        self.add_destination(Arc::new(StdoutDestination::new()), levels);
    }

    pub fn add_stderr_destination(&mut self, levels: &[Level]) {
        self.add_destination(Arc::new(StderrDestination::new()), levels);
    }

    /// Open `path` and subscribe it under `levels`.
    ///
    /// On failure nothing is registered.
    pub fn add_file_destination(&mut self, path: impl AsRef<Path>, levels: &[Level]) -> Result<()> {
        let destination = FileDestination::open(path)?;
        self.add_destination(Arc::new(destination), levels);
        Ok(())
    }

    pub fn set_debug_level(&mut self, debug_level: i32) {
        if debug_level != self.debug_level {
            log::debug!(
                "DEBUG_LEVEL_CHANGED from={} to={}",
                self.debug_level,
                debug_level
            );
        }
        self.debug_level = debug_level;
    }

    pub fn debug_level(&self) -> i32 {
        self.debug_level
    }

    pub fn routes(&self) -> &RoutingTable {
        &self.routes
    }

    /// Format a message and write it to every destination under `level`.
    pub fn log(&self, level: Level, doing: &str, result: &str, annotations: &[Annotation]) {
        let line = format_message(level, doing, result, annotations);
        self.routes.dispatch(level, &line);
    }

    /// [`Logger::log`] with `persistent` followed by `adhoc` annotations.
    pub fn log_with(
        &self,
        level: Level,
        doing: &str,
        result: &str,
        persistent: &[Annotation],
        adhoc: &[Annotation],
    ) {
        self.log(level, doing, result, &combine(persistent, adhoc));
    }

    /// Log at `Level::Debug` if `debug_level` is within the threshold.
    pub fn debug(&self, debug_level: i32, doing: &str, result: &str, annotations: &[Annotation]) {
        if self.debug_enabled(debug_level) {
            self.log(Level::Debug, doing, result, annotations);
        }
    }

    pub fn debug_with(
        &self,
        debug_level: i32,
        doing: &str,
        result: &str,
        persistent: &[Annotation],
        adhoc: &[Annotation],
    ) {
        if self.debug_enabled(debug_level) {
            self.log_with(Level::Debug, doing, result, persistent, adhoc);
        }
    }

    pub fn debug_enabled(&self, debug_level: i32) -> bool {
        debug_level <= self.debug_level
    }

    pub fn info(&self, doing: &str, result: &str, annotations: &[Annotation]) {
        self.log(Level::Info, doing, result, annotations);
    }

    pub fn warning(&self, doing: &str, result: &str, annotations: &[Annotation]) {
        self.log(Level::Warning, doing, result, annotations);
    }

    pub fn error(&self, doing: &str, result: &str, annotations: &[Annotation]) {
        self.log(Level::Error, doing, result, annotations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;
    #[cfg(target_os = "linux")]
    use crate::destination::file::tests::open_handles;
    use parking_lot::Mutex;
    use regex::Regex;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Default)]
    struct Capture {
        lines: Mutex<Vec<String>>,
    }

    impl Capture {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Destination for Capture {
        fn write(&self, line: &str) {
            self.lines.lock().push(line.to_string());
        }
    }

    /// Split a line into its timestamp and the rest, checking the timestamp shape.
    fn strip_timestamp(line: &str) -> &str {
        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").unwrap();
        let (ts, rest) = line.split_once(' ').unwrap();
        assert!(pattern.is_match(ts), "bad timestamp in {:?}", line);
        rest
    }

    fn capture_logger(levels: &[Level]) -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let mut logger = Logger::new();
        logger.add_destination(capture.clone(), levels);
        (logger, capture)
    }

    #[test]
    fn test_new_logger_is_empty() {
        let logger = Logger::new();
        assert_eq!(logger.debug_level(), 0);
        assert!(logger.routes().is_empty());
    }

    #[test]
    fn test_log_with_annotations() {
        let (logger, capture) = capture_logger(&Level::ALL);
        let data = crate::annotations!["1" => "2", "3" => "4"];

        logger.info("Starting application", "startup successful", &data);

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            strip_timestamp(&lines[0]),
            "Info: Starting application, startup successful. Data {1: 2, 3: 4}\n"
        );
    }

    #[test]
    fn test_log_without_annotations() {
        let (logger, capture) = capture_logger(&Level::ALL);

        logger.warning("Starting application but something weird happened", "it might break", &[]);

        assert_eq!(
            strip_timestamp(&capture.lines()[0]),
            "Warning: Starting application but something weird happened, it might break.\n"
        );
    }

    #[test]
    fn test_unsubscribed_level_is_dropped() {
        let (logger, capture) = capture_logger(&[Level::Error]);

        logger.info("Testing logging", "ignored", &[]);
        logger.error("Testing logging", "successful", &[]);

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(strip_timestamp(&lines[0]), "Error: Testing logging, successful.\n");
    }

    #[test]
    fn test_log_with_concatenates_persistent_first() {
        let (logger, capture) = capture_logger(&Level::ALL);
        let persistent = crate::annotations!["1" => "2", "3" => "4"];
        let adhoc = crate::annotations!["foo" => "bar", "Kung Fu" => "Hustle"];

        logger.log_with(
            Level::Info,
            "Starting application",
            "startup successful",
            &persistent,
            &adhoc,
        );

        assert_eq!(
            strip_timestamp(&capture.lines()[0]),
            "Info: Starting application, startup successful. Data {1: 2, 3: 4, foo: bar, Kung Fu: Hustle}\n"
        );
    }

    #[test]
    fn test_debug_gate() {
        let (mut logger, capture) = capture_logger(&Level::ALL);

        logger.debug(1, "Useful debug message", "shouldn't be displayed as debug level is 0", &[]);
        assert!(capture.lines().is_empty());

        logger.debug(0, "Useful debug message", "level zero passes", &[]);
        assert_eq!(capture.lines().len(), 1);

        logger.set_debug_level(1);
        logger.debug(1, "Useful debug message", "should be displayed", &[]);
        logger.debug(2, "Useful debug message", "still too verbose", &[]);

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            strip_timestamp(&lines[1]),
            "Debug: Useful debug message, should be displayed.\n"
        );
    }

    #[test]
    fn test_debug_gate_does_not_affect_other_levels() {
        let (mut logger, capture) = capture_logger(&Level::ALL);
        logger.set_debug_level(-5);

        logger.info("Testing", "not gated", &[]);
        logger.log(Level::Debug, "Testing", "direct debug-level log is not gated", &[]);
        logger.debug(0, "Testing", "gated out", &[]);

        assert_eq!(capture.lines().len(), 2);
    }

    #[test]
    fn test_debug_passes_gate_then_routes() {
        let (mut logger, capture) = capture_logger(&[Level::Info]);
        logger.set_debug_level(3);

        logger.debug(1, "Testing", "no debug subscription", &[]);
        assert!(capture.lines().is_empty());
    }

    #[test]
    fn test_debug_with_concatenates() {
        let (logger, capture) = capture_logger(&Level::ALL);
        let persistent = crate::annotations!["a" => "1"];
        let adhoc = crate::annotations!["b" => "2"];

        logger.debug_with(0, "Testing", "combined", &persistent, &adhoc);

        assert_eq!(
            strip_timestamp(&capture.lines()[0]),
            "Debug: Testing, combined. Data {a: 1, b: 2}\n"
        );
    }

    #[test]
    fn test_individual_loggers_do_not_share_state() {
        let (mut first, first_capture) = capture_logger(&Level::ALL);
        let (second, second_capture) = capture_logger(&Level::ALL);

        first.set_debug_level(4);
        assert_eq!(second.debug_level(), 0);

        first.info("Testing logging", "successful", &[]);
        second.error("Testing logging", "successful", &[]);

        assert_eq!(
            strip_timestamp(&first_capture.lines()[0]),
            "Info: Testing logging, successful.\n"
        );
        assert_eq!(
            strip_timestamp(&second_capture.lines()[0]),
            "Error: Testing logging, successful.\n"
        );
        assert_eq!(first_capture.lines().len(), 1);
        assert_eq!(second_capture.lines().len(), 1);
    }

    #[test]
    fn test_console_routing() {
        let logger = Logger::console(2);
        assert_eq!(logger.debug_level(), 2);
        let routes = logger.routes();
        for level in DEFAULT_STDOUT_LEVELS {
            assert_eq!(routes.route_count(level), 1);
            assert_eq!(routes.destinations(level)[0].kind().as_str(), "stdout");
        }
        assert_eq!(routes.route_count(Level::Error), 1);
        assert_eq!(routes.destinations(Level::Error)[0].kind().as_str(), "stderr");
    }

    #[test]
    fn test_file_destination_routing_and_close() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");

        let mut logger = Logger::new();
        logger
            .add_file_destination(&path, &[Level::Info, Level::Error])
            .unwrap();

        logger.info("Testing", "to file", &[]);
        logger.warning("Testing", "not subscribed", &[]);
        logger.error("Testing", "also to file", &[]);
        #[cfg(target_os = "linux")]
        assert_eq!(open_handles(&path), 1);

        drop(logger);
        #[cfg(target_os = "linux")]
        assert_eq!(open_handles(&path), 0);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(strip_timestamp(lines[0]), "Info: Testing, to file.");
        assert_eq!(strip_timestamp(lines[1]), "Error: Testing, also to file.");
    }

    #[test]
    fn test_drop_releases_file_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("release.log");

        let file = Arc::new(FileDestination::open(&path).unwrap());
        let released = Arc::downgrade(&file);

        let mut logger = Logger::new();
        logger.add_destination(file, &Level::ALL);
        logger.info("Testing", "held by logger", &[]);
        assert!(released.upgrade().is_some());

        drop(logger);
        assert!(released.upgrade().is_none());
    }

    #[test]
    fn test_failed_file_destination_leaves_no_route() {
        let mut logger = Logger::new();
        assert!(logger.add_file_destination("", &Level::ALL).is_err());
        assert!(logger.routes().is_empty());
    }

    #[test]
    fn test_shared_destination_outlives_first_logger() {
        let capture = Arc::new(Capture::default());

        let mut first = Logger::new();
        let mut second = Logger::new();
        first.add_destination(capture.clone(), &Level::ALL);
        second.add_destination(capture.clone(), &[Level::Info]);
        assert_eq!(Arc::strong_count(&capture), 6);

        drop(first);
        assert_eq!(Arc::strong_count(&capture), 2);

        second.info("Testing", "still alive", &[]);
        assert_eq!(capture.lines().len(), 1);

        drop(second);
        assert_eq!(Arc::strong_count(&capture), 1);
    }

    #[test]
    fn test_from_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.log");
        let config = LoggingConfig {
            debug_level: 2,
            stdout_levels: Vec::new(),
            stderr_levels: Vec::new(),
            files: vec![FileConfig {
                path: path.clone(),
                levels: vec![Level::Warning],
            }],
        };

        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.debug_level(), 2);
        assert_eq!(logger.routes().route_count(Level::Warning), 1);
        assert_eq!(logger.routes().route_count(Level::Info), 0);

        logger.warning("Configured", "written", &[]);
        drop(logger);
        assert!(fs::read_to_string(&path).unwrap().ends_with(" Warning: Configured, written.\n"));
    }

    #[test]
    fn test_from_config_fails_on_bad_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.log");
        let config = LoggingConfig {
            files: vec![
                FileConfig {
                    path: good.clone(),
                    levels: Level::ALL.to_vec(),
                },
                FileConfig {
                    path: dir.path().join("missing").join("bad.log"),
                    levels: Level::ALL.to_vec(),
                },
            ],
            ..LoggingConfig::default()
        };

        assert!(Logger::from_config(&config).is_err());
        // Created, then closed again with the partial logger.
        assert!(good.exists());
        #[cfg(target_os = "linux")]
        assert_eq!(open_handles(&good), 0);
    }
}
