//! linelog - leveled, annotated line logging
//!
//! Callers emit timestamped messages at one of four levels, optionally with
//! ordered name/value annotations. Each message is rendered as a single
//! human-readable line and written to every destination subscribed under
//! its level. The implementation prioritizes:
//!
//! 1. **Stable output** - a fixed line format that tooling can compare verbatim
//! 2. **Whole lines** - concurrent writers never splice a line on a destination
//! 3. **Deterministic release** - a file closes when its last logger lets go
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `record` - levels and annotations
//! - `format` - timestamps and line rendering
//! - `destination` - stdout, stderr and file sinks
//! - `routing` - level-to-destination routing table
//! - `logger` - `Logger` instances and the process-wide façade
//! - `config` - serde-backed logger configuration
//! - `error` - error types
//!
//! ## Example
//!
//! ```
//! use linelog::{annotations, Level, Logger};
//!
//! let mut logger = Logger::new();
//! logger.add_stdout_destination(&Level::ALL);
//! logger.info(
//!     "Starting application",
//!     "startup successful",
//!     &annotations!["1" => "2", "3" => "4"],
//! );
//!
//! linelog::setup_logging(0);
//! linelog::warning("Starting application but something weird happened", "it might break", &[]);
//! linelog::shutdown_logging();
//! ```

pub mod config;
pub mod destination;
pub mod error;
pub mod format;
pub mod logger;
pub mod record;
pub mod routing;

pub use config::{FileConfig, LoggingConfig};
pub use destination::{
    Destination, DestinationKind, FileDestination, StderrDestination, StdoutDestination,
};
pub use error::{LoggingError, Result};
pub use format::{format_message, format_message_at, timestamp, timestamp_at, TIMESTAMP_FORMAT};
pub use logger::facade::{
    add_file_destination, add_file_destination_for, debug, debug_level, debug_with, error,
    error_with, info, info_with, is_logging_active, log, log_with, set_debug_level, setup_logging,
    setup_logging_with_config, shutdown_logging, warning, warning_with,
};
pub use logger::Logger;
pub use record::{combine, Annotation, Annotations, Level};
pub use routing::RoutingTable;
