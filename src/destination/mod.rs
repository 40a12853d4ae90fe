//! Output destinations.
//!
//! A destination accepts fully rendered lines:
//! - `StdoutDestination` / `StderrDestination` - console streams
//! - `FileDestination` - a file on local disk, opened at construction
//!
//! Callers may implement `Destination` for their own sinks.

pub mod console;
pub mod file;
pub mod sink;

pub use console::*;
pub use file::*;
pub use sink::*;
