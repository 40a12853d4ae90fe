//! Loggers.
//!
//! - `instance` - independent `Logger` values
//! - `facade` - the process-wide logger and its free functions

pub mod facade;
pub mod instance;

pub use instance::*;
