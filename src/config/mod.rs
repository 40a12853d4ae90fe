//! Configuration module.
//!
//! Programmatic or JSON description of a logger's destinations.

pub mod settings;

pub use settings::*;
