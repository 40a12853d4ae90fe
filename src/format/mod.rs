//! Text formatting for log lines.

pub mod message;
pub mod timestamp;

pub use message::*;
pub use timestamp::*;
