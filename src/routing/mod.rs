//! Level-to-destination routing.
//!
//! Decides where each message goes:
//! - every destination subscribed under the message's level
//! - in subscription order
//! - nowhere, if nothing is subscribed under that level

pub mod table;

pub use table::*;
