//! Message record types.
//!
//! What a caller hands to the logger:
//! - `Level` - severity, doubling as the routing key
//! - `Annotation` / `Annotations` - ordered name/value context

pub mod annotation;
pub mod level;

pub use annotation::*;
pub use level::*;
