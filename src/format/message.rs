//! Line formatting.
//!
//! Every message renders as exactly one line:
//!
//! ```text
//! <timestamp> <Level>: <doing>, <result>.[ Data {<name>: <value>, ...}]\n
//! ```
//!
//! No escaping is applied; text containing `, ` or `}` is written as given.

use chrono::{DateTime, Utc};

use super::timestamp::timestamp_at;
use crate::record::{Annotation, Level};

/// Render a message stamped with the current time.
pub fn format_message(
    level: Level,
    doing: &str,
    result: &str,
    annotations: &[Annotation],
) -> String {
    format_message_at(Utc::now(), level, doing, result, annotations)
}

/// Render a message stamped with `at`.
pub fn format_message_at(
    at: DateTime<Utc>,
    level: Level,
    doing: &str,
    result: &str,
    annotations: &[Annotation],
) -> String {
    let mut line = format!("{} {}: {}, {}.", timestamp_at(at), level, doing, result);

    if !annotations.is_empty() {
        let pairs: Vec<String> = annotations.iter().map(ToString::to_string).collect();
        line.push_str(" Data {");
        line.push_str(&pairs.join(", "));
        line.push('}');
    }

    line.push('\n');
    line
}
