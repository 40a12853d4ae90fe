//! UTC timestamps for log lines.

use chrono::{DateTime, Utc};

/// ISO-8601, second precision, always UTC with a literal `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current wall-clock time formatted as `YYYY-MM-DDThh:mm:ssZ`.
pub fn timestamp() -> String {
    timestamp_at(Utc::now())
}

/// Format a given instant the same way [`timestamp`] formats "now".
pub fn timestamp_at(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
