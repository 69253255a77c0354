use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::domain::operation::Operation;

/// Format used for the invocation timestamp shared by every stored page.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// JSON content type recorded on every stored page.
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Deterministic object key for one fetched page: `{prefix}{operation}_{timestamp}_{page}.json`.
pub fn blob_key(prefix: &str, operation: Operation, timestamp: &str, page: u32) -> String {
    format!("{prefix}{operation}_{timestamp}_{page}.json")
}

/// Read the declared page count from a search response, if present.
///
/// Whole-number floats such as `3.0` count as integers.
pub fn declared_total_pages(response: &Value) -> Option<u32> {
    let declared = response.get("totalPages")?;
    if let Some(n) = declared.as_u64() {
        return u32::try_from(n).ok();
    }
    let f = declared.as_f64()?;
    if f.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&f) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = f as u32;
    Some(whole)
}
