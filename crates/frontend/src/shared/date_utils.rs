//! Date formatting for backend timestamps.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Backend timestamp ("2024-03-15T14:02:26", optional fraction and offset)
/// as "15/03/2024 14:02". Unparseable input is returned unchanged.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    value.to_string()
}

/// `None` or blank renders as a dash.
pub fn format_optional(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}
