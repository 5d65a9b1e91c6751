use chrono::NaiveDateTime;

/// The date-time format used by issue-tracker CSV exports, e.g. `01/Jan/24 10:00 AM`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%b/%y %I:%M %p";

/// Parse a timestamp cell, returning `None` for empty or unparseable text.
#[must_use]
pub fn parse_timestamp(text: &str, format: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(text, format).ok()
}

/// Format a timestamp back into the textual form used by the source table.
#[must_use]
pub fn format_timestamp(timestamp: &NaiveDateTime, format: &str) -> String {
    timestamp.format(format).to_string()
}
