use chrono::{DateTime, NaiveDateTime};

/// Parse an ISO 8601 date-time as sent by the backend.
///
/// Accepts values with or without an offset (`2024-03-01T18:30:00.000000Z`,
/// `2024-03-01T18:30:00`). The offset, when present, is dropped and the
/// wall-clock time kept. Anything unparseable yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
