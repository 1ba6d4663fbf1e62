use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats an API timestamp as `dd.mm.yyyy hh:mm`.
///
/// Accepts RFC 3339 and zone-less timestamps; anything else is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format("%d.%m.%Y %H:%M").to_string();
    }
    format_date(raw)
}

/// Formats the date part of an API timestamp as `dd.mm.yyyy`
pub fn format_date(raw: &str) -> String {
    let date = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
