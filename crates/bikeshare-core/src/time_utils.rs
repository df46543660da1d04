use chrono::{DateTime, Month, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

// ── Start-time parsing ────────────────────────────────────────────────────────

/// Naive date-time patterns tried in order after RFC 3339.
///
/// Ambiguous slash dates are read month-first.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a trip `Start Time` / `End Time` cell into a wall-clock timestamp.
///
/// Offsets in RFC 3339 input are dropped; the local wall-clock reading is
/// what the hour-of-day and weekday statistics use.
///
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_trip_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    debug!("could not parse trip timestamp \"{}\"", s);
    None
}

// ── Calendar names ────────────────────────────────────────────────────────────

/// Full English weekday name, e.g. `"Wednesday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based month number.
///
/// Out-of-range numbers yield `"Unknown"`.
pub fn month_name(number: u32) -> &'static str {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
