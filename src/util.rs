// Parsing and formatting helpers.
//
// This module centralizes all the "dirty" CSV value handling so the rest
// of the pipeline can assume clean, typed values.
use chrono::{NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

// The city export writes `MM/DD/YYYY` dates with `H:MM` times; older
// extracts use ISO dates, and seconds show up in some exports.
const DATETIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a string-like value into a non-negative count while being
/// forgiving about formatting issues that are common in CSV exports.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Accepts float renderings such as `"2.0"` and truncates them.
/// - Returns `None` for anything that cannot be safely parsed, including
///   negative numbers; the caller decides the default.
pub fn parse_count_safe(s: Option<&str>) -> Option<u64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(',', "");
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v as u64),
        _ => None,
    }
}

/// Trim a free-text field, mapping empty or missing values to `None`.
pub fn clean_text(s: Option<&str>) -> Option<String> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.to_string())
}

/// Combine raw date and time cells into a single timestamp.
///
/// The two cells are concatenated with one space and tried against each
/// known format in order. A row with a valid date but an empty time cell
/// still parses, at midnight. Anything else returns `None` and the caller
/// drops the row.
pub fn parse_datetime_safe(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    let time = time.trim();
    if date.is_empty() {
        return None;
    }
    if time.is_empty() {
        return DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    }
    let combined = format!("{} {}", date, time);
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&combined, fmt).ok())
}

/// Display name for a calendar month number (1–12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `9,855 records`).
    n.to_formatted_string(&Locale::en)
}
