//! Date and time helpers for backend timestamps
//!
//! The backend sends timestamps as `YYYY-MM-DDTHH:MM[:SS]`. The slicing
//! helpers work on that layout without parsing it and never panic on
//! short input.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend timestamp
///
/// Accepts RFC 3339, `T` or space separated local timestamps with or
/// without seconds, and bare dates (midnight). Returns `None` otherwise.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Date and time parts of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeParts<'a> {
    /// Characters 0..10, `YYYY-MM-DD`
    pub date: &'a str,
    /// Characters 11..16, `HH:MM`
    pub time: &'a str,
}

/// Split a timestamp into its date and time parts
pub fn split_date_time(text: &str) -> DateTimeParts<'_> {
    DateTimeParts {
        date: slice(text, 0, 10),
        time: slice(text, 11, 16),
    }
}

/// Reformat the date part of a timestamp as `DD<sep>MM<sep>YYYY`
///
/// ```
/// use labkit::ui::format::format_dd_mm_yyyy;
///
/// assert_eq!(format_dd_mm_yyyy("2024-03-07T09:30", "/"), "07/03/2024");
/// ```
pub fn format_dd_mm_yyyy(text: &str, separator: &str) -> String {
    let mut parts = slice(text, 0, 10).split('-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}{separator}{month}{separator}{year}")
}

/// `HH:MM` part of a timestamp
pub fn hours_minutes(text: &str) -> &str {
    slice(text, 11, 16)
}

/// Character range `[start, end)` of `text`, clamped to its length
fn slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    let start = byte_at(start);
    let end = byte_at(end).max(start);
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    #[test_case("2024-03-07T09:30:15"; "t separator with seconds")]
    #[test_case("2024-03-07T09:30"; "t separator")]
    #[test_case("2024-03-07 09:30:15.250"; "space separator with fraction")]
    #[test_case("2024-03-07T09:30:15+01:00"; "rfc3339")]
    fn test_parse_date_time(text: &str) {
        let parsed = parse_date_time(text).unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.day(), 7);
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_parse_bare_date() {
        let parsed = parse_date_time("2024-03-07").unwrap();
        assert_eq!(parsed.hour(), 0);
    }

    #[test_case(""; "empty")]
    #[test_case("07/03/2024"; "italian layout")]
    #[test_case("2024-13-01T00:00"; "month out of range")]
    fn test_parse_date_time_rejects(text: &str) {
        assert!(parse_date_time(text).is_none());
    }

    #[test]
    fn test_split_date_time() {
        let parts = split_date_time("2024-03-07T09:30:15");
        assert_eq!(parts.date, "2024-03-07");
        assert_eq!(parts.time, "09:30");
    }

    #[test]
    fn test_split_short_input() {
        let parts = split_date_time("2024-03");
        assert_eq!(parts.date, "2024-03");
        assert_eq!(parts.time, "");
    }

    #[test]
    fn test_format_dd_mm_yyyy() {
        assert_eq!(format_dd_mm_yyyy("2024-03-07T09:30", "/"), "07/03/2024");
        assert_eq!(format_dd_mm_yyyy("2024-03-07", "-"), "07-03-2024");
        assert_eq!(format_dd_mm_yyyy("", "/"), "//");
    }

    #[test]
    fn test_hours_minutes() {
        assert_eq!(hours_minutes("2024-03-07T09:30:15"), "09:30");
        assert_eq!(hours_minutes("2024-03-07"), "");
    }

    #[test]
    fn test_slice_counts_chars() {
        assert_eq!(slice("àèìòù", 1, 3), "èì");
        assert_eq!(slice("abc", 5, 9), "");
    }
}
