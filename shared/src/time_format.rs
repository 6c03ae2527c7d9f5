use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a rating sample date.
///
/// Accepts RFC 3339, the PostgreSQL text form `YYYY-MM-DD HH:MM:SS+00`, and
/// bare `YYYY-MM-DD` dates (taken as midnight UTC).
pub fn parse_rating_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let mut normalized = raw.replace(' ', "T");
    if normalized.len() >= 3 {
        let tail = &normalized.as_bytes()[normalized.len() - 3..];
        if (tail[0] == b'+' || tail[0] == b'-') && tail[1].is_ascii_digit() && tail[2].is_ascii_digit()
        {
            normalized.push_str(":00");
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// X-axis label such as `Sep 4`. Unparseable input is shown as-is.
pub fn format_axis_date(raw: &str) -> String {
    parse_rating_date(raw)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Tooltip text for a rating value.
pub fn format_rating(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Match length as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_game_length(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    let mut out = String::with_capacity(8);
    let _ = if hours > 0 {
        write!(out, "{hours}:{minutes:02}:{seconds:02}")
    } else {
        write!(out, "{minutes}:{seconds:02}")
    };
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(format_axis_date("2024-09-04T17:00:00Z"), "Sep 4");
    }

    #[test]
    fn formats_fractional_utc_marker() {
        assert_eq!(format_axis_date("2024-12-25T00:00:00.000Z"), "Dec 25");
    }

    #[test]
    fn formats_postgres_text() {
        assert_eq!(format_axis_date("2024-01-09 08:30:00.123+00"), "Jan 9");
    }

    #[test]
    fn formats_bare_date() {
        assert_eq!(format_axis_date("2025-03-01"), "Mar 1");
    }

    #[test]
    fn passes_through_garbage() {
        assert_eq!(format_axis_date("week 12"), "week 12");
        assert_eq!(format_axis_date(""), "");
    }

    #[test]
    fn formats_game_lengths() {
        assert_eq!(format_game_length(0), "0:00");
        assert_eq!(format_game_length(754), "12:34");
        assert_eq!(format_game_length(3661), "1:01:01");
        assert_eq!(format_game_length(-5), "0:00");
    }

    #[test]
    fn rounds_ratings() {
        assert_eq!(format_rating(1432.5), "1433");
        assert_eq!(format_rating(0.0), "0");
        assert_eq!(format_rating(-12.4), "-12");
    }
}
