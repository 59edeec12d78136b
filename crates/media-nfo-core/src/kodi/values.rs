//! Text conversions shared by the readers and writers.
//!
//! Parsers return `Result` so that callers can log what was dropped; the
//! readers always recover with a default value.

use chrono::{NaiveDate, NaiveDateTime};
use media_nfo_models::UniqueList;

use crate::error::{NfoError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rating value such as `"7.5"` or `"7,5"` (comma as decimal separator)
pub fn parse_rating_value(field: &'static str, text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| unparseable(field, text))
}

/// Vote count such as `"1234"`, `"1.234"` or `"1,234"` (thousands separators)
pub fn parse_vote_count(field: &'static str, text: &str) -> Result<u32> {
    let normalized: String = text.trim().chars().filter(|c| *c != ',' && *c != '.').collect();
    normalized.parse::<u32>().map_err(|_| unparseable(field, text))
}

pub fn parse_int(field: &'static str, text: &str) -> Result<i32> {
    text.trim().parse::<i32>().map_err(|_| unparseable(field, text))
}

/// Four digit year, mapped to the first of January
pub fn parse_year(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.len() != 4 || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = text.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT).ok()
}

/// Full timestamp, falling back to a date at midnight
pub fn parse_date_time_lenient(text: &str) -> Option<NaiveDateTime> {
    parse_date_time(text).or_else(|| parse_date(text).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

/// Split a delimited list (`"Action / Drama"`), trimming and skipping empty parts
pub fn split_list(text: &str, delimiter: char) -> impl Iterator<Item = &str> {
    text.split(delimiter).map(str::trim).filter(|part| !part.is_empty())
}

/// Flatten comma-separated name lists into one display string
///
/// Every occurrence is split on `,`, names are trimmed, repeated names keep
/// their first position, and the result is joined with `", "`.
pub fn join_names<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let names: UniqueList = texts
        .into_iter()
        .flat_map(|text| split_list(text, ','))
        .collect();
    names.join(", ")
}

pub fn format_float(value: f64) -> String {
    format!("{}", value)
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

pub fn format_year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y").to_string()).unwrap_or_default()
}

pub fn format_date_time(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn unparseable(field: &'static str, value: &str) -> NfoError {
    NfoError::UnparseableValue {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal_separator() {
        for (comma, dot) in [("7,5", "7.5"), ("8,0", "8.0"), ("0,25", "0.25"), (" 9,1 ", "9.1")] {
            assert_eq!(
                parse_rating_value("rating", comma).unwrap(),
                parse_rating_value("rating", dot).unwrap()
            );
        }
        assert_eq!(parse_rating_value("rating", "7,5").unwrap(), 7.5);
    }

    #[test]
    fn test_invalid_rating_value() {
        assert!(parse_rating_value("rating", "").is_err());
        assert!(parse_rating_value("rating", "abc").is_err());
        assert!(parse_rating_value("rating", "inf").is_err());
        assert!(parse_rating_value("rating", "7,5,1").is_err());
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_vote_count("votes", "1.234").unwrap(), 1234);
        assert_eq!(parse_vote_count("votes", "1,234").unwrap(), 1234);
        assert_eq!(parse_vote_count("votes", "1.234.567").unwrap(), 1_234_567);
        assert_eq!(parse_vote_count("votes", "42").unwrap(), 42);
        assert!(parse_vote_count("votes", "many").is_err());
        assert!(parse_vote_count("votes", "-3").is_err());
    }

    #[test]
    fn test_unparseable_error_names_field() {
        let err = parse_int("top250", "x").unwrap_err();
        assert_eq!(
            err,
            NfoError::UnparseableValue {
                field: "top250",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_dates() {
        assert_eq!(parse_year("1999"), NaiveDate::from_ymd_opt(1999, 1, 1));
        assert_eq!(parse_year("99"), None);
        assert_eq!(parse_date("1999-03-31"), NaiveDate::from_ymd_opt(1999, 3, 31));
        assert_eq!(parse_date("31.03.1999"), None);

        let full = parse_date_time_lenient("2020-05-01 20:15:30").unwrap();
        assert_eq!(format_date_time(Some(full)), "2020-05-01 20:15:30");
        let date_only = parse_date_time_lenient("2020-05-01").unwrap();
        assert_eq!(format_date_time(Some(date_only)), "2020-05-01 00:00:00");
        assert_eq!(parse_date_time("2020-05-01"), None);
        assert_eq!(parse_date_time_lenient("yesterday"), None);
    }

    #[test]
    fn test_join_names_flattens_and_dedupes() {
        let joined = join_names(["Lana Wachowski, Lilly Wachowski", " Lilly Wachowski ,", "Joel Silver"]);
        assert_eq!(joined, "Lana Wachowski, Lilly Wachowski, Joel Silver");
        assert_eq!(join_names(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_split_list() {
        let parts: Vec<&str> = split_list(" Action / Drama //  ", '/').collect();
        assert_eq!(parts, vec!["Action", "Drama"]);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_float(8.0), "8");
        assert_eq!(format_float(7.5), "7.5");
        assert_eq!(format_date(None), "");
        assert_eq!(format_year(NaiveDate::from_ymd_opt(1999, 3, 31)), "1999");
        assert_eq!(format_bool(false), "false");
    }
}
