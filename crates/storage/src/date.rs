//! Deadline parsing.

use chrono::{NaiveDate, ParseError};

/// Accepted date layouts, tried in order.
const FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Parse a deadline.
///
/// Blank input means "no deadline". Supports ISO (`2025-01-31`), slashed ISO
/// (`2025/01/31`) and the European `31.01.2025` and `31/01/2025`.
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let mut last_err = None;
    for format in FORMATS {
        match NaiveDate::parse_from_str(value, format) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => last_err = Some(e),
        }
    }

    match last_err {
        Some(e) => Err(e),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(parse_date("").unwrap(), None);
        assert_eq!(parse_date("   ").unwrap(), None);
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(parse_date("2025-01-31").unwrap(), ymd(2025, 1, 31));
        assert_eq!(parse_date("2025/01/31").unwrap(), ymd(2025, 1, 31));
        assert_eq!(parse_date("31.01.2025").unwrap(), ymd(2025, 1, 31));
        assert_eq!(parse_date("31/01/2025").unwrap(), ymd(2025, 1, 31));
        assert_eq!(parse_date(" 2025-02-03 ").unwrap(), ymd(2025, 2, 3));
    }

    #[test]
    fn test_unknown_format_fails() {
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("01-31-2025").is_err());
    }
}
