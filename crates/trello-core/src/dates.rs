//! Due-date normalisation.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::error::{Result, TrelloError};

/// Normalises a user-supplied due date to an RFC 3339 UTC timestamp.
///
/// Accepts a full timestamp with offset (`2026-10-18T17:00:00+02:00`) or a
/// civil date (`2026-10-18`), which is taken as midnight UTC.
///
/// # Errors
///
/// Returns `TrelloError::InvalidArgument` if `value` is neither.
pub fn parse_due(value: &str) -> Result<String> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp.to_string());
    }

    let invalid = |reason: String| TrelloError::invalid_argument("due").with_reason(reason);

    let date: Date = value
        .parse()
        .map_err(|_| invalid(format!("'{value}' is neither a timestamp nor a date")))?;
    let zoned = date
        .to_zoned(TimeZone::UTC)
        .map_err(|e| invalid(format!("'{value}': {e}")))?;
    Ok(zoned.timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_normalised_to_utc() {
        assert_eq!(
            parse_due("2026-10-18T17:00:00+02:00").unwrap(),
            "2026-10-18T15:00:00Z"
        );
    }

    #[test]
    fn test_date_becomes_midnight_utc() {
        assert_eq!(parse_due("2026-10-18").unwrap(), "2026-10-18T00:00:00Z");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            parse_due("next tuesday"),
            Err(TrelloError::InvalidArgument { .. })
        ));
    }
}
