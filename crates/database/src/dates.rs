use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};
use core_types::CoreError;

/// The canonical date key format. Zero-padded ISO-8601, so lexicographic
/// comparison of two keys agrees with date ordering.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parses a free-form date boundary into a calendar date.
///
/// The three market tables disagree on date representation: `crypto_prices`
/// stores bare `YYYY-MM-DD` text, while `oil_prices` and `stock_prices`
/// carry full timestamps. Callers may also hand us either form. Timestamps
/// are truncated to their date portion; anything unrecognizable is an
/// `InvalidDateFormat` error and must not reach a query.
pub fn parse_date_key(input: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT) {
        return Ok(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    Err(CoreError::InvalidDateFormat(input.to_string()))
}

/// Normalizes a free-form date boundary to the canonical `YYYY-MM-DD` key.
pub fn canonical_date_key(input: &str) -> Result<String, CoreError> {
    Ok(date_key(parse_date_key(input)?))
}

/// Formats a date as the canonical key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// A date range anchored at a reference point and extending backward.
///
/// Windows anchor to the most recent date present in the queried table, not
/// to wall-clock time; a store whose data ends months ago still answers
/// "last 365 days" relative to its own latest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingWindow {
    Days(u32),
    Years(u32),
}

impl TrailingWindow {
    /// First day of the window ending at `anchor`, inclusive.
    pub fn start_from(&self, anchor: NaiveDate) -> NaiveDate {
        match self {
            TrailingWindow::Days(n) => anchor
                .checked_sub_days(Days::new(u64::from(*n)))
                .unwrap_or(NaiveDate::MIN),
            TrailingWindow::Years(n) => anchor
                .checked_sub_months(Months::new(n.saturating_mul(12)))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// The window start as a canonical key, ready to bind into a query.
    pub fn start_key_from(&self, anchor: NaiveDate) -> String {
        date_key(self.start_from(anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_dates_pass_through_zero_padded() {
        assert_eq!(canonical_date_key("2025-02-20").unwrap(), "2025-02-20");
        assert_eq!(canonical_date_key("2025-2-3").unwrap(), "2025-02-03");
    }

    #[test]
    fn timestamps_truncate_to_their_date_portion() {
        assert_eq!(
            canonical_date_key("2020-03-01 15:30:00").unwrap(),
            "2020-03-01"
        );
        assert_eq!(
            canonical_date_key("2020-03-01T15:30:00.123").unwrap(),
            "2020-03-01"
        );
        assert_eq!(
            canonical_date_key("2020-03-01T15:30:00+05:30").unwrap(),
            "2020-03-01"
        );
    }

    #[test]
    fn unparsable_input_is_an_invalid_date_format_error() {
        for bad in ["03/01/2020", "yesterday", "2020-13-40", ""] {
            assert!(matches!(
                canonical_date_key(bad),
                Err(CoreError::InvalidDateFormat(_))
            ));
        }
    }

    #[test]
    fn trailing_windows_extend_backward_from_the_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(
            TrailingWindow::Days(365).start_key_from(anchor),
            "2025-02-14"
        );
        assert_eq!(TrailingWindow::Years(5).start_key_from(anchor), "2021-02-14");
    }

    #[test]
    fn window_start_survives_month_length_mismatches() {
        // One year back from Feb 29 lands on Feb 28, not an invalid date.
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(TrailingWindow::Years(1).start_key_from(leap), "2023-02-28");
    }
}
