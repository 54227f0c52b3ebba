use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Date format produced by the upstream extraction layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, falling back to `today` when the value is
/// missing, empty, or malformed.
///
/// Sentinels such as "present" are expected to be resolved upstream; anything
/// that still reaches here unresolved collapses to the evaluation date.
pub fn parse_date_or(value: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = value else {
        return today;
    };
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            debug!("Unparseable date '{raw}' ({e}), using evaluation date {today}");
            today
        }
    }
}

/// Whole calendar months from `start` to `end`. Day-of-month is ignored and
/// the result is negative when `end` falls in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parses_iso_date() {
        let today = ymd(2024, 5, 1);
        assert_eq!(parse_date_or(Some("2020-03-15"), today), ymd(2020, 3, 15));
    }

    #[test]
    fn test_missing_date_is_today() {
        let today = ymd(2024, 5, 1);
        assert_eq!(parse_date_or(None, today), today);
    }

    #[test]
    fn test_empty_date_is_today() {
        let today = ymd(2024, 5, 1);
        assert_eq!(parse_date_or(Some(""), today), today);
    }

    #[test]
    fn test_sentinel_and_garbage_fall_back_to_today() {
        let today = ymd(2024, 5, 1);
        assert_eq!(parse_date_or(Some("present"), today), today);
        assert_eq!(parse_date_or(Some("March 2020"), today), today);
        assert_eq!(parse_date_or(Some("2020-13-01"), today), today);
    }

    #[test]
    fn test_months_between_ignores_day() {
        assert_eq!(months_between(ymd(2020, 1, 31), ymd(2020, 2, 1)), 1);
        assert_eq!(months_between(ymd(2020, 1, 1), ymd(2020, 1, 31)), 0);
    }

    #[test]
    fn test_months_between_across_years() {
        assert_eq!(months_between(ymd(2018, 11, 1), ymd(2021, 2, 1)), 27);
    }

    #[test]
    fn test_months_between_reversed_is_negative() {
        assert_eq!(months_between(ymd(2021, 1, 1), ymd(2020, 7, 1)), -6);
    }
}
