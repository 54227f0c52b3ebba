//! Interval merger: de-duplicated total duration over overlapping date ranges.
//!
//! Concurrent roles are merged into runs so overlapping time is counted once;
//! gaps between disjoint runs never contribute.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeline::dates::{months_between, parse_date_or};

/// A single experience or education period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Interval as it arrives from the extraction layer, before date parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInterval {
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
}

impl RawInterval {
    /// Resolves both endpoints, substituting `today` for anything unparseable.
    pub fn resolve(&self, today: NaiveDate) -> DateInterval {
        DateInterval {
            start: parse_date_or(self.date_start.as_deref(), today),
            end: parse_date_or(self.date_end.as_deref(), today),
        }
    }
}

/// Elapsed time in whole years and months. `months` is always in `0..=11`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub months: u32,
}

impl Duration {
    /// Splits a month count using floor division, so a negative total keeps
    /// `months` in `0..=11` and pushes the sign into `years`.
    pub fn from_total_months(total: i64) -> Self {
        Self {
            years: total.div_euclid(12),
            months: total.rem_euclid(12) as u32,
        }
    }

    /// Saturates instead of overflowing for extractor-reported values.
    pub fn total_months(&self) -> i64 {
        self.years
            .saturating_mul(12)
            .saturating_add(i64::from(self.months))
    }

    /// Re-splits the month count, carrying any `months >= 12` into `years`.
    pub fn normalized(&self) -> Self {
        Self::from_total_months(self.total_months())
    }

    /// Years with the month remainder as a fraction, used for bucketing.
    pub fn fractional_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0
    }
}

/// Merges overlapping or abutting intervals and sums the whole-month length of
/// each resulting run.
///
/// Intervals whose end precedes their start are not rejected; they take part
/// in the same comparisons and can contribute a negative month delta. Runs are
/// summed in `i64` so many such intervals cannot overflow the total.
pub fn aggregate(intervals: &[DateInterval]) -> Duration {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Duration::default();
    };

    let mut total_months: i64 = 0;
    let mut current_start = first.start;
    let mut current_end = first.end;

    for DateInterval { start, end } in iter {
        if start <= current_end {
            current_end = current_end.max(end);
        } else {
            total_months += i64::from(months_between(current_start, current_end));
            current_start = start;
            current_end = end;
        }
    }
    total_months += i64::from(months_between(current_start, current_end));

    Duration::from_total_months(total_months)
}

/// Parses raw `{date_start, date_end}` pairs against `today` and aggregates them.
pub fn aggregate_raw(intervals: &[RawInterval], today: NaiveDate) -> Duration {
    let resolved: Vec<DateInterval> = intervals.iter().map(|i| i.resolve(today)).collect();
    aggregate(&resolved)
}
