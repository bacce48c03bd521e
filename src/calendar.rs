//! Working-day counting for leave date ranges.
//!
//! This module provides the pure calendar arithmetic the validator uses
//! to turn an inclusive date range into a number of chargeable leave
//! days. A working day is any calendar day that is not a Saturday or a
//! Sunday; no holiday calendar is consulted.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true if the date falls on a Saturday or a Sunday.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-03-09 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
/// // 2024-03-11 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the working days in the inclusive range `[start, end]`.
///
/// Each calendar day in the range is counted unless its weekday is
/// Saturday or Sunday. The function is a pure, deterministic function of
/// its two inputs: no timezone, locale, or clock is consulted.
///
/// # Arguments
///
/// * `start` - First day of the range (inclusive)
/// * `end` - Last day of the range (inclusive)
///
/// # Returns
///
/// The number of non-weekend days in the range. Returns 0 when the range
/// contains only weekend days, and 0 when `end < start` (callers are
/// expected to have rejected inverted ranges already).
///
/// # Example
///
/// ```
/// use leave_engine::calendar::count_working_days;
/// use chrono::NaiveDate;
///
/// // Monday 2024-03-04 through Friday 2024-03-08
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert_eq!(count_working_days(start, end), 5);
///
/// // Saturday and Sunday only
/// let sat = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let sun = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(count_working_days(sat, sun), 0);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut working_days = 0;
    let mut date = start;
    while date <= end {
        if !is_weekend(date) {
            working_days += 1;
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break, // end of the calendar
        };
    }
    working_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_working_week_counts_five() {
        // Monday through Friday
        assert_eq!(count_working_days(date(2024, 3, 4), date(2024, 3, 8)), 5);
    }

    #[test]
    fn test_single_weekday_counts_one() {
        assert_eq!(count_working_days(date(2024, 3, 6), date(2024, 3, 6)), 1);
    }

    #[test]
    fn test_single_saturday_counts_zero() {
        assert_eq!(count_working_days(date(2024, 3, 9), date(2024, 3, 9)), 0);
    }

    #[test]
    fn test_weekend_only_range_counts_zero() {
        assert_eq!(count_working_days(date(2024, 3, 9), date(2024, 3, 10)), 0);
    }

    #[test]
    fn test_range_spanning_weekend() {
        // Friday through Monday: Friday and Monday are working days
        assert_eq!(count_working_days(date(2024, 3, 8), date(2024, 3, 11)), 2);
    }

    #[test]
    fn test_two_full_weeks() {
        // Monday 2024-03-04 through Sunday 2024-03-17
        assert_eq!(count_working_days(date(2024, 3, 4), date(2024, 3, 17)), 10);
    }

    #[test]
    fn test_inverted_range_counts_zero() {
        assert_eq!(count_working_days(date(2024, 3, 8), date(2024, 3, 4)), 0);
    }

    #[test]
    fn test_range_crossing_year_boundary() {
        // Mon 2024-12-30 through Fri 2025-01-03
        assert_eq!(count_working_days(date(2024, 12, 30), date(2025, 1, 3)), 5);
    }

    proptest! {
        // Any range starting on a Saturday and ending on the following
        // Sunday contains exactly the weekend, so it counts zero.
        #[test]
        fn prop_weekend_only_ranges_count_zero(week in 0i64..3000) {
            // 2000-01-01 is a Saturday
            let saturday = date(2000, 1, 1) + chrono::Duration::days(week * 7);
            let sunday = saturday + chrono::Duration::days(1);
            prop_assert_eq!(count_working_days(saturday, sunday), 0);
        }

        // Extending a range by one day never decreases the count, and
        // increases it by at most one.
        #[test]
        fn prop_count_is_monotone_in_end_date(offset in 0i64..400, len in 0i64..60) {
            let start = date(2024, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(len);
            let count = count_working_days(start, end);
            let extended = count_working_days(start, end + chrono::Duration::days(1));
            prop_assert!(extended >= count);
            prop_assert!(extended <= count + 1);
        }

        // Every 7-day window contains exactly 5 working days.
        #[test]
        fn prop_full_week_counts_five(offset in 0i64..3000) {
            let start = date(2020, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(6);
            prop_assert_eq!(count_working_days(start, end), 5);
        }
    }
}
