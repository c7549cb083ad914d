//! Date arithmetic shared by the grid builders and the navigator.

use chrono::{Datelike, Duration, NaiveDate};

/// Index of `date`'s weekday in a Sunday-first week (Sunday = 0 through
/// Saturday = 6).
pub fn sunday_based_weekday(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// The most recent Sunday on or before `date`.
///
/// A date that already falls on a Sunday is its own week start; every other
/// day steps back to the Sunday before it, never forward.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(sunday_based_weekday(date) as i64)
}

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Number of days in `date`'s month, leap-aware.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of next month is a valid date");
    (next - first).num_days() as u32
}

/// Shifts `date` by `delta` calendar months, clamping the day-of-month to
/// the target month's length. Stepping forward from Jan 31 lands on Feb 28
/// (or 29 in a leap year), not an out-of-range date.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + delta;
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date");
    let day = date.day().min(days_in_month(first));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is a valid date")
}
