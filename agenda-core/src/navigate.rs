//! Anchor date stepping.

use crate::dates::shift_months;
use crate::plan::{Direction, TimeSpan};
use chrono::{Duration, NaiveDate};

/// Moves `anchor` one unit in `direction`. Pure; no state is touched.
///
/// Week mode steps exactly seven days. Month mode steps one calendar month,
/// clamping the day-of-month to the target month's length, so stepping
/// forward from Jan 31 lands on the last day of February.
pub fn advance(span: TimeSpan, anchor: NaiveDate, direction: Direction) -> NaiveDate {
    let sign: i32 = match direction {
        Direction::Back => -1,
        Direction::Forward => 1,
    };
    match span {
        TimeSpan::Week => anchor + Duration::days(7 * sign as i64),
        TimeSpan::Month => shift_months(anchor, sign),
    }
}
