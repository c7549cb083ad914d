//! Month view layout: a 35- or 42-cell grid with adjacent-month filler.

use crate::dates::{days_in_month, first_of_month, sunday_based_weekday};
use crate::index::EntryIndex;
use crate::labels::Labels;
use crate::plan::{DAYS_IN_WEEK, DayCell, RenderPlan};
use chrono::{Duration, NaiveDate};

/// Lays out the month containing `anchor`. Only the anchor's year and month
/// matter; its day-of-month is ignored.
///
/// Cells before the first of the month and after its last day are filler:
/// they carry the real adjacent-month date so a day number can still be
/// printed, but they are flagged out of range and never receive entries.
pub fn build_month_plan(anchor: NaiveDate, index: &EntryIndex, labels: &Labels) -> RenderPlan {
    let first = first_of_month(anchor);
    let days = days_in_month(first) as usize;
    let offset = sunday_based_weekday(first);
    // Smallest multiple of 7 that fits the leading filler plus the month:
    // 35 cells when offset + days <= 35, otherwise 42.
    let total = (offset + days).div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;

    let grid_start = first - Duration::days(offset as i64);
    let mut cells = Vec::with_capacity(total);
    for idx in 0..total {
        let date = grid_start + Duration::days(idx as i64);
        let in_range = idx >= offset && idx < offset + days;
        cells.push(DayCell {
            date,
            in_range,
            entries: if in_range {
                index.entries_on(date).to_vec()
            } else {
                Vec::new()
            },
            row: idx / DAYS_IN_WEEK,
            col: idx % DAYS_IN_WEEK,
        });
    }

    RenderPlan {
        cells,
        header_label: labels.month_header(anchor),
        columns: DAYS_IN_WEEK,
    }
}
