//! Week view layout: seven cells, Sunday through Saturday.

use crate::dates::week_start;
use crate::index::EntryIndex;
use crate::labels::Labels;
use crate::plan::{DAYS_IN_WEEK, DayCell, RenderPlan};
use chrono::{Duration, NaiveDate};

/// Lays out the week containing `anchor`.
///
/// The grid starts on the most recent Sunday: an anchor already on a Sunday
/// is its own week start, any other day steps back to the Sunday before it.
/// Every cell is in range; the week view has no filler concept.
pub fn build_week_plan(anchor: NaiveDate, index: &EntryIndex, labels: &Labels) -> RenderPlan {
    let start = week_start(anchor);
    let cells = (0..DAYS_IN_WEEK)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            DayCell {
                date,
                in_range: true,
                entries: index.entries_on(date).to_vec(),
                row: 0,
                col: i,
            }
        })
        .collect();

    RenderPlan {
        cells,
        header_label: labels.week_header(start),
        columns: DAYS_IN_WEEK,
    }
}
