//! The render plan: the presentation-agnostic description of what a
//! calendar view should display.

use crate::entry::Entry;
use crate::error::CalendarError;
use chrono::NaiveDate;
use std::str::FromStr;
use strum_macros::AsRefStr;

/// Number of columns in every plan. Grids are Sunday-first.
pub const DAYS_IN_WEEK: usize = 7;

/// Which grid builder runs: a single week or a whole month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TimeSpan {
    Week,
    Month,
}

impl FromStr for TimeSpan {
    type Err = CalendarError;

    /// Accepts `week` or `month`, case-insensitively. Anything else is an
    /// [`CalendarError::InvalidMode`]; the mode is never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(CalendarError::InvalidMode {
                input: s.to_string(),
            }),
        }
    }
}

/// Navigation direction for paging through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// One day slot in the rendered grid.
#[derive(Debug, Clone)]
pub struct DayCell {
    /// The cell's calendar date. Filler cells carry the real adjacent-month
    /// date so the presentation layer can still print a day number.
    pub date: NaiveDate,
    /// False for month-view filler cells before/after the month.
    pub in_range: bool,
    /// Entries on this day, earliest first. Always empty for filler.
    pub entries: Vec<Entry>,
    pub row: usize,
    pub col: usize,
}

impl DayCell {
    /// Filler cells belong to an adjacent month and render greyed out.
    pub fn is_filler(&self) -> bool {
        !self.in_range
    }
}

/// The computed layout for one visible span: 7 cells for a week, 35 or 42
/// for a month, plus the human label describing the span.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub cells: Vec<DayCell>,
    pub header_label: String,
    pub columns: usize,
}

impl RenderPlan {
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Iterator over the cells of grid row `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(move |c| c.row == row)
    }
}
