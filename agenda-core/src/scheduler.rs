//! The central `Scheduler` struct, the primary API for building render plans.

use crate::entry::Entry;
use crate::index::EntryIndex;
use crate::labels::{LabelKey, Labels};
use crate::month::build_month_plan;
use crate::navigate::advance;
use crate::plan::{Direction, RenderPlan, TimeSpan};
use crate::week::build_week_plan;
use chrono::NaiveDate;
use tracing::debug;

/// Owns the current view mode, anchor date and entry collection, and serves
/// render plans to the presentation layer.
///
/// The scheduler takes ownership of every entry collection handed to it and
/// reindexes before the next plan is requested; no entry is ever dropped.
/// Plans are built lazily and cached until mode, anchor or entries change.
/// Nothing here performs I/O or blocks; a multi-threaded host must
/// serialize access externally.
#[derive(Debug)]
pub struct Scheduler {
    span: TimeSpan,
    anchor: NaiveDate,
    entries: Vec<Entry>,
    index: EntryIndex,
    labels: Labels,
    plan: Option<RenderPlan>,
}

impl Scheduler {
    /// Scheduler with built-in English labels.
    pub fn new(span: TimeSpan, anchor: NaiveDate, entries: Vec<Entry>) -> Self {
        Self::with_labels(span, anchor, entries, Labels::new())
    }

    /// Scheduler with an injected label source (localization, config).
    pub fn with_labels(
        span: TimeSpan,
        anchor: NaiveDate,
        entries: Vec<Entry>,
        labels: Labels,
    ) -> Self {
        let index = EntryIndex::build(&entries);
        Self {
            span,
            anchor,
            entries,
            index,
            labels,
            plan: None,
        }
    }

    pub fn time_span(&self) -> TimeSpan {
        self.span
    }

    /// Switches between week and month view. Mode strings from the outside
    /// world go through [`TimeSpan::from_str`], which rejects unknown modes
    /// with [`crate::CalendarError::InvalidMode`] before they reach here.
    pub fn set_time_span(&mut self, span: TimeSpan) {
        self.span = span;
        self.plan = None;
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor
    }

    pub fn set_anchor_date(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
        self.plan = None;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Replaces the whole entry collection and reindexes.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.reindex();
    }

    /// Appends one entry and reindexes.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.reindex();
    }

    /// Steps the anchor one week or month in `direction` and invalidates
    /// the cached plan.
    pub fn navigate(&mut self, direction: Direction) {
        self.anchor = advance(self.span, self.anchor, direction);
        debug!(span = ?self.span, anchor = %self.anchor, "navigated");
        self.plan = None;
    }

    /// The render plan for the current mode and anchor, rebuilding it only
    /// when something changed since the last call.
    pub fn plan(&mut self) -> &RenderPlan {
        let (span, anchor, index, labels) = (self.span, self.anchor, &self.index, &self.labels);
        self.plan.get_or_insert_with(|| {
            debug!(span = ?span, anchor = %anchor, "rebuilding render plan");
            match span {
                TimeSpan::Week => build_week_plan(anchor, index, labels),
                TimeSpan::Month => build_month_plan(anchor, index, labels),
            }
        })
    }

    /// The Previous/Next navigation labels for the current mode.
    pub fn navigation_labels(&self) -> (String, String) {
        match self.span {
            TimeSpan::Week => (
                self.labels.get(LabelKey::PreviousWeek),
                self.labels.get(LabelKey::NextWeek),
            ),
            TimeSpan::Month => (
                self.labels.get(LabelKey::PreviousMonth),
                self.labels.get(LabelKey::NextMonth),
            ),
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn reindex(&mut self) {
        self.index = EntryIndex::build(&self.entries);
        self.plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry(d: NaiveDate, h: u32, title: &str) -> Entry {
        Entry::titled(d, time(h, 0), time(h + 1, 0), title)
    }

    #[test]
    fn week_mode_builds_a_seven_cell_plan() {
        let mut s = Scheduler::new(TimeSpan::Week, date(2024, 3, 13), Vec::new());
        let plan = s.plan();
        assert_eq!(plan.cells.len(), 7);
        assert_eq!(plan.header_label, "Week of March 10");
    }

    #[test]
    fn month_mode_builds_a_month_plan() {
        let mut s = Scheduler::new(TimeSpan::Month, date(2024, 2, 15), Vec::new());
        let plan = s.plan();
        assert_eq!(plan.cells.len(), 35);
        assert_eq!(plan.header_label, "Month of February, 2024");
    }

    #[test]
    fn navigate_forward_in_month_mode_clamps_the_anchor() {
        let mut s = Scheduler::new(TimeSpan::Month, date(2024, 1, 31), Vec::new());
        s.navigate(Direction::Forward);
        assert_eq!(s.anchor_date(), date(2024, 2, 29));
        assert_eq!(s.plan().header_label, "Month of February, 2024");
    }

    #[test]
    fn navigate_back_in_week_mode_moves_seven_days() {
        let mut s = Scheduler::new(TimeSpan::Week, date(2024, 3, 13), Vec::new());
        s.navigate(Direction::Back);
        assert_eq!(s.anchor_date(), date(2024, 3, 6));
        assert_eq!(s.plan().header_label, "Week of March 3");
    }

    #[test]
    fn add_entry_shows_up_in_the_next_plan() {
        let d = date(2024, 3, 12);
        let mut s = Scheduler::new(TimeSpan::Week, d, Vec::new());
        assert!(s.plan().cells.iter().all(|c| c.entries.is_empty()));

        s.add_entry(entry(d, 9, "new"));
        let cell = s
            .plan()
            .cells
            .iter()
            .find(|c| c.date == d)
            .expect("anchor day is in the plan");
        assert_eq!(cell.entries.len(), 1);
        assert_eq!(cell.entries[0].title, "new");
    }

    #[test]
    fn set_entries_replaces_and_reindexes() {
        let d = date(2024, 3, 12);
        let mut s = Scheduler::new(TimeSpan::Week, d, vec![entry(d, 9, "old")]);
        s.set_entries(vec![entry(d, 8, "a"), entry(d, 10, "b")]);

        let cell = s.plan().cells.iter().find(|c| c.date == d).unwrap();
        let titles: Vec<&str> = cell.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
        assert_eq!(s.entries().len(), 2);
    }

    #[test]
    fn mode_switch_rebuilds_the_plan() {
        let mut s = Scheduler::new(TimeSpan::Week, date(2024, 2, 15), Vec::new());
        assert_eq!(s.plan().cells.len(), 7);
        s.set_time_span(TimeSpan::Month);
        assert_eq!(s.plan().cells.len(), 35);
    }

    #[test]
    fn no_entry_is_dropped_across_operations() {
        let mut s = Scheduler::new(TimeSpan::Month, date(2024, 2, 15), Vec::new());
        for day in 1..=29 {
            s.add_entry(entry(date(2024, 2, day), 9, &format!("e{day}")));
        }
        s.navigate(Direction::Forward);
        s.navigate(Direction::Back);

        let placed: usize = s.plan().cells.iter().map(|c| c.entries.len()).sum();
        assert_eq!(placed, 29);
        assert_eq!(s.entries().len(), 29);
    }

    #[test]
    fn navigation_labels_follow_the_mode() {
        let mut s = Scheduler::new(TimeSpan::Week, date(2024, 3, 13), Vec::new());
        assert_eq!(
            s.navigation_labels(),
            ("Previous Week".to_string(), "Next Week".to_string())
        );
        s.set_time_span(TimeSpan::Month);
        assert_eq!(
            s.navigation_labels(),
            ("Previous Month".to_string(), "Next Month".to_string())
        );
    }
}
