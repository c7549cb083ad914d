use crate::entry::Entry;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Entries grouped by calendar date for O(1) day lookup.
///
/// The index is rebuilt from the full collection whenever it changes;
/// entry volumes are tens to low hundreds, so incremental updates are not
/// worth the bookkeeping.
#[derive(Debug, Default)]
pub struct EntryIndex {
    by_date: HashMap<NaiveDate, Vec<Entry>>,
}

impl EntryIndex {
    /// Groups `entries` by start date, earliest-first within each day.
    ///
    /// The sort is stable, so entries sharing a date and start time keep
    /// their insertion order. The input slice is copied, never mutated.
    pub fn build(entries: &[Entry]) -> Self {
        let mut sorted = entries.to_vec();
        sorted.sort_by_key(Entry::sort_key);

        let mut by_date: HashMap<NaiveDate, Vec<Entry>> = HashMap::new();
        for entry in sorted {
            by_date.entry(entry.start_date).or_default().push(entry);
        }
        Self { by_date }
    }

    /// All entries starting on `date`, earliest first. Empty slice when the
    /// day has none.
    pub fn entries_on(&self, date: NaiveDate) -> &[Entry] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed entries across all days.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
