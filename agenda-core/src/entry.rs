use chrono::{NaiveDate, NaiveTime, Timelike};
use std::fmt;

/// A single timed record placed on the calendar.
///
/// Entries are plain values: the core never mutates one after ingestion,
/// only reorders and reindexes the collection it was handed. `end_time` is
/// carried for display purposes and is never validated against
/// `start_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub title: String,
    pub description: String,
}

impl Entry {
    pub fn new(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            start_date,
            start_time,
            end_time,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Entry with the description omitted.
    pub fn titled(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        title: impl Into<String>,
    ) -> Self {
        Self::new(start_date, start_time, end_time, title, "")
    }

    /// Key used to keep calendars sorted earliest-first: date, then start
    /// time. Entries with equal keys keep their insertion order, so callers
    /// must sort with a stable sort.
    pub fn sort_key(&self) -> (NaiveDate, NaiveTime) {
        (self.start_date, self.start_time)
    }
}

impl fmt::Display for Entry {
    /// The cell label, e.g. `2 PM: Doctor's Appointment`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (is_pm, hour) = self.start_time.hour12();
        let meridiem = if is_pm { "PM" } else { "AM" };
        write!(f, "{hour} {meridiem}: {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn label_uses_twelve_hour_clock() {
        let e = Entry::titled(date(2024, 3, 10), time(14, 0), time(15, 0), "Dentist");
        assert_eq!(e.to_string(), "2 PM: Dentist");

        let morning = Entry::titled(date(2024, 3, 10), time(9, 30), time(10, 0), "Standup");
        assert_eq!(morning.to_string(), "9 AM: Standup");
    }

    #[test]
    fn sort_key_orders_by_date_then_time() {
        let early = Entry::titled(date(2024, 3, 10), time(8, 0), time(9, 0), "a");
        let late = Entry::titled(date(2024, 3, 10), time(9, 0), time(10, 0), "b");
        let next_day = Entry::titled(date(2024, 3, 11), time(0, 0), time(1, 0), "c");
        assert!(early.sort_key() < late.sort_key());
        assert!(late.sort_key() < next_day.sort_key());
    }

    #[test]
    fn end_before_start_is_accepted() {
        // End times are display-only and intentionally unvalidated.
        let e = Entry::titled(date(2024, 3, 10), time(10, 0), time(9, 0), "Backwards");
        assert!(e.end_time < e.start_time);
    }
}
