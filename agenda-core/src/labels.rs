//! Label text resolution with a built-in English fallback.
//!
//! The presentation layer may inject a [`LabelSource`] (a localization
//! bundle, a config table). Keys the source has no mapping for fall back to
//! the English defaults, so the core always has text to hand out.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The fixed set of identifiers a [`LabelSource`] can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum LabelKey {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    PreviousWeek,
    NextWeek,
    PreviousMonth,
    NextMonth,
    /// Header template for the week view. Placeholders: `{month}`, `{day}`.
    WeekHeader,
    /// Header template for the month view. Placeholders: `{month}`, `{year}`.
    MonthHeader,
}

/// English defaults used when no source is injected or a key is unmapped.
static DEFAULTS: Lazy<HashMap<LabelKey, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (LabelKey::Sunday, "Sunday"),
        (LabelKey::Monday, "Monday"),
        (LabelKey::Tuesday, "Tuesday"),
        (LabelKey::Wednesday, "Wednesday"),
        (LabelKey::Thursday, "Thursday"),
        (LabelKey::Friday, "Friday"),
        (LabelKey::Saturday, "Saturday"),
        (LabelKey::PreviousWeek, "Previous Week"),
        (LabelKey::NextWeek, "Next Week"),
        (LabelKey::PreviousMonth, "Previous Month"),
        (LabelKey::NextMonth, "Next Month"),
        (LabelKey::WeekHeader, "Week of {month} {day}"),
        (LabelKey::MonthHeader, "Month of {month}, {year}"),
    ])
});

/// The injected string-resolution collaborator.
pub trait LabelSource {
    /// The text mapped to `key`, or `None` to fall back to the default.
    fn lookup(&self, key: LabelKey) -> Option<String>;
}

/// Resolves label text through an optional injected source.
#[derive(Default)]
pub struct Labels {
    source: Option<Box<dyn LabelSource>>,
}

impl std::fmt::Debug for Labels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Labels")
            .field("source", &self.source.is_some())
            .finish()
    }
}

impl Labels {
    /// Labels with no source: every key resolves to its English default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: Box<dyn LabelSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Resolved text for `key`, falling back to the built-in English table.
    pub fn get(&self, key: LabelKey) -> String {
        self.source
            .as_ref()
            .and_then(|s| s.lookup(key))
            .unwrap_or_else(|| DEFAULTS[&key].to_string())
    }

    /// `Week of March 10` style header for the week starting at `week_start`.
    pub fn week_header(&self, week_start: NaiveDate) -> String {
        self.get(LabelKey::WeekHeader)
            .replace("{month}", &month_name(week_start))
            .replace("{day}", &week_start.day().to_string())
    }

    /// `Month of March, 2024` style header for `anchor`'s month.
    pub fn month_header(&self, anchor: NaiveDate) -> String {
        self.get(LabelKey::MonthHeader)
            .replace("{month}", &month_name(anchor))
            .replace("{year}", &anchor.year().to_string())
    }

    /// Day-name labels in grid column order, Sunday first.
    pub fn day_names(&self) -> Vec<String> {
        [
            LabelKey::Sunday,
            LabelKey::Monday,
            LabelKey::Tuesday,
            LabelKey::Wednesday,
            LabelKey::Thursday,
            LabelKey::Friday,
            LabelKey::Saturday,
        ]
        .iter()
        .map(|&key| self.get(key))
        .collect()
    }
}

fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    struct Spanish;

    impl LabelSource for Spanish {
        fn lookup(&self, key: LabelKey) -> Option<String> {
            match key {
                LabelKey::Sunday => Some("Domingo".to_string()),
                LabelKey::PreviousWeek => Some("Semana Anterior".to_string()),
                _ => None,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_key_has_a_default() {
        for key in LabelKey::iter() {
            assert!(DEFAULTS.contains_key(&key), "missing default for {key:?}");
        }
    }

    #[test]
    fn no_source_falls_back_to_english() {
        let labels = Labels::new();
        assert_eq!(labels.get(LabelKey::PreviousWeek), "Previous Week");
        assert_eq!(labels.get(LabelKey::Sunday), "Sunday");
    }

    #[test]
    fn source_overrides_win_and_gaps_fall_through() {
        let labels = Labels::with_source(Box::new(Spanish));
        assert_eq!(labels.get(LabelKey::Sunday), "Domingo");
        assert_eq!(labels.get(LabelKey::PreviousWeek), "Semana Anterior");
        // Unmapped key falls through to the English default.
        assert_eq!(labels.get(LabelKey::NextWeek), "Next Week");
    }

    #[test]
    fn week_header_fills_placeholders() {
        let labels = Labels::new();
        assert_eq!(labels.week_header(date(2024, 3, 10)), "Week of March 10");
    }

    #[test]
    fn month_header_fills_placeholders() {
        let labels = Labels::new();
        assert_eq!(
            labels.month_header(date(2024, 2, 15)),
            "Month of February, 2024"
        );
    }

    #[test]
    fn day_names_are_sunday_first() {
        let names = Labels::new().day_names();
        assert_eq!(names.first().map(String::as_str), Some("Sunday"));
        assert_eq!(names.last().map(String::as_str), Some("Saturday"));
        assert_eq!(names.len(), 7);
    }
}
