//! Error types for the agenda-core crate.

/// Error type for all fallible operations in the calendar core.
///
/// Grid building, indexing and navigation are total over valid dates and
/// never fail; the only failure the core knows about is a mode string that
/// names no time span.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a mode string is not a recognized time span.
    #[error("invalid time span {input:?}, valid values are \"week\" and \"month\"")]
    InvalidMode {
        /// The rejected input.
        input: String,
    },
}
