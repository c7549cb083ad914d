pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod index;
pub mod labels;
pub mod month;
pub mod navigate;
pub mod plan;
pub mod scheduler;
pub mod week;

pub use config::Config;
pub use entry::Entry;
pub use error::CalendarError;
pub use index::EntryIndex;
pub use labels::{LabelKey, LabelSource, Labels};
pub use plan::{DAYS_IN_WEEK, DayCell, Direction, RenderPlan, TimeSpan};
pub use scheduler::Scheduler;
