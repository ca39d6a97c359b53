//! The diary: program definition, day records and the store that owns them.

mod program;
mod store;
mod types;

pub use program::{default_task_templates, Program};
pub use store::{DayProgress, DiaryStore};
pub use types::{DayRecord, DiaryData, TaskTemplate};
