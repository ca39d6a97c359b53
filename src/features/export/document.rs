//! JSON export document.
//!
//! Shape: `{ "config": {"duration", "startDate", "tasks"}, "data": {"days": ...} }`.
//! The document is never read back by habit-diary.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::diary::{DiaryData, Program, TaskTemplate};
use crate::error::DiaryError;

/// File name used when no destination is given.
pub const DEFAULT_EXPORT_FILE: &str = "transformation_diary_export.json";

/// Program section of the export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig<'a> {
    /// Program length in days.
    pub duration: u32,
    /// First program day.
    pub start_date: NaiveDate,
    /// Task templates.
    pub tasks: &'a [TaskTemplate],
}

/// The complete export document.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    /// The program.
    pub config: ExportConfig<'a>,
    /// The diary exactly as persisted.
    pub data: &'a DiaryData,
}

impl<'a> ExportDocument<'a> {
    /// Build an export of `data` for `program`.
    #[must_use]
    pub fn new(program: &'a Program, data: &'a DiaryData) -> Self {
        Self {
            config: ExportConfig {
                duration: program.duration_days,
                start_date: program.start_date,
                tasks: &program.tasks,
            },
            data,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DiaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed document to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_to(&self, path: &Path) -> Result<(), DiaryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::DayRecord;
    use tempfile::TempDir;

    fn program() -> Program {
        Program::new(
            10,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![TaskTemplate::new("A", "Task A")],
        )
    }

    fn data(program: &Program) -> DiaryData {
        let mut data = DiaryData::default();
        let mut record = DayRecord::empty(&program.tasks);
        record.journal = "day one".to_string();
        data.days.insert("2024-01-01".to_string(), record);
        data
    }

    #[test]
    fn test_export_shape() {
        let program = program();
        let data = data(&program);
        let json = ExportDocument::new(&program, &data).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["duration"], 10);
        assert_eq!(value["config"]["startDate"], "2024-01-01");
        assert_eq!(value["config"]["tasks"][0]["id"], "A");
        assert_eq!(value["config"]["tasks"][0]["label"], "Task A");
        assert_eq!(value["data"]["days"]["2024-01-01"]["journal"], "day one");
        assert_eq!(value["data"]["days"]["2024-01-01"]["tasks"]["A"], false);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let program = program();
        let data = DiaryData::default();
        let json = ExportDocument::new(&program, &data).to_json_pretty().unwrap();
        assert!(json.contains("\n  \"config\""));
    }

    #[test]
    fn test_write_to_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports").join(DEFAULT_EXPORT_FILE);

        let program = program();
        let data = data(&program);
        ExportDocument::new(&program, &data).write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("day one"));
    }
}
