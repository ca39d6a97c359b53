//! Output formatting for habit-diary.
//!
//! This module provides formatters for displaying diary data in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::calendar;
use crate::diary::{DayProgress, DayRecord, DiaryData, Program, TaskTemplate};
use crate::error::DiaryError;
use crate::features::stats::ProgressSummary;

pub use json::*;
pub use pretty::*;

/// One task line of a day view.
#[derive(Debug, Clone, Serialize)]
pub struct TaskLine {
    /// Task id.
    pub id: String,
    /// Task label.
    pub label: String,
    /// Whether the task is checked.
    pub done: bool,
}

/// Everything shown for a single program day.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    /// Program day index.
    pub day: u32,
    /// Checkpoint week.
    pub week: u32,
    /// Calendar date.
    pub date: NaiveDate,
    /// Tasks in configured order.
    pub tasks: Vec<TaskLine>,
    /// Journal text.
    pub journal: String,
    /// Whether every task is done.
    pub completed: bool,
    /// Checked/total counts.
    pub progress: DayProgress,
}

impl DayView {
    /// Build a view of `record` as program day `day`.
    #[must_use]
    pub fn new(program: &Program, day: u32, record: &DayRecord, progress: DayProgress) -> Self {
        Self {
            day,
            week: calendar::week_of(day),
            date: program.date_for_index(day),
            tasks: program
                .tasks
                .iter()
                .map(|t| TaskLine {
                    id: t.id.clone(),
                    label: t.label.clone(),
                    done: record.is_checked(&t.id),
                })
                .collect(),
            journal: record.journal.clone(),
            completed: record.completed,
            progress,
        }
    }
}

/// Status of a program day in the day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// No record yet.
    Untouched,
    /// Recorded but not every task done.
    Partial,
    /// Every task done.
    Completed,
}

/// One entry of the program day list.
#[derive(Debug, Clone, Serialize)]
pub struct DayListEntry {
    /// Program day index.
    pub day: u32,
    /// Calendar date.
    pub date: NaiveDate,
    /// Recording status.
    pub status: DayStatus,
    /// Whether this is today's program day.
    pub today: bool,
}

/// List every program day with its status.
#[must_use]
pub fn day_list(program: &Program, data: &DiaryData, today: NaiveDate) -> Vec<DayListEntry> {
    (1..=program.duration_days)
        .map(|day| {
            let date = program.date_for_index(day);
            let status = match data.days.get(&calendar::iso_key(date)) {
                None => DayStatus::Untouched,
                Some(record) if record.completed => DayStatus::Completed,
                Some(_) => DayStatus::Partial,
            };
            DayListEntry {
                day,
                date,
                status,
                today: date == today,
            }
        })
        .collect()
}

/// Format a day view based on output format
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_day(view: &DayView, format: OutputFormat) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Pretty => Ok(format_day_pretty(view)),
        OutputFormat::Json => to_json(view),
    }
}

/// Format the configured task templates based on output format
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[TaskTemplate], format: OutputFormat) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format the program day list based on output format
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_day_list(
    program: &Program,
    entries: &[DayListEntry],
    format: OutputFormat,
) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Pretty => Ok(format_day_list_pretty(program, entries)),
        OutputFormat::Json => format_day_list_json(entries),
    }
}

/// Format the progress summary based on output format
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_summary(summary: &ProgressSummary, format: OutputFormat) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => to_json(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> Program {
        Program::new(
            3,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![TaskTemplate::new("A", "Task A"), TaskTemplate::new("B", "Task B")],
        )
    }

    #[test]
    fn test_day_view() {
        let program = program();
        let mut record = DayRecord::empty(&program.tasks);
        record.tasks.insert("B".to_string(), true);
        let progress = DayProgress { checked: 1, total: 2, percent: 50 };

        let view = DayView::new(&program, 2, &record, progress);

        assert_eq!(view.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(view.week, 1);
        assert_eq!(view.tasks.len(), 2);
        assert!(!view.tasks[0].done);
        assert!(view.tasks[1].done);
    }

    #[test]
    fn test_day_list_statuses() {
        let program = program();
        let mut data = DiaryData::default();
        let mut done = DayRecord::empty(&program.tasks);
        done.tasks.values_mut().for_each(|v| *v = true);
        done.completed = true;
        data.days.insert("2024-01-01".to_string(), done);
        data.days
            .insert("2024-01-02".to_string(), DayRecord::empty(&program.tasks));

        let entries = day_list(&program, &data, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].status, DayStatus::Completed);
        assert_eq!(entries[1].status, DayStatus::Partial);
        assert_eq!(entries[2].status, DayStatus::Untouched);
        assert!(entries[1].today);
        assert!(!entries[0].today);
    }

    #[test]
    fn test_format_day_json() {
        let program = program();
        let record = DayRecord::empty(&program.tasks);
        let view = DayView::new(&program, 1, &record, DayProgress { checked: 0, total: 2, percent: 0 });

        let json = format_day(&view, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["day"], 1);
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["progress"]["total"], 2);
    }
}
