//! Day command implementations.
//!
//! Showing, checking, journaling and clearing a single program day.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{DayArg, OutputFormat};
use crate::core::KeyValueStore;
use crate::diary::{DiaryStore, Program};
use crate::error::DiaryError;
use crate::output::{day_list, format_day, format_day_list, format_tasks, to_json, DayView};

/// Resolve `--day`, defaulting to today's program day.
///
/// # Errors
///
/// Returns `DiaryError::InvalidDay` for day 0.
pub fn resolve_day(arg: DayArg, program: &Program, today: NaiveDate) -> Result<u32, DiaryError> {
    match arg.day {
        Some(0) => Err(DiaryError::InvalidDay(
            "program days start at 1".to_string(),
        )),
        Some(day) => Ok(day),
        None => Ok(program.today_index(today)),
    }
}

fn render_day<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    let record = store.ensure_day(day).clone();
    let progress = store.day_progress(day);
    let view = DayView::new(store.program(), day, &record, progress);
    format_day(&view, format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn show<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    render_day(store, day, format)
}

/// Execute check/uncheck commands
///
/// Every id is validated before anything changes.
///
/// # Errors
///
/// Returns `DiaryError::UnknownTask` for an unconfigured id, or an error if
/// saving fails.
pub fn set_tasks<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    task_ids: &[String],
    value: bool,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    if let Some(unknown) = task_ids.iter().find(|id| !store.program().has_task(id)) {
        return Err(DiaryError::UnknownTask(unknown.clone()));
    }

    for id in task_ids {
        store.set_task(day, id, value)?;
    }

    render_day(store, day, format)
}

/// Execute all/none commands
///
/// # Errors
///
/// Returns an error if saving fails.
pub fn set_all<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    value: bool,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    store.set_all_tasks(day, value)?;
    render_day(store, day, format)
}

/// Execute journal command
///
/// With text, replaces the entry. Without, prints the current entry.
///
/// # Errors
///
/// Returns an error if saving or output formatting fails.
pub fn journal<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    text: Option<&str>,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    if let Some(text) = text {
        store.set_journal(day, text)?;
        return match format {
            OutputFormat::Json => render_day(store, day, format),
            OutputFormat::Pretty => Ok(format!(
                "{} journal for day {}",
                "Saved".green().bold(),
                day
            )),
        };
    }

    let journal = store.ensure_day(day).journal.clone();
    let date = store.program().date_for_index(day);
    match format {
        OutputFormat::Json => to_json(&json!({
            "day": day,
            "date": date,
            "journal": journal,
        })),
        OutputFormat::Pretty if journal.is_empty() => {
            Ok(format!("No journal entry for day {day}").dimmed().to_string())
        }
        OutputFormat::Pretty => Ok(journal),
    }
}

/// Execute clear command
///
/// # Errors
///
/// Returns `DiaryError::Aborted` if not confirmed, or an error if saving fails.
pub fn clear<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    day: u32,
    confirmed: bool,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    if !confirmed {
        return Err(DiaryError::Aborted(format!("day {day} was not cleared")));
    }

    store.clear_day(day)?;
    render_day(store, day, format)
}

/// Ask a yes/no question. Only `y` or `yes` (any case) confirms.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the answer read.
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<bool, DiaryError> {
    write!(writer, "{message} [y/N] ")?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Execute days command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn days<S: KeyValueStore>(
    store: &DiaryStore<S>,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    let entries = day_list(store.program(), store.data(), today);
    format_day_list(store.program(), &entries, format)
}

/// Execute tasks command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn tasks(program: &Program, format: OutputFormat) -> Result<String, DiaryError> {
    format_tasks(&program.tasks, format)
}
