//! JSON output formatting for habit-diary.

use serde::Serialize;
use serde_json::json;

use super::DayListEntry;
use crate::diary::TaskTemplate;
use crate::error::DiaryError;

/// Format task templates as JSON
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[TaskTemplate]) -> Result<String, DiaryError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the program day list as JSON
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn format_day_list_json(entries: &[DayListEntry]) -> Result<String, DiaryError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `DiaryError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DiaryError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tasks_json() {
        let tasks = vec![TaskTemplate::new("water", "Drink water")];
        let json = format_tasks_json(&tasks).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["id"], "water");
    }
}
