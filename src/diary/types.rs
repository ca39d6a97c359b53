//! Diary data types.
//!
//! These types are the persisted document. Their JSON shape is:
//!
//! ```json
//! { "days": { "2024-01-01": { "tasks": {"workout": true}, "journal": "", "completed": false } } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recurring daily task. Identity is `id`; `label` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Stable identifier used as the key in day records.
    pub id: String,
    /// Human-readable description.
    pub label: String,
}

impl TaskTemplate {
    /// Create a new task template.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The state of one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    /// Task id to done flag, one entry per configured task.
    pub tasks: BTreeMap<String, bool>,
    /// Free-text journal entry.
    pub journal: String,
    /// True iff every configured task is done.
    pub completed: bool,
}

impl DayRecord {
    /// A fresh record with every task unchecked and an empty journal.
    #[must_use]
    pub fn empty(templates: &[TaskTemplate]) -> Self {
        Self {
            tasks: templates.iter().map(|t| (t.id.clone(), false)).collect(),
            journal: String::new(),
            completed: false,
        }
    }

    /// Recompute `completed` from the configured task ids.
    pub fn recompute(&mut self, templates: &[TaskTemplate]) {
        self.completed = templates
            .iter()
            .all(|t| self.tasks.get(&t.id).copied().unwrap_or(false));
    }

    /// Bring `tasks` in line with the configured templates.
    ///
    /// Missing ids are added unchecked, ids no longer configured are dropped
    /// and `completed` is recomputed. Returns `true` if anything changed.
    pub fn reconcile(&mut self, templates: &[TaskTemplate]) -> bool {
        let before = self.clone();

        self.tasks
            .retain(|id, _| templates.iter().any(|t| &t.id == id));
        for template in templates {
            self.tasks.entry(template.id.clone()).or_insert(false);
        }
        self.recompute(templates);

        *self != before
    }

    /// Number of checked tasks.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.tasks.values().filter(|done| **done).count()
    }

    /// Whether a task is checked. Unknown ids read as unchecked.
    #[must_use]
    pub fn is_checked(&self, task_id: &str) -> bool {
        self.tasks.get(task_id).copied().unwrap_or(false)
    }
}

/// The whole persisted diary: ISO date string to day record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryData {
    /// Day records keyed by `YYYY-MM-DD`.
    pub days: BTreeMap<String, DayRecord>,
}

impl DiaryData {
    /// Parse a persisted document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid diary document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize to the compact persisted form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> Vec<TaskTemplate> {
        vec![TaskTemplate::new("a", "Task A"), TaskTemplate::new("b", "Task B")]
    }

    #[test]
    fn test_empty_record() {
        let record = DayRecord::empty(&templates());
        assert_eq!(record.tasks.len(), 2);
        assert!(!record.is_checked("a"));
        assert!(record.journal.is_empty());
        assert!(!record.completed);
    }

    #[test]
    fn test_recompute() {
        let t = templates();
        let mut record = DayRecord::empty(&t);
        record.tasks.insert("a".to_string(), true);
        record.recompute(&t);
        assert!(!record.completed);

        record.tasks.insert("b".to_string(), true);
        record.recompute(&t);
        assert!(record.completed);
    }

    #[test]
    fn test_recompute_with_no_templates() {
        let mut record = DayRecord::default();
        record.recompute(&[]);
        assert!(record.completed);
    }

    #[test]
    fn test_reconcile_adds_and_drops() {
        let t = templates();
        let mut record = DayRecord::default();
        record.tasks.insert("a".to_string(), true);
        record.tasks.insert("retired".to_string(), true);
        record.completed = true;

        assert!(record.reconcile(&t));
        assert_eq!(record.tasks.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!record.is_checked("b"));
        assert!(!record.completed);

        assert!(!record.reconcile(&t));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let text = r#"{
            "version": 3,
            "days": {
                "2024-01-01": {"tasks": {"a": true}, "journal": "hi", "completed": false, "mood": 5}
            }
        }"#;
        let data = DiaryData::from_json(text).unwrap();
        let record = &data.days["2024-01-01"];
        assert!(record.is_checked("a"));
        assert_eq!(record.journal, "hi");
    }

    #[test]
    fn test_parse_missing_days() {
        let data = DiaryData::from_json("{}").unwrap();
        assert!(data.days.is_empty());
    }

    #[test]
    fn test_persisted_shape() {
        let mut data = DiaryData::default();
        data.days
            .insert("2024-01-01".to_string(), DayRecord::empty(&templates()));

        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(value["days"]["2024-01-01"]["tasks"]["a"], false);
        assert_eq!(value["days"]["2024-01-01"]["journal"], "");
        assert_eq!(value["days"]["2024-01-01"]["completed"], false);
    }
}
