//! The habit program: a fixed number of days and the tasks done each day.

use chrono::NaiveDate;
use tracing::warn;

use super::types::TaskTemplate;
use crate::config::ProgramConfig;
use crate::core::calendar;
use crate::error::DiaryError;

/// The task set a new program starts with.
#[must_use]
pub fn default_task_templates() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("skin_am", "Skin AM: Cleanser + Moisturizer + Sunscreen"),
        TaskTemplate::new("skin_pm", "Skin PM: Cleanser + Moisturizer + Treatment"),
        TaskTemplate::new("workout", "Workout: Strength or Cardio (30-50 min)"),
        TaskTemplate::new("steps", "Walk: 7,000 - 10,000 steps"),
        TaskTemplate::new("water", "Hydration: Drink 3 - 4 L water"),
        TaskTemplate::new("sleep", "Sleep: 7 - 8 hrs (phone off 30 min before bed)"),
        TaskTemplate::new("meditate", "Mindset: Meditation (5 - 10 min)"),
        TaskTemplate::new("learning", "Skill practice: 30 - 60 min"),
    ]
}

/// A resolved, read-only program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Number of program days.
    pub duration_days: u32,
    /// Calendar date of day 1.
    pub start_date: NaiveDate,
    /// Daily task templates, in display order.
    pub tasks: Vec<TaskTemplate>,
}

impl Program {
    /// Create a program from explicit values.
    #[must_use]
    pub fn new(duration_days: u32, start_date: NaiveDate, tasks: Vec<TaskTemplate>) -> Self {
        Self {
            duration_days,
            start_date,
            tasks,
        }
    }

    /// Resolve a configured program, starting today if no start date is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &ProgramConfig, today: NaiveDate) -> Result<Self, DiaryError> {
        config.validate()?;

        let start_date = config.start_date.unwrap_or_else(|| {
            warn!(%today, "program.start_date is not set; the program starts today");
            today
        });

        Ok(Self::new(config.duration_days, start_date, config.tasks.clone()))
    }

    /// Calendar date of program day `day`.
    #[must_use]
    pub fn date_for_index(&self, day: u32) -> NaiveDate {
        calendar::date_for_index(self.start_date, i64::from(day))
    }

    /// Storage key of program day `day`.
    #[must_use]
    pub fn key_for_index(&self, day: u32) -> String {
        calendar::iso_key(self.date_for_index(day))
    }

    /// Program day for `today`, clamped to `1..=duration_days`.
    #[must_use]
    pub fn today_index(&self, today: NaiveDate) -> u32 {
        let index = calendar::index_for_date(self.start_date, today)
            .clamp(1, i64::from(self.duration_days.max(1)));
        u32::try_from(index).unwrap_or(1)
    }

    /// Calendar date of the last program day.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.date_for_index(self.duration_days)
    }

    /// Look up a task template by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&TaskTemplate> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Whether `id` is a configured task.
    #[must_use]
    pub fn has_task(&self, id: &str) -> bool {
        self.task(id).is_some()
    }

    /// Number of checkpoint weeks.
    #[must_use]
    pub const fn week_count(&self) -> u32 {
        calendar::week_of(self.duration_days)
    }
}
