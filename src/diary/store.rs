//! The diary store: day records keyed by calendar date.
//!
//! Records are created lazily with every task unchecked. Every mutation is
//! saved through the [`KeyValueStore`] before it returns. Lazily created
//! records are only marked dirty and written by [`DiaryStore::flush`].

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::program::Program;
use super::types::{DayRecord, DiaryData, TaskTemplate};
use crate::core::{calendar, KeyValueStore};
use crate::error::DiaryError;

/// Checked/total counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    /// Tasks checked.
    pub checked: usize,
    /// Tasks configured.
    pub total: usize,
    /// `round(checked / total * 100)`.
    pub percent: u32,
}

/// Owner of the diary document and its persistence.
pub struct DiaryStore<S: KeyValueStore> {
    backend: S,
    key: String,
    program: Program,
    data: DiaryData,
    dirty: bool,
}

impl<S: KeyValueStore> DiaryStore<S> {
    /// Load the diary stored under `key`.
    ///
    /// A missing or unparseable document yields an empty diary. An
    /// unparseable one is first copied to `<key>.corrupt` so it can be
    /// recovered by hand. Records are reconciled with the program's task set.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(backend: S, key: impl Into<String>, program: Program) -> Result<Self, DiaryError> {
        let key = key.into();
        let data = match backend.get(&key)? {
            None => {
                debug!(%key, "no stored diary, starting empty");
                DiaryData::default()
            }
            Some(raw) => match DiaryData::from_json(&raw) {
                Ok(data) => data,
                Err(e) => {
                    warn!(%key, error = %e, "stored diary is unreadable, starting empty");
                    let backup_key = format!("{key}.corrupt");
                    if let Err(e) = backend.set(&backup_key, &raw) {
                        warn!(%backup_key, error = %e, "failed to back up unreadable diary");
                    }
                    DiaryData::default()
                }
            },
        };

        let mut store = Self {
            backend,
            key,
            program,
            data,
            dirty: false,
        };
        store.reconcile();
        debug!(days = store.data.days.len(), "diary loaded");

        Ok(store)
    }

    /// Align every record with the configured task set.
    fn reconcile(&mut self) {
        let templates = &self.program.tasks;
        let changed = self
            .data
            .days
            .values_mut()
            .map(|record| record.reconcile(templates))
            .filter(|changed| *changed)
            .count();

        if changed > 0 {
            info!(records = changed, "reconciled day records with configured tasks");
            self.dirty = true;
        }
    }

    /// The program this diary belongs to.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Snapshot of the whole document.
    #[must_use]
    pub const fn data(&self) -> &DiaryData {
        &self.data
    }

    /// Whether there are changes not yet written.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The record for program day `day`, without creating it.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        self.data.days.get(&self.program.key_for_index(day))
    }

    /// The record for program day `day`, created empty if absent.
    pub fn ensure_day(&mut self, day: u32) -> &DayRecord {
        let key = self.program.key_for_index(day);
        let templates = &self.program.tasks;
        let dirty = &mut self.dirty;

        self.data.days.entry(key).or_insert_with_key(|key| {
            debug!(%key, "creating day record");
            *dirty = true;
            DayRecord::empty(templates)
        })
    }

    /// Check or uncheck one task.
    ///
    /// # Errors
    ///
    /// Returns [`DiaryError::UnknownTask`] without touching the diary if
    /// `task_id` is not configured, or a backend error if saving fails.
    pub fn set_task(&mut self, day: u32, task_id: &str, value: bool) -> Result<(), DiaryError> {
        if !self.program.has_task(task_id) {
            return Err(DiaryError::UnknownTask(task_id.to_string()));
        }

        debug!(day, task_id, value, "set task");
        self.mutate(day, |record, _| {
            record.tasks.insert(task_id.to_string(), value);
        })
    }

    /// Check or uncheck every configured task.
    ///
    /// # Errors
    ///
    /// Returns a backend error if saving fails.
    pub fn set_all_tasks(&mut self, day: u32, value: bool) -> Result<(), DiaryError> {
        debug!(day, value, "set all tasks");
        self.mutate(day, |record, templates| {
            for template in templates {
                record.tasks.insert(template.id.clone(), value);
            }
        })
    }

    /// Replace the journal text verbatim.
    ///
    /// # Errors
    ///
    /// Returns a backend error if saving fails.
    pub fn set_journal(&mut self, day: u32, text: &str) -> Result<(), DiaryError> {
        debug!(day, len = text.len(), "set journal");
        self.mutate(day, |record, _| {
            record.journal = text.to_string();
        })
    }

    /// Reset a day to unchecked tasks and an empty journal.
    ///
    /// Unconditional; confirmation is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns a backend error if saving fails.
    pub fn clear_day(&mut self, day: u32) -> Result<(), DiaryError> {
        debug!(day, "clear day");
        self.mutate(day, |record, templates| {
            *record = DayRecord::empty(templates);
        })
    }

    /// Checked/total counts for program day `day`.
    #[must_use]
    pub fn day_progress(&self, day: u32) -> DayProgress {
        let total = self.program.tasks.len();
        let checked = self.day(day).map_or(0, |record| {
            self.program
                .tasks
                .iter()
                .filter(|t| record.is_checked(&t.id))
                .count()
        });

        DayProgress {
            checked,
            total,
            percent: calendar::percent(checked, total),
        }
    }

    /// Write the diary if anything changed since the last save.
    ///
    /// # Errors
    ///
    /// Returns a backend error if saving fails; the diary stays dirty.
    pub fn flush(&mut self) -> Result<(), DiaryError> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }

    fn mutate<F>(&mut self, day: u32, apply: F) -> Result<(), DiaryError>
    where
        F: FnOnce(&mut DayRecord, &[TaskTemplate]),
    {
        let key = self.program.key_for_index(day);
        let templates = &self.program.tasks;
        let record = self
            .data
            .days
            .entry(key)
            .or_insert_with(|| DayRecord::empty(templates));

        apply(record, templates);
        record.recompute(templates);
        self.dirty = true;

        self.save()
    }

    fn save(&mut self) -> Result<(), DiaryError> {
        let json = self.data.to_json()?;
        self.backend.set(&self.key, &json)?;
        self.dirty = false;
        trace!(bytes = json.len(), key = %self.key, "diary saved");
        Ok(())
    }
}
