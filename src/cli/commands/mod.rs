//! Command implementations for habit-diary.
//!
//! This module contains the implementation of all CLI commands and the
//! dispatcher that wires them to the diary store.

mod completions;
mod day;
mod export;
mod init;
mod stats;

pub use completions::completions;
pub use day::{clear, confirm, days, journal, resolve_day, set_all, set_tasks, show, tasks};
pub use export::export;
pub use init::init;
pub use stats::stats;

use std::io::{self, Read};

use chrono::NaiveDate;

use crate::cli::args::{Commands, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::KeyValueStore;
use crate::diary::{DiaryStore, Program};
use crate::error::DiaryError;
use crate::storage::Database;

/// Open the diary store configured by `config`.
///
/// # Errors
///
/// Returns an error if the program is invalid or the database cannot be opened.
pub fn open_store(
    paths: &Paths,
    config: &Config,
    today: NaiveDate,
) -> Result<DiaryStore<Database>, DiaryError> {
    let program = Program::from_config(&config.program, today)?;
    paths.ensure_dirs()?;
    let db = Database::open_at(&paths.database)?;
    DiaryStore::load(db, config.storage.key.clone(), program)
}

/// Execute a command and return its output.
///
/// # Errors
///
/// Returns an error from the command, or if pending diary changes cannot be saved.
pub fn execute(
    command: Commands,
    paths: &Paths,
    config: &Config,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    match command {
        Commands::Init { start, duration, force } => {
            init(paths, config, start, duration, force, today, format)
        }
        Commands::Completions { shell } => completions(shell),
        command => {
            let mut store = open_store(paths, config, today)?;
            let output = execute_on_store(&mut store, command, paths, today, format)?;
            store.flush()?;
            Ok(output)
        }
    }
}

/// Execute a command that works on the diary store.
///
/// # Errors
///
/// Returns an error from the command.
pub fn execute_on_store<S: KeyValueStore>(
    store: &mut DiaryStore<S>,
    command: Commands,
    paths: &Paths,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    let program = store.program().clone();

    match command {
        Commands::Show(day) => show(store, resolve_day(day, &program, today)?, format),
        Commands::Days => days(store, today, format),
        Commands::Tasks => tasks(&program, format),
        Commands::Check { tasks, day } => {
            set_tasks(store, resolve_day(day, &program, today)?, &tasks, true, format)
        }
        Commands::Uncheck { tasks, day } => {
            set_tasks(store, resolve_day(day, &program, today)?, &tasks, false, format)
        }
        Commands::SelectAll(day) => set_all(store, resolve_day(day, &program, today)?, true, format),
        Commands::ClearAll(day) => set_all(store, resolve_day(day, &program, today)?, false, format),
        Commands::Journal { text, stdin, day } => {
            let day = resolve_day(day, &program, today)?;
            let text = if stdin {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Some(buf)
            } else {
                text
            };
            journal(store, day, text.as_deref(), format)
        }
        Commands::Clear { yes, day } => {
            let day = resolve_day(day, &program, today)?;
            let confirmed = yes
                || confirm(
                    &mut io::stdin().lock(),
                    &mut io::stderr(),
                    &format!("Clear all tasks and journal for day {day}?"),
                )?;
            clear(store, day, confirmed, format)
        }
        Commands::Stats(args) => stats(store, &args, today, format),
        Commands::Export { file, stdout } => {
            export(store, file, stdout, &paths.default_export_file(), format)
        }
        Commands::Init { .. } | Commands::Completions { .. } => Err(DiaryError::NotFound(
            "this command does not operate on the diary".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{DayArg, StatsArgs};
    use crate::diary::TaskTemplate;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.program.duration_days = 7;
        config.program.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        config.program.tasks = vec![TaskTemplate::new("A", "Task A"), TaskTemplate::new("B", "Task B")];
        config
    }

    #[test]
    fn test_execute_persists_between_runs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let config = config();

        execute(
            Commands::Check { tasks: vec!["A".to_string(), "B".to_string()], day: DayArg::default() },
            &paths,
            &config,
            today(),
            OutputFormat::Json,
        )
        .unwrap();

        let json = execute(
            Commands::Stats(StatsArgs { command: None, print: false }),
            &paths,
            &config,
            today(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["days_completed"], 1);
        assert_eq!(value["current_streak"], 1);
    }

    #[test]
    fn test_show_counts_as_recorded_day() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let config = config();

        execute(Commands::Show(DayArg { day: Some(2) }), &paths, &config, today(), OutputFormat::Json)
            .unwrap();

        let store = open_store(&paths, &config, today()).unwrap();
        assert!(store.day(2).is_some());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_clear_with_yes_skips_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let config = config();
        let mut store = open_store(&paths, &config, today()).unwrap();
        store.set_journal(3, "gone soon").unwrap();

        execute_on_store(
            &mut store,
            Commands::Clear { yes: true, day: DayArg::default() },
            &paths,
            today(),
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(store.day(3).unwrap().journal, "");
    }
}
