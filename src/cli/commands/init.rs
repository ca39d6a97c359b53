//! Init command implementation.

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::DiaryError;
use crate::output::to_json;

/// Execute init command
///
/// Writes `config` to the config file with the start date pinned to
/// `start` (or `today`) and the duration overridden if given.
///
/// # Errors
///
/// Returns an error if a config file exists and `force` is false, if the
/// resulting program is invalid, or if the file cannot be written.
pub fn init(
    paths: &Paths,
    config: &Config,
    start: Option<NaiveDate>,
    duration: Option<u32>,
    force: bool,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    if paths.config_file.exists() && !force {
        return Err(DiaryError::Config(format!(
            "{} already exists; pass --force to overwrite it",
            paths.config_file.display()
        )));
    }

    let mut config = config.clone();
    config.program.start_date = Some(start.unwrap_or(today));
    if let Some(duration) = duration {
        config.program.duration_days = duration;
    }
    config.program.validate()?;

    paths.ensure_dirs()?;
    config.save_to_path(&paths.config_file)?;

    match format {
        OutputFormat::Json => to_json(&config.program),
        OutputFormat::Pretty => Ok(format!(
            "{} {}-day program starting {} ({} tasks)\nConfig: {}",
            "Initialized".green().bold(),
            config.program.duration_days,
            start.unwrap_or(today).format("%Y-%m-%d"),
            config.program.tasks.len(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_init_pins_today() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".habit-diary"));

        init(&paths, &Config::default(), None, None, false, today(), OutputFormat::Pretty).unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.program.start_date, Some(today()));
        assert_eq!(loaded.program.duration_days, 90);
    }

    #[test]
    fn test_init_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        init(&paths, &Config::default(), Some(start), Some(30), false, today(), OutputFormat::Json)
            .unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.program.start_date, Some(start));
        assert_eq!(loaded.program.duration_days, 30);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        init(&paths, &Config::default(), None, None, false, today(), OutputFormat::Pretty).unwrap();

        let again = init(&paths, &Config::default(), None, None, false, today(), OutputFormat::Pretty);
        assert!(matches!(again, Err(DiaryError::Config(_))));

        init(&paths, &Config::default(), None, Some(14), true, today(), OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.program.duration_days, 14);
    }

    #[test]
    fn test_init_rejects_zero_duration() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let result = init(&paths, &Config::default(), None, Some(0), false, today(), OutputFormat::Pretty);
        assert!(result.is_err());
        assert!(!paths.config_file.exists());
    }
}
