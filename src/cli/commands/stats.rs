//! Statistics command implementation.

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, StatsArgs, StatsCommands};
use crate::core::KeyValueStore;
use crate::diary::DiaryStore;
use crate::error::DiaryError;
use crate::features::export::render_printable_summary;
use crate::features::stats::{render_week_lines, StatsEngine, WeekSummary};
use crate::output::{format_summary, to_json};

/// Execute stats subcommands.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn stats<S: KeyValueStore>(
    store: &DiaryStore<S>,
    args: &StatsArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    let engine = StatsEngine::new(store.program(), store.data());

    if args.print {
        let summary = engine.summary_on(today);
        return Ok(render_printable_summary(store.program(), &summary));
    }

    match args.command {
        None | Some(StatsCommands::Summary) => format_summary(&engine.summary_on(today), format),
        Some(StatsCommands::Weeks) => render_weeks(&engine.weekly_breakdown(), format),
        Some(StatsCommands::Streak) => render_streak(engine.current_streak_on(today), today, format),
    }
}

fn render_weeks(weeks: &[WeekSummary], format: OutputFormat) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Json => to_json(&weeks),
        OutputFormat::Pretty => {
            let mut output = vec!["🗓  WEEKLY CHECKPOINTS".bold().to_string(), "─".repeat(50)];
            output.extend(render_week_lines(weeks, 20));
            Ok(output.join("\n"))
        }
    }
}

fn render_streak(streak: u32, today: NaiveDate, format: OutputFormat) -> Result<String, DiaryError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "current_streak": streak,
            "as_of": today,
        })),
        OutputFormat::Pretty if streak == 0 => Ok(format!(
            "🔥 Current streak: {} (complete every task today to start one)",
            "0 days".dimmed()
        )),
        OutputFormat::Pretty => Ok(format!(
            "🔥 Current streak: {}",
            format!("{streak} days").green().bold()
        )),
    }
}
