//! Printable plain-text progress summary.

use crate::diary::Program;
use crate::features::stats::ProgressSummary;

/// Render the summary as uncolored text suitable for printing.
#[must_use]
pub fn render_printable_summary(program: &Program, summary: &ProgressSummary) -> String {
    let mut lines = vec![
        "Transformation Diary Summary".to_string(),
        "=".repeat(28),
        format!(
            "Program: {} days, {} to {}",
            program.duration_days,
            program.start_date.format("%Y-%m-%d"),
            program.end_date().format("%Y-%m-%d")
        ),
        String::new(),
        "Progress Overview".to_string(),
        "-".repeat(17),
        format!("Days Completed: {}", summary.days_completed),
        format!("Completion Rate: {}%", summary.completion_rate),
        format!("Current Streak: {} days", summary.current_streak),
        format!("Total Tasks Completed: {}", summary.total_tasks_completed),
        String::new(),
        "Weekly Progress".to_string(),
        "-".repeat(15),
    ];

    lines.extend(summary.weeks.iter().map(|w| {
        format!(
            "Week {} (Day {}-{}): {}/{} days completed ({}%)",
            w.week, w.start_day, w.end_day, w.completed_days, w.total_days, w.percent
        )
    }));

    lines.join("\n")
}
