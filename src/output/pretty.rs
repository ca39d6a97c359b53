use colored::Colorize;

use super::{DayListEntry, DayStatus, DayView};
use crate::diary::{Program, TaskTemplate};
use crate::features::stats::{
    render_day_strip, render_progress_bar, render_sparkline, render_week_lines, ProgressSummary,
};

/// Format a single day as pretty output
pub fn format_day_pretty(view: &DayView) -> String {
    let mut output = format!(
        "{} {}  {}  {}\n",
        "Day".bold(),
        view.day.to_string().bold(),
        format!("Week {}", view.week).dimmed(),
        view.date.format("%A, %B %-d, %Y").to_string().cyan()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in &view.tasks {
        let icon = if task.done {
            "[x]".green()
        } else {
            "[ ]".white()
        };
        let label = if task.done {
            task.label.green().to_string()
        } else {
            task.label.clone()
        };
        output.push_str(&format!("{} {}  {}\n", icon, label, task.id.dimmed()));
    }

    output.push('\n');
    let progress = format!(
        "{}/{} ({}%)",
        view.progress.checked, view.progress.total, view.progress.percent
    );
    output.push_str(&format!(
        "{} {} {}",
        "Progress".dimmed(),
        render_progress_bar(view.progress.percent, 20),
        if view.completed {
            progress.green().bold().to_string()
        } else {
            progress
        }
    ));

    if !view.journal.is_empty() {
        output.push_str(&format!("\n\n{}\n{}", "Journal".bold(), view.journal));
    }

    output
}

/// Format task templates as a pretty list
pub fn format_tasks_pretty(tasks: &[TaskTemplate]) -> String {
    let width = tasks.iter().map(|t| t.id.len()).max().unwrap_or(0);

    let mut output = format!("Tasks ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));

    for task in tasks {
        let id = format!("{:width$}", task.id, width = width);
        output.push_str(&format!("\n{}  {}", id.cyan(), task.label));
    }

    output
}

/// Format the program day list as a calendar strip followed by the days
pub fn format_day_list_pretty(program: &Program, entries: &[DayListEntry]) -> String {
    let marks: Vec<char> = entries
        .iter()
        .map(|e| match e.status {
            DayStatus::Completed => '●',
            DayStatus::Partial => '◐',
            DayStatus::Untouched => '·',
        })
        .collect();

    let mut output = format!(
        "{} ({} days from {})\n",
        "Program".bold(),
        program.duration_days,
        program.start_date.format("%Y-%m-%d")
    );
    output.push_str(&render_day_strip(&marks));
    output.push('\n');
    output.push_str(&"─".repeat(60));

    for entry in entries {
        let status = match entry.status {
            DayStatus::Completed => format!("{:<8}", "done").green(),
            DayStatus::Partial => format!("{:<8}", "partial").yellow(),
            DayStatus::Untouched => format!("{:<8}", "-").dimmed(),
        };
        let marker = if entry.today { "←".cyan().to_string() } else { String::new() };
        output.push_str(&format!(
            "\n{:>3}  {}  {} {}",
            entry.day,
            entry.date.format("%a %Y-%m-%d"),
            status,
            marker
        ));
    }

    output
}

/// Format the progress summary
pub fn format_summary_pretty(summary: &ProgressSummary) -> String {
    let mut output = vec![
        "📊 PROGRESS".bold().to_string(),
        "─".repeat(50),
        format!(
            "  Days completed: {}  Recorded: {}  Completion rate: {}%",
            summary.days_completed.to_string().green(),
            summary.days_recorded,
            summary.completion_rate
        ),
    ];

    let streak = if summary.current_streak > 0 {
        format!("{} days", summary.current_streak).green().to_string()
    } else {
        "0 days".dimmed().to_string()
    };
    output.push(format!(
        "  Current streak: {}  Tasks completed: {}",
        streak, summary.total_tasks_completed
    ));
    output.push(String::new());

    output.push("🗓  WEEKLY CHECKPOINTS".bold().to_string());
    output.push("─".repeat(50));
    let percents: Vec<u32> = summary.weeks.iter().map(|w| w.percent).collect();
    output.push(format!("  Trend: {}", render_sparkline(&percents)));
    output.extend(
        render_week_lines(&summary.weeks, 14)
            .into_iter()
            .map(|line| format!("  {line}")),
    );

    output.join("\n")
}
