//! Terminal visualization for progress.
//!
//! Provides progress bars, sparklines and the program calendar strip.

use super::metrics::WeekSummary;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';

/// Render a horizontal progress bar for `percent` (0-100).
#[must_use]
pub fn render_progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    let mut bar = FULL_BLOCK.to_string().repeat(filled);
    bar.push_str(&LIGHT_SHADE.to_string().repeat(width - filled));
    bar
}

/// Render a sparkline (compact inline chart) of percentages.
#[must_use]
pub fn render_sparkline(values: &[u32]) -> String {
    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else if v >= 100 {
                FULL_BLOCK
            } else {
                BAR_CHARS[((v as usize * 7) / 100).clamp(1, 7)]
            }
        })
        .collect()
}

/// One line per checkpoint week: label, bar and counts.
#[must_use]
pub fn render_week_lines(weeks: &[WeekSummary], bar_width: usize) -> Vec<String> {
    weeks
        .iter()
        .map(|w| {
            format!(
                "Week {:>2} (Day {:>2}-{:>2}) {} {}/{} days ({}%)",
                w.week,
                w.start_day,
                w.end_day,
                render_progress_bar(w.percent, bar_width),
                w.completed_days,
                w.total_days,
                w.percent
            )
        })
        .collect()
}

/// Calendar strip of program days, seven per row.
///
/// `marks` holds one character per day, in program order.
#[must_use]
pub fn render_day_strip(marks: &[char]) -> String {
    marks
        .chunks(7)
        .enumerate()
        .map(|(row, chunk)| {
            let cells: String = chunk.iter().map(|c| format!(" {c}")).collect();
            format!("W{:<3}{cells}", row + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
