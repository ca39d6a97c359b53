//! Statistics module.
//!
//! Derives read-only aggregates from the diary:
//! - Days completed and completion rate
//! - Current streak
//! - Total tasks completed
//! - Weekly checkpoint percentages

pub mod metrics;
pub mod visualization;

pub use metrics::{ProgressSummary, StatsEngine, WeekSummary};
pub use visualization::{render_day_strip, render_progress_bar, render_sparkline, render_week_lines};
