//! Progress statistics derived from the diary.
//!
//! Everything here is computed on demand from a snapshot of the diary and
//! the program; nothing is stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar;
use crate::diary::{DayRecord, DiaryData, Program};

/// Completion of one checkpoint week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Week number, starting at 1.
    pub week: u32,
    /// First program day of the week.
    pub start_day: u32,
    /// Last program day of the week (truncated to the program length).
    pub end_day: u32,
    /// Days in the week with a completed record.
    pub completed_days: usize,
    /// Days in the week.
    pub total_days: usize,
    /// `round(completed_days / total_days * 100)`.
    pub percent: u32,
}

/// All headline numbers in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Records with every task done.
    pub days_completed: usize,
    /// Records present in the diary.
    pub days_recorded: usize,
    /// Percent of recorded days that are completed.
    pub completion_rate: u32,
    /// Consecutive completed days ending today.
    pub current_streak: u32,
    /// Checked tasks across all records.
    pub total_tasks_completed: usize,
    /// Per-week completion.
    pub weeks: Vec<WeekSummary>,
}

/// Read-only statistics over a diary snapshot.
#[derive(Debug, Clone, Copy)]
pub struct StatsEngine<'a> {
    program: &'a Program,
    data: &'a DiaryData,
}

impl<'a> StatsEngine<'a> {
    /// Create an engine over `data` for `program`.
    #[must_use]
    pub const fn new(program: &'a Program, data: &'a DiaryData) -> Self {
        Self { program, data }
    }

    fn record_on(&self, date: NaiveDate) -> Option<&'a DayRecord> {
        self.data.days.get(&calendar::iso_key(date))
    }

    fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.record_on(date).is_some_and(|record| record.completed)
    }

    /// Number of records marked completed.
    #[must_use]
    pub fn completed_day_count(&self) -> usize {
        self.data.days.values().filter(|r| r.completed).count()
    }

    /// Number of records in the diary, completed or not.
    #[must_use]
    pub fn total_day_count(&self) -> usize {
        self.data.days.len()
    }

    /// Completed records as a rounded percent of all records, 0 if none.
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        calendar::percent(self.completed_day_count(), self.total_day_count())
    }

    /// Current streak as of the local date.
    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak_on(calendar::today())
    }

    /// Consecutive completed days ending at `today`.
    ///
    /// Walks back from `today` and stops at the first missing or incomplete
    /// day. The walk is capped at the program length.
    #[must_use]
    pub fn current_streak_on(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        for offset in 0..self.program.duration_days {
            let date = calendar::add_days(today, -i64::from(offset));
            if !self.is_completed_on(date) {
                break;
            }
            streak += 1;
        }
        streak
    }

    /// Checked tasks summed over every record.
    #[must_use]
    pub fn total_tasks_completed(&self) -> usize {
        self.data.days.values().map(DayRecord::checked_count).sum()
    }

    /// Completion per 7-day checkpoint, by program day.
    #[must_use]
    pub fn weekly_breakdown(&self) -> Vec<WeekSummary> {
        let duration = self.program.duration_days;

        (1..=self.program.week_count())
            .map(|week| {
                let (start_day, end_day) = calendar::week_bounds(week, duration);
                let completed_days = (start_day..=end_day)
                    .filter(|&day| self.is_completed_on(self.program.date_for_index(day)))
                    .count();
                let total_days = (end_day - start_day + 1) as usize;

                WeekSummary {
                    week,
                    start_day,
                    end_day,
                    completed_days,
                    total_days,
                    percent: calendar::percent(completed_days, total_days),
                }
            })
            .collect()
    }

    /// All headline numbers as of the local date.
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.summary_on(calendar::today())
    }

    /// All headline numbers, with the streak measured from `today`.
    #[must_use]
    pub fn summary_on(&self, today: NaiveDate) -> ProgressSummary {
        ProgressSummary {
            days_completed: self.completed_day_count(),
            days_recorded: self.total_day_count(),
            completion_rate: self.completion_rate(),
            current_streak: self.current_streak_on(today),
            total_tasks_completed: self.total_tasks_completed(),
            weeks: self.weekly_breakdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::TaskTemplate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn program(duration: u32) -> Program {
        Program::new(
            duration,
            date(2024, 1, 1),
            vec![TaskTemplate::new("A", "Task A"), TaskTemplate::new("B", "Task B")],
        )
    }

    fn record(a: bool, b: bool) -> DayRecord {
        let mut record = DayRecord::default();
        record.tasks.insert("A".to_string(), a);
        record.tasks.insert("B".to_string(), b);
        record.completed = a && b;
        record
    }

    fn data(days: &[(&str, DayRecord)]) -> DiaryData {
        let mut data = DiaryData::default();
        for (key, record) in days {
            data.days.insert((*key).to_string(), record.clone());
        }
        data
    }

    #[test]
    fn test_empty_diary() {
        let program = program(7);
        let data = DiaryData::default();
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.completed_day_count(), 0);
        assert_eq!(stats.total_day_count(), 0);
        assert_eq!(stats.completion_rate(), 0);
        assert_eq!(stats.total_tasks_completed(), 0);
        assert_eq!(stats.current_streak_on(date(2024, 1, 3)), 0);
    }

    #[test]
    fn test_single_completed_day() {
        let program = program(7);
        let data = data(&[("2024-01-01", record(true, true))]);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.completed_day_count(), 1);
        assert_eq!(stats.total_day_count(), 1);
        assert_eq!(stats.completion_rate(), 100);
        assert_eq!(stats.total_tasks_completed(), 2);
    }

    #[test]
    fn test_completion_rate_uses_recorded_days_only() {
        let program = program(90);
        let data = data(&[
            ("2024-01-01", record(true, true)),
            ("2024-01-02", record(true, false)),
            ("2024-01-03", record(false, false)),
        ]);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.completion_rate(), 33);
        assert_eq!(stats.total_tasks_completed(), 3);
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let program = program(90);
        let data = data(&[
            ("2024-01-01", record(true, true)),
            ("2024-01-03", record(true, true)),
            ("2024-01-04", record(true, true)),
            ("2024-01-05", record(true, true)),
        ]);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.current_streak_on(date(2024, 1, 5)), 3);
        assert_eq!(stats.current_streak_on(date(2024, 1, 3)), 1);
        assert_eq!(stats.current_streak_on(date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_streak_zero_when_today_incomplete() {
        let program = program(90);
        let data = data(&[
            ("2024-01-01", record(true, true)),
            ("2024-01-02", record(true, true)),
            ("2024-01-03", record(true, false)),
        ]);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.current_streak_on(date(2024, 1, 3)), 0);
        assert_eq!(stats.current_streak_on(date(2024, 1, 4)), 0);
    }

    #[test]
    fn test_streak_capped_at_duration() {
        let program = program(3);
        let days: Vec<(String, DayRecord)> = (1..=10)
            .map(|d| (format!("2024-01-{d:02}"), record(true, true)))
            .collect();
        let borrowed: Vec<(&str, DayRecord)> =
            days.iter().map(|(k, r)| (k.as_str(), r.clone())).collect();
        let data = data(&borrowed);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.current_streak_on(date(2024, 1, 10)), 3);
    }

    #[test]
    fn test_streak_far_outside_program_terminates() {
        let program = program(90);
        let data = data(&[("2024-01-01", record(true, true))]);
        let stats = StatsEngine::new(&program, &data);

        assert_eq!(stats.current_streak_on(date(2030, 6, 1)), 0);
    }

    #[test]
    fn test_weekly_breakdown_truncates_last_week() {
        let program = program(10);
        let data = DiaryData::default();
        let weeks = StatsEngine::new(&program, &data).weekly_breakdown();

        assert_eq!(weeks.len(), 2);
        assert_eq!((weeks[0].start_day, weeks[0].end_day, weeks[0].total_days), (1, 7, 7));
        assert_eq!((weeks[1].start_day, weeks[1].end_day, weeks[1].total_days), (8, 10, 3));
        assert!(weeks.iter().all(|w| w.completed_days == 0 && w.percent == 0));
    }

    #[test]
    fn test_weekly_breakdown_counts_by_program_day() {
        let program = program(10);
        let data = data(&[
            ("2024-01-01", record(true, true)),
            ("2024-01-02", record(true, false)),
            ("2024-01-08", record(true, true)),
            ("2024-01-09", record(true, true)),
            // Outside the program: ignored by the breakdown.
            ("2024-01-15", record(true, true)),
        ]);
        let weeks = StatsEngine::new(&program, &data).weekly_breakdown();

        assert_eq!(weeks[0].completed_days, 1);
        assert_eq!(weeks[0].percent, 14);
        assert_eq!(weeks[1].completed_days, 2);
        assert_eq!(weeks[1].percent, 67);
    }

    #[test]
    fn test_ninety_day_program_has_thirteen_weeks() {
        let program = program(90);
        let data = DiaryData::default();
        let weeks = StatsEngine::new(&program, &data).weekly_breakdown();

        assert_eq!(weeks.len(), 13);
        assert_eq!(weeks[12].start_day, 85);
        assert_eq!(weeks[12].end_day, 90);
        assert_eq!(weeks[12].total_days, 6);
    }

    #[test]
    fn test_summary() {
        let program = program(7);
        let data = data(&[
            ("2024-01-01", record(true, true)),
            ("2024-01-02", record(true, true)),
        ]);
        let summary = StatsEngine::new(&program, &data).summary_on(date(2024, 1, 2));

        assert_eq!(summary.days_completed, 2);
        assert_eq!(summary.days_recorded, 2);
        assert_eq!(summary.completion_rate, 100);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.total_tasks_completed, 4);
        assert_eq!(summary.weeks.len(), 1);
        assert_eq!(summary.weeks[0].percent, 29);
    }
}
