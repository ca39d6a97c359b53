//! Calendar arithmetic for program days.
//!
//! A program day index is 1-based: day 1 is the start date, day `d` is
//! `start + (d - 1)` days. Any index maps to a date; indices outside the
//! program are not rejected here.

use chrono::{Days, Local, NaiveDate};

/// Days per checkpoint week.
pub const DAYS_PER_WEEK: u32 = 7;

/// Today's local calendar date, time of day dropped.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift `date` by `offset` days, saturating at the representable range.
#[must_use]
pub fn add_days(date: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        date.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    shifted.unwrap_or(if offset >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Calendar date of program day `day` for a program starting on `start`.
#[must_use]
pub fn date_for_index(start: NaiveDate, day: i64) -> NaiveDate {
    add_days(start, day.saturating_sub(1))
}

/// Program day index of `date`. May be zero or negative before `start`.
#[must_use]
pub fn index_for_date(start: NaiveDate, date: NaiveDate) -> i64 {
    (date - start).num_days() + 1
}

/// Storage key for a date: `YYYY-MM-DD`.
#[must_use]
pub fn iso_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Checkpoint week (1-based) containing program day `day`.
#[must_use]
pub const fn week_of(day: u32) -> u32 {
    day.div_ceil(DAYS_PER_WEEK)
}

/// First and last program day of checkpoint `week`, the last week cut
/// short at `duration`.
#[must_use]
pub fn week_bounds(week: u32, duration: u32) -> (u32, u32) {
    let start = week.saturating_sub(1).saturating_mul(DAYS_PER_WEEK).saturating_add(1);
    let end = week.saturating_mul(DAYS_PER_WEEK).min(duration);
    (start, end)
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
