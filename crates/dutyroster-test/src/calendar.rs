//! Date helpers.

use chrono::{Days, NaiveDate};

/// Builds a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// `count` dates one week apart, starting at `start`.
pub fn weekly_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as u64)
        .map(|week| start + Days::new(week * 7))
        .collect()
}
