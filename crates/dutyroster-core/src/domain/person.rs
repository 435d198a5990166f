//! Volunteers available for duty.

use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate, Weekday};

/// Approximate days per month used to derive the expected gap between shifts.
pub const DAYS_PER_MONTH: f64 = 28.0;

/// A volunteer who can be assigned to shift slots.
///
/// Identity is the name: two `Person` values with the same name are equal
/// and hash identically, whatever their other attributes.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    ideal_load: f64,
    available_dates: BTreeSet<NaiveDate>,
    unwanted_days: HashSet<Weekday>,
}

impl Person {
    /// Creates a person with the given ideal monthly load and no availability.
    pub fn new(name: impl Into<String>, ideal_load: f64) -> Self {
        Self {
            name: name.into(),
            ideal_load,
            available_dates: BTreeSet::new(),
            unwanted_days: HashSet::new(),
        }
    }

    pub fn with_available_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.available_dates.extend(dates);
        self
    }

    pub fn with_unwanted_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.unwanted_days.extend(days);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shifts desired per month.
    pub fn ideal_load(&self) -> f64 {
        self.ideal_load
    }

    pub fn available_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.available_dates
    }

    pub fn unwanted_days(&self) -> &HashSet<Weekday> {
        &self.unwanted_days
    }

    /// Returns true if the person can serve on `date`.
    #[inline]
    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available_dates.contains(&date)
    }

    /// Returns true if `date` falls on a weekday the person prefers to avoid.
    #[inline]
    pub fn is_unwanted_date(&self, date: NaiveDate) -> bool {
        self.unwanted_days.contains(&date.weekday())
    }

    /// Target number of shifts over a horizon of `months`.
    #[inline]
    pub fn ideal_shift_count(&self, months: f64) -> f64 {
        self.ideal_load * months
    }

    /// Expected number of days between two consecutive shifts, to two decimals.
    ///
    /// An ideal load of 1.0 gives 28 days, 2.0 gives 14 days.
    pub fn expected_gap_days(&self) -> f64 {
        (DAYS_PER_MONTH / self.ideal_load * 100.0).round() / 100.0
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
