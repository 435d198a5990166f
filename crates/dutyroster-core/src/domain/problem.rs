//! Validated roster input.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use super::person::Person;
use super::schedule::Schedule;
use super::shift::Shift;
use crate::error::{Result, RosterError};

/// Names of the people available on one shift date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub date: NaiveDate,
    pub available: Vec<String>,
}

/// Shift dates and people that passed validation.
///
/// Construction enforces the input contract: unique names, unique dates,
/// positive ideal loads, non-empty availability, and the union of all
/// availability dates being exactly the set of shift dates.
#[derive(Debug, Clone)]
pub struct RosterProblem {
    dates: Vec<NaiveDate>,
    people: Vec<Person>,
}

impl RosterProblem {
    /// Validates and wraps the input.
    pub fn new(dates: Vec<NaiveDate>, people: Vec<Person>) -> Result<Self> {
        validate(&dates, &people)?;
        Ok(Self { dates, people })
    }

    /// Shift dates in input order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Builds a schedule with every slot unassigned.
    pub fn to_schedule(&self) -> Schedule {
        let shifts = self.dates.iter().copied().map(Shift::new).collect();
        Schedule::new(self.people.clone(), shifts)
    }

    /// Lists, per shift date, who is available.
    pub fn availability_overview(&self) -> Vec<AvailabilityEntry> {
        self.dates
            .iter()
            .map(|&date| AvailabilityEntry {
                date,
                available: self
                    .people
                    .iter()
                    .filter(|p| p.is_available(date))
                    .map(|p| p.name().to_string())
                    .collect(),
            })
            .collect()
    }
}

fn validate(dates: &[NaiveDate], people: &[Person]) -> Result<()> {
    if dates.is_empty() || people.is_empty() {
        return Err(RosterError::EmptyProblem);
    }

    let mut seen_dates = HashSet::with_capacity(dates.len());
    for &date in dates {
        if !seen_dates.insert(date) {
            return Err(RosterError::DuplicateShift(date));
        }
    }

    let mut seen_names = HashSet::with_capacity(people.len());
    for person in people {
        if !seen_names.insert(person.name()) {
            return Err(RosterError::DuplicatePerson(person.name().to_string()));
        }
        let load = person.ideal_load();
        if !load.is_finite() || load <= 0.0 {
            return Err(RosterError::InvalidIdealLoad {
                name: person.name().to_string(),
                value: load,
            });
        }
        if person.available_dates().is_empty() {
            return Err(RosterError::NoAvailability(person.name().to_string()));
        }
    }

    let from_shifts: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let from_people: BTreeSet<NaiveDate> = people
        .iter()
        .flat_map(|p| p.available_dates().iter().copied())
        .collect();

    if from_shifts != from_people {
        return Err(RosterError::DateMismatch {
            only_in_shifts: from_shifts.difference(&from_people).copied().collect(),
            only_in_people: from_people.difference(&from_shifts).copied().collect(),
        });
    }

    Ok(())
}
