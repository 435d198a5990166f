//! Serializable roster input as produced by external loaders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{parse_date, parse_weekday};
use super::person::Person;
use super::problem::RosterProblem;
use crate::error::{Result, RosterError};

/// One volunteer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub ideal_load: f64,
    pub available_dates: Vec<String>,
    #[serde(default)]
    pub unwanted_days: Vec<String>,
}

/// Shift dates plus volunteers, before validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProblemInput {
    pub dates: Vec<String>,
    pub people: Vec<PersonInput>,
}

impl TryFrom<PersonInput> for Person {
    type Error = RosterError;

    fn try_from(input: PersonInput) -> Result<Self> {
        let dates = input
            .available_dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<Vec<NaiveDate>>>()?;
        let days = input
            .unwanted_days
            .iter()
            .map(|d| parse_weekday(d))
            .collect::<Result<Vec<_>>>()?;
        Ok(Person::new(input.name, input.ideal_load)
            .with_available_dates(dates)
            .with_unwanted_days(days))
    }
}

impl TryFrom<ProblemInput> for RosterProblem {
    type Error = RosterError;

    fn try_from(input: ProblemInput) -> Result<Self> {
        let dates = input
            .dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<Vec<_>>>()?;
        let people = input
            .people
            .into_iter()
            .map(Person::try_from)
            .collect::<Result<Vec<_>>>()?;
        RosterProblem::new(dates, people)
    }
}
