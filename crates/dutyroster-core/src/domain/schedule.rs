//! The planning state searched by the solver.

use std::fmt;
use std::sync::Arc;

use super::person::Person;
use super::shift::{PersonIdx, Shift, Slot};
use crate::error::RosterError;

/// Slot contents of every shift, in shift order.
pub type SlotSnapshot = Vec<[Option<PersonIdx>; 2]>;

/// People plus the ordered shifts with their current slot values.
///
/// People are immutable facts shared between copies of a schedule, so
/// cloning a schedule only copies the slot state.
#[derive(Debug, Clone)]
pub struct Schedule {
    people: Arc<[Person]>,
    shifts: Vec<Shift>,
}

impl Schedule {
    /// Creates a schedule from people and shifts.
    pub fn new(people: impl Into<Arc<[Person]>>, shifts: Vec<Shift>) -> Self {
        Self {
            people: people.into(),
            shifts,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    #[inline]
    pub fn person(&self, idx: PersonIdx) -> &Person {
        &self.people[idx]
    }

    #[inline]
    pub fn shift(&self, idx: usize) -> &Shift {
        &self.shifts[idx]
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Looks up a person by name.
    pub fn person_index(&self, name: &str) -> Option<PersonIdx> {
        self.people.iter().position(|p| p.name() == name)
    }

    /// Sets a slot and returns the previous occupant.
    #[inline]
    pub fn assign(
        &mut self,
        shift: usize,
        slot: Slot,
        person: Option<PersonIdx>,
    ) -> Option<PersonIdx> {
        self.shifts[shift].set_slot(slot, person)
    }

    /// Indices of the shifts `person` occupies, in shift order.
    pub fn shifts_of(&self, person: PersonIdx) -> impl Iterator<Item = usize> + '_ {
        self.shifts
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.contains(person))
            .map(|(i, _)| i)
    }

    /// Number of shifts where `person` occupies a slot.
    pub fn assigned_count(&self, person: PersonIdx) -> usize {
        self.shifts_of(person).count()
    }

    /// Number of empty slots over all shifts.
    pub fn unassigned_slot_count(&self) -> usize {
        self.shifts
            .iter()
            .flat_map(|s| s.slots())
            .filter(Option::is_none)
            .count()
    }

    /// Copies the current slot state.
    pub fn snapshot(&self) -> SlotSnapshot {
        self.shifts.iter().map(Shift::slots).collect()
    }

    /// Restores a slot state taken from this schedule.
    ///
    /// A snapshot of a different length is rejected and leaves the slots
    /// untouched.
    pub fn restore(&mut self, snapshot: &[[Option<PersonIdx>; 2]]) -> Result<(), RosterError> {
        if snapshot.len() != self.shifts.len() {
            return Err(RosterError::SnapshotMismatch {
                expected: self.shifts.len(),
                actual: snapshot.len(),
            });
        }
        for (shift, slots) in self.shifts.iter_mut().zip(snapshot) {
            shift.set_slot(Slot::A, slots[0]);
            shift.set_slot(Slot::B, slots[1]);
        }
        Ok(())
    }

    fn name_of(&self, idx: Option<PersonIdx>) -> &str {
        idx.map(|i| self.people[i].name()).unwrap_or("-")
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in &self.shifts {
            writeln!(
                f,
                "{}: {}, {}",
                shift.date(),
                self.name_of(shift.person_a()),
                self.name_of(shift.person_b())
            )?;
        }
        Ok(())
    }
}
