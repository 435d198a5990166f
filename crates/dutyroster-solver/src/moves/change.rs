//! ChangeMove - sets the person of one slot.

use std::fmt;

use dutyroster_core::{PersonIdx, Slot};
use dutyroster_scoring::{ChangeList, ScoreDirector, SlotChange};
use smallvec::{smallvec, SmallVec};

use super::Move;

/// What a change move does to its slot, relative to the current schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Empty slot receives a person.
    Fill,
    /// Occupied slot receives a different person.
    Reassign,
    /// Occupied slot is cleared.
    Unassign,
    /// The slot already holds the target value.
    NoOp,
}

/// Sets one slot of one shift to `person`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeMove {
    shift: usize,
    slot: Slot,
    person: Option<PersonIdx>,
}

impl ChangeMove {
    pub fn new(shift: usize, slot: Slot, person: Option<PersonIdx>) -> Self {
        Self {
            shift,
            slot,
            person,
        }
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn person(&self) -> Option<PersonIdx> {
        self.person
    }

    /// Classifies this move against the current slot value.
    pub fn kind(&self, director: &ScoreDirector) -> ChangeKind {
        let current = director.working_solution().shift(self.shift).slot(self.slot);
        match (current, self.person) {
            (None, Some(_)) => ChangeKind::Fill,
            (Some(a), Some(b)) if a != b => ChangeKind::Reassign,
            (Some(_), None) => ChangeKind::Unassign,
            _ => ChangeKind::NoOp,
        }
    }
}

impl fmt::Debug for ChangeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeMove")
            .field("shift", &self.shift)
            .field("slot", &self.slot)
            .field("person", &self.person)
            .finish()
    }
}

impl Move for ChangeMove {
    fn is_doable(&self, director: &ScoreDirector) -> bool {
        if self.kind(director) == ChangeKind::NoOp {
            return false;
        }
        let partner = director
            .working_solution()
            .shift(self.shift)
            .slot(self.slot.other());
        self.person.is_none() || self.person != partner
    }

    fn changes(&self, _director: &ScoreDirector) -> ChangeList {
        smallvec![SlotChange::new(self.shift, self.slot, self.person)]
    }

    fn shift_indices(&self) -> SmallVec<[usize; 2]> {
        smallvec![self.shift]
    }
}
