//! Duty shifts with two person slots.

use chrono::{IsoWeek, NaiveDate};

use super::calendar::week_of;

/// Index of a person within [`Schedule::people`](super::Schedule::people).
pub type PersonIdx = usize;

/// One of the two person slots of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Both slots in order.
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }

    /// The other slot of the same shift.
    #[inline]
    pub const fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }
}

/// A two-person duty on a calendar date.
///
/// The date is the shift's identity. The slots hold weak references
/// (indices) into the schedule's people and are the only mutable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    date: NaiveDate,
    week: IsoWeek,
    slots: [Option<PersonIdx>; 2],
}

impl Shift {
    /// Creates an unassigned shift.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            week: week_of(date),
            slots: [None, None],
        }
    }

    /// Creates a shift with both slots preset.
    pub fn with_slots(date: NaiveDate, a: Option<PersonIdx>, b: Option<PersonIdx>) -> Self {
        Self {
            date,
            week: week_of(date),
            slots: [a, b],
        }
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// ISO week this shift falls in.
    #[inline]
    pub fn week(&self) -> IsoWeek {
        self.week
    }

    #[inline]
    pub fn slot(&self, slot: Slot) -> Option<PersonIdx> {
        self.slots[slot.index()]
    }

    #[inline]
    pub fn person_a(&self) -> Option<PersonIdx> {
        self.slots[0]
    }

    #[inline]
    pub fn person_b(&self) -> Option<PersonIdx> {
        self.slots[1]
    }

    #[inline]
    pub fn slots(&self) -> [Option<PersonIdx>; 2] {
        self.slots
    }

    /// Sets a slot and returns its previous occupant.
    #[inline]
    pub fn set_slot(&mut self, slot: Slot, person: Option<PersonIdx>) -> Option<PersonIdx> {
        std::mem::replace(&mut self.slots[slot.index()], person)
    }

    /// Returns true if `person` occupies either slot.
    #[inline]
    pub fn contains(&self, person: PersonIdx) -> bool {
        self.slots.contains(&Some(person))
    }

    /// Distinct occupants of this shift.
    pub fn occupants(&self) -> impl Iterator<Item = PersonIdx> + '_ {
        let [a, b] = self.slots;
        let b = if b == a { None } else { b };
        a.into_iter().chain(b)
    }

    /// Returns true if both slots are filled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
