use dutyroster_core::{PersonIdx, Slot};
use smallvec::SmallVec;

/// Sets one slot of one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotChange {
    pub shift: usize,
    pub slot: Slot,
    pub person: Option<PersonIdx>,
}

impl SlotChange {
    #[inline]
    pub const fn new(shift: usize, slot: Slot, person: Option<PersonIdx>) -> Self {
        Self {
            shift,
            slot,
            person,
        }
    }
}

/// Changes making up one move; a swap needs at most four.
pub type ChangeList = SmallVec<[SlotChange; 4]>;
