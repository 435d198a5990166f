//! SwapMove - exchanges the occupants of two slots.

use dutyroster_core::{PersonIdx, Slot};
use dutyroster_scoring::{ChangeList, ScoreDirector, SlotChange};
use smallvec::{smallvec, SmallVec};

use super::Move;

/// Exchanges the person in `left` with the person in `right`.
///
/// The two slots belong to different shifts, so each person's shift count
/// is preserved. Useful for rebalancing spacing without touching load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    left: (usize, Slot),
    right: (usize, Slot),
}

impl SwapMove {
    pub fn new(left: (usize, Slot), right: (usize, Slot)) -> Self {
        Self { left, right }
    }

    fn occupant(director: &ScoreDirector, (shift, slot): (usize, Slot)) -> Option<PersonIdx> {
        director.working_solution().shift(shift).slot(slot)
    }

    fn partner(director: &ScoreDirector, (shift, slot): (usize, Slot)) -> Option<PersonIdx> {
        director.working_solution().shift(shift).slot(slot.other())
    }
}

impl Move for SwapMove {
    fn is_doable(&self, director: &ScoreDirector) -> bool {
        if self.left.0 == self.right.0 {
            return false;
        }
        let left = Self::occupant(director, self.left);
        let right = Self::occupant(director, self.right);
        if left == right {
            return false;
        }
        let collides = |incoming: Option<PersonIdx>, target| {
            incoming.is_some() && incoming == Self::partner(director, target)
        };
        !collides(right, self.left) && !collides(left, self.right)
    }

    fn changes(&self, director: &ScoreDirector) -> ChangeList {
        let left = Self::occupant(director, self.left);
        let right = Self::occupant(director, self.right);
        smallvec![
            SlotChange::new(self.left.0, self.left.1, right),
            SlotChange::new(self.right.0, self.right.1, left),
        ]
    }

    fn shift_indices(&self) -> SmallVec<[usize; 2]> {
        smallvec![self.left.0, self.right.0]
    }
}
