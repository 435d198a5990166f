//! Moves: atomic transformations of the schedule explored by local search.
//!
//! A move describes itself as a list of [`SlotChange`]s. The score director
//! applies them incrementally and returns the list that undoes them, so a
//! move is evaluated by apply, read score, apply undo.
//!
//! - [`ChangeMove`]: sets one slot (fill, reassign or unassign)
//! - [`SwapMove`]: exchanges the occupants of two slots in different shifts
//! - [`RosterMove`]: union of both, used by the move selector

mod change;
mod swap;


use std::fmt::Debug;

use dutyroster_scoring::{ChangeList, ScoreDirector};
use smallvec::SmallVec;

pub use change::{ChangeKind, ChangeMove};
pub use swap::SwapMove;

/// A move that modifies one or more slots.
pub trait Move: Send + Sync + Debug {
    /// Returns true if this move changes the schedule without trivially
    /// putting one person in both slots of a shift.
    fn is_doable(&self, director: &ScoreDirector) -> bool;

    /// Slot changes this move makes, in application order.
    fn changes(&self, director: &ScoreDirector) -> ChangeList;

    /// Shifts touched by this move.
    fn shift_indices(&self) -> SmallVec<[usize; 2]>;

    /// Executes this move and returns the changes that undo it.
    fn do_move(&self, director: &mut ScoreDirector) -> ChangeList {
        let changes = self.changes(director);
        director.apply(&changes)
    }
}

/// A change or a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterMove {
    Change(ChangeMove),
    Swap(SwapMove),
}

impl From<ChangeMove> for RosterMove {
    fn from(m: ChangeMove) -> Self {
        Self::Change(m)
    }
}

impl From<SwapMove> for RosterMove {
    fn from(m: SwapMove) -> Self {
        Self::Swap(m)
    }
}

impl Move for RosterMove {
    fn is_doable(&self, director: &ScoreDirector) -> bool {
        match self {
            Self::Change(m) => m.is_doable(director),
            Self::Swap(m) => m.is_doable(director),
        }
    }

    fn changes(&self, director: &ScoreDirector) -> ChangeList {
        match self {
            Self::Change(m) => m.changes(director),
            Self::Swap(m) => m.changes(director),
        }
    }

    fn shift_indices(&self) -> SmallVec<[usize; 2]> {
        match self {
            Self::Change(m) => m.shift_indices(),
            Self::Swap(m) => m.shift_indices(),
        }
    }
}
