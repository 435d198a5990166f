//! Score director: owns the working schedule and keeps its score current.
//!
//! Every slot change goes through [`ScoreDirector::assign`], which rescores
//! only the changed shift and the people entering or leaving it. Moves are
//! evaluated by applying their [`SlotChange`]s, reading the score, and
//! applying the returned undo list.

mod change;
mod incremental;


pub use change::{ChangeList, SlotChange};
pub use incremental::ScoreDirector;
