//! Scopes hold the mutable state of one solve.

mod phase;
mod solver;


pub use phase::PhaseScope;
pub use solver::{SolverRng, SolverScope};
