//! Solver for duty rosters.
//!
//! This crate provides the search that turns a [`RosterProblem`] into a
//! schedule:
//! - Moves: [`ChangeMove`] (fill, reassign, unassign) and [`SwapMove`]
//! - [`RandomMoveSelector`] sampling candidate moves each step
//! - [`ConstructionPhase`]: deficit-first greedy initial assignment
//! - [`LocalSearchPhase`] with pluggable [`Acceptor`]s and an accepted-count forager
//! - Terminations: time, step count, unimproved step count, best score
//! - [`Solver`] running the phases under a state machine, and
//!   [`solve_parallel`] running isolated restarts on a rayon pool
//!
//! [`RosterProblem`]: dutyroster_core::RosterProblem

pub mod builder;
pub mod construction;
pub mod localsearch;
pub mod moves;
pub mod parallel;
pub mod phase;
pub mod scope;
pub mod selector;
pub mod solver;
pub mod stats;
pub mod termination;

pub use builder::{AcceptorBuilder, TerminationBuilder};
pub use construction::ConstructionPhase;
pub use localsearch::{
    AcceptedCountForager, Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    LocalSearchForager, LocalSearchPhase, SimulatedAnnealingAcceptor,
};
pub use moves::{ChangeKind, ChangeMove, Move, RosterMove, SwapMove};
pub use parallel::{solve_parallel, worker_seed, ParallelResult};
pub use phase::Phase;
pub use scope::{SolverRng, SolverScope};
pub use selector::RandomMoveSelector;
pub use solver::{Solver, SolverResult, SolverStatus};
pub use stats::{PhaseStats, SolverStats};
pub use termination::{
    BestScoreTermination, OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};
