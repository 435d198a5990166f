//! Local search phase
//!
//! Improves the constructed schedule by repeatedly sampling moves,
//! accepting some of them according to an acceptor, and applying the best
//! accepted one.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
pub use forager::{AcceptedCountForager, LocalSearchForager};
pub use phase::LocalSearchPhase;
