//! Constraint scoring for duty rosters.
//!
//! This crate provides:
//! - One pure function per roster constraint ([`constraints`])
//! - [`RosterConstraints`] for weighted full scoring and score explanations
//! - [`ScoreDirector`] for incremental scoring of slot changes
//!
//! Hard constraints: distinct slots, every slot staffed, availability, no
//! person twice in the same ISO week, everyone serves at least once. Soft constraints: ideal
//! monthly load, well-distributed shifts, unwanted weekdays.

pub mod analysis;
pub mod constraints;
pub mod director;
pub mod weights;


pub use analysis::{ConstraintAnalysis, ScoreExplanation};
pub use constraints::RosterConstraints;
pub use director::{ChangeList, ScoreDirector, SlotChange};
pub use weights::ConstraintWeights;
