//! Random move selection.

use dutyroster_core::{PersonIdx, Slot};
use dutyroster_scoring::ScoreDirector;
use rand::Rng;

use crate::moves::{ChangeMove, RosterMove, SwapMove};
use crate::scope::SolverRng;

/// Samples a bounded set of random moves per step.
///
/// Each candidate is a swap with probability `swap_probability`, an
/// unassign with probability `unassign_probability`, and otherwise a change
/// to a person other than the slot's current occupant and its partner in
/// the same shift. Availability is not filtered; the score penalizes
/// unavailable picks.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    sample_size: usize,
    swap_probability: f64,
    unassign_probability: f64,
}

impl RandomMoveSelector {
    pub fn new(sample_size: usize, swap_probability: f64, unassign_probability: f64) -> Self {
        Self {
            sample_size: sample_size.max(1),
            swap_probability: swap_probability.clamp(0.0, 1.0),
            unassign_probability: unassign_probability.clamp(0.0, 1.0),
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Appends up to `sample_size` moves to `out`.
    ///
    /// Fewer moves are produced when the schedule leaves no choice, e.g.
    /// when it has no shifts or only two people.
    pub fn sample(&self, director: &ScoreDirector, rng: &mut SolverRng, out: &mut Vec<RosterMove>) {
        let schedule = director.working_solution();
        let shift_count = schedule.shift_count();
        let person_count = schedule.person_count();
        if shift_count == 0 || person_count == 0 {
            return;
        }

        for _ in 0..self.sample_size {
            let roll = rng.random::<f64>();
            let shift = rng.random_range(0..shift_count);
            let slot = random_slot(rng);

            if roll < self.swap_probability {
                if shift_count < 2 {
                    continue;
                }
                let mut other = rng.random_range(0..shift_count - 1);
                if other >= shift {
                    other += 1;
                }
                out.push(SwapMove::new((shift, slot), (other, random_slot(rng))).into());
            } else if roll < self.swap_probability + self.unassign_probability {
                if schedule.shift(shift).slot(slot).is_some() {
                    out.push(ChangeMove::new(shift, slot, None).into());
                }
            } else {
                let occupants = schedule.shift(shift).slots();
                if let Some(person) = pick_other(rng, person_count, &occupants) {
                    out.push(ChangeMove::new(shift, slot, Some(person)).into());
                }
            }
        }
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new(24, 0.35, 0.02)
    }
}

fn random_slot(rng: &mut SolverRng) -> Slot {
    if rng.random_bool(0.5) {
        Slot::A
    } else {
        Slot::B
    }
}

/// Uniformly picks a person not in `excluded`.
fn pick_other(
    rng: &mut SolverRng,
    person_count: usize,
    excluded: &[Option<PersonIdx>; 2],
) -> Option<PersonIdx> {
    let mut skip: Vec<PersonIdx> = excluded.iter().flatten().copied().collect();
    skip.sort_unstable();
    skip.dedup();
    let choices = person_count.checked_sub(skip.len()).filter(|&n| n > 0)?;

    let mut person = rng.random_range(0..choices);
    for &s in &skip {
        if person >= s {
            person += 1;
        }
    }
    Some(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{ChangeKind, Move};
    use dutyroster_scoring::RosterConstraints;
    use dutyroster_test::feasible_problem;
    use rand::SeedableRng;

    fn director(weeks: usize, people: usize) -> ScoreDirector {
        ScoreDirector::new(
            feasible_problem(weeks, people).to_schedule(),
            RosterConstraints::default(),
        )
    }

    #[test]
    fn test_pick_other_skips_excluded() {
        let mut rng = SolverRng::seed_from_u64(1);
        for _ in 0..200 {
            let p = pick_other(&mut rng, 4, &[Some(1), Some(3)]);
            assert!(matches!(p, Some(0) | Some(2)));
        }
    }

    #[test]
    fn test_pick_other_with_no_choice() {
        let mut rng = SolverRng::seed_from_u64(1);
        assert_eq!(pick_other(&mut rng, 2, &[Some(0), Some(1)]), None);
        assert_eq!(pick_other(&mut rng, 1, &[Some(0), Some(0)]), None);
        assert_eq!(pick_other(&mut rng, 1, &[None, None]), Some(0));
    }

    #[test]
    fn test_change_moves_never_target_current_occupants() {
        let mut d = director(6, 5);
        d.assign(0, Slot::A, Some(0));
        d.assign(0, Slot::B, Some(1));
        let selector = RandomMoveSelector::new(500, 0.0, 0.0);
        let mut rng = SolverRng::seed_from_u64(3);
        let mut out = Vec::new();
        selector.sample(&d, &mut rng, &mut out);

        assert_eq!(out.len(), 500);
        for m in &out {
            let RosterMove::Change(change) = m else {
                panic!("expected only change moves, got {m:?}");
            };
            if change.shift() == 0 {
                assert!(!matches!(change.person(), Some(0) | Some(1)));
            }
            assert!(m.is_doable(&d));
        }
    }

    #[test]
    fn test_swap_moves_use_two_shifts() {
        let d = director(6, 5);
        let selector = RandomMoveSelector::new(100, 1.0, 0.0);
        let mut rng = SolverRng::seed_from_u64(5);
        let mut out = Vec::new();
        selector.sample(&d, &mut rng, &mut out);

        assert_eq!(out.len(), 100);
        for m in &out {
            assert_eq!(m.shift_indices().len(), 2);
            assert_ne!(m.shift_indices()[0], m.shift_indices()[1]);
        }
    }

    #[test]
    fn test_unassign_only_on_occupied_slots() {
        let mut d = director(3, 4);
        d.assign(1, Slot::A, Some(2));
        let selector = RandomMoveSelector::new(300, 0.0, 1.0);
        let mut rng = SolverRng::seed_from_u64(9);
        let mut out = Vec::new();
        selector.sample(&d, &mut rng, &mut out);

        assert!(!out.is_empty());
        for m in &out {
            let RosterMove::Change(change) = m else {
                panic!("expected an unassign, got {m:?}");
            };
            assert_eq!(change.kind(&d), ChangeKind::Unassign);
            assert_eq!((change.shift(), change.slot()), (1, Slot::A));
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let d = director(8, 6);
        let selector = RandomMoveSelector::default();
        let mut a = Vec::new();
        let mut b = Vec::new();
        selector.sample(&d, &mut SolverRng::seed_from_u64(42), &mut a);
        selector.sample(&d, &mut SolverRng::seed_from_u64(42), &mut b);
        assert_eq!(a, b);
    }
}
