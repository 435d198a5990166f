//! Construction heuristic phase.

use dutyroster_core::{PersonIdx, Slot};
use dutyroster_scoring::ScoreDirector;
use tracing::{info, trace};

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::solver::SolverStatus;

/// Deficit-first greedy construction.
///
/// Visits shifts in date order and fills every empty slot with the eligible
/// person furthest below their ideal shift count, breaking ties by name.
/// Eligible means available on the date, not already in the shift, and not
/// yet booked in the shift's ISO week. Slots with no eligible person stay
/// empty for local search to resolve.
#[derive(Debug, Clone, Default)]
pub struct ConstructionPhase;

impl ConstructionPhase {
    pub fn new() -> Self {
        Self
    }
}

/// Picks the person to place in `shift`, or None if nobody is eligible.
fn best_candidate(director: &ScoreDirector, shift: usize) -> Option<PersonIdx> {
    let schedule = director.working_solution();
    let target = schedule.shift(shift);
    let months = director.constraints().planning_months();

    let mut best: Option<(PersonIdx, f64)> = None;
    for (idx, person) in schedule.people().iter().enumerate() {
        if !person.is_available(target.date())
            || target.contains(idx)
            || director.is_booked_in_week(idx, target.week())
        {
            continue;
        }
        let deficit = person.ideal_shift_count(months) - director.assigned_count(idx) as f64;
        let better = match best {
            None => true,
            Some((best_idx, best_deficit)) => {
                deficit > best_deficit
                    || (deficit == best_deficit
                        && person.name() < schedule.person(best_idx).name())
            }
        };
        if better {
            best = Some((idx, deficit));
        }
    }
    best.map(|(idx, _)| idx)
}

impl Phase for ConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>, phase_index: usize) {
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index, "Construction Heuristic");

        info!(
            event = "phase_start",
            phase = "Construction Heuristic",
            phase_index = phase_index,
        );

        let schedule = phase_scope.score_director().working_solution();
        let mut order: Vec<usize> = (0..schedule.shift_count()).collect();
        order.sort_by_key(|&i| schedule.shift(i).date());

        let mut unfilled = 0u64;
        'shifts: for shift in order {
            for slot in Slot::ALL {
                if phase_scope.solver_scope().should_terminate() {
                    break 'shifts;
                }
                let director = phase_scope.score_director();
                if director.working_solution().shift(shift).slot(slot).is_some() {
                    continue;
                }
                match best_candidate(director, shift) {
                    Some(person) => {
                        phase_scope
                            .score_director_mut()
                            .assign(shift, slot, Some(person));
                        phase_scope.record_move(true);
                        let step = phase_scope.increment_phase_step_count();
                        trace!(
                            event = "step",
                            step = step,
                            shift = shift,
                            person = person,
                            score = %phase_scope.score_director().score(),
                            accepted = true,
                        );
                    }
                    None => unfilled += 1,
                }
            }
        }

        phase_scope.update_best_solution();

        let steps = phase_scope.step_count();
        let duration = phase_scope.elapsed();
        let speed = if duration.as_secs_f64() > 0.0 {
            (steps as f64 / duration.as_secs_f64()) as u64
        } else {
            0
        };
        info!(
            event = "phase_end",
            phase = "Construction Heuristic",
            phase_index = phase_index,
            duration_ms = duration.as_millis() as u64,
            steps = steps,
            unfilled_slots = unfilled,
            speed = speed,
            score = %phase_scope.score_director().score(),
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }

    fn status(&self) -> SolverStatus {
        SolverStatus::Constructing
    }
}
