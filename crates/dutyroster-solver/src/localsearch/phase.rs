//! Local search phase implementation.

use std::fmt::Debug;
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::localsearch::{Acceptor, LocalSearchForager};
use crate::moves::{Move, RosterMove};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::selector::RandomMoveSelector;

/// Local search phase that improves an existing schedule.
///
/// Each step:
/// 1. Samples candidate moves into a reused buffer
/// 2. Evaluates each move by applying and undoing it on the director
/// 3. Accepts or rejects it through the acceptor
/// 4. Applies the best accepted move, if any
///
/// A step in which nothing is accepted still counts as a step; the loop
/// only ends on termination or the optional step limit.
pub struct LocalSearchPhase {
    move_selector: RandomMoveSelector,
    acceptor: Box<dyn Acceptor>,
    forager: Box<dyn LocalSearchForager>,
    candidates: Vec<RosterMove>,
    step_limit: Option<u64>,
}

impl LocalSearchPhase {
    pub fn new(
        move_selector: RandomMoveSelector,
        acceptor: Box<dyn Acceptor>,
        forager: Box<dyn LocalSearchForager>,
        step_limit: Option<u64>,
    ) -> Self {
        Self {
            candidates: Vec::with_capacity(move_selector.sample_size()),
            move_selector,
            acceptor,
            forager,
            step_limit,
        }
    }
}

impl Debug for LocalSearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}

impl Phase for LocalSearchPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>, phase_index: usize) {
        let phase_name = self.acceptor.name();
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index, phase_name);

        info!(event = "phase_start", phase = phase_name, phase_index = phase_index);

        let mut last_step_score = phase_scope.starting_score();
        phase_scope.update_best_solution();
        self.acceptor.phase_started(last_step_score);

        let mut last_progress_time = Instant::now();
        let mut last_progress_moves: u64 = 0;

        loop {
            if phase_scope.solver_scope().should_terminate() {
                break;
            }
            if let Some(limit) = self.step_limit {
                if phase_scope.step_count() >= limit {
                    break;
                }
            }

            let time_gradient = phase_scope.solver_scope().time_gradient();
            self.acceptor.step_started(time_gradient);
            self.forager.step_started();

            self.candidates.clear();
            {
                let (director, rng) = phase_scope.solver_scope_mut().director_and_rng();
                self.move_selector.sample(director, rng, &mut self.candidates);
            }

            for (index, m) in self.candidates.iter().enumerate() {
                if !m.is_doable(phase_scope.score_director()) {
                    continue;
                }

                let changes = m.changes(phase_scope.score_director());
                let move_score = phase_scope.score_director_mut().evaluate(&changes);
                let accepted = self.acceptor.is_accepted(
                    last_step_score,
                    move_score,
                    phase_scope.solver_scope_mut().rng(),
                );
                phase_scope.record_move(accepted);

                trace!(
                    event = "step",
                    step = phase_scope.step_count(),
                    candidate = ?m,
                    score = %move_score,
                    accepted = accepted,
                );

                if accepted {
                    self.forager.add_move_index(index, move_score);
                    if self.forager.is_quit_early() {
                        break;
                    }
                }
            }

            if let Some((index, score)) = self.forager.pick_move_index() {
                self.candidates[index].do_move(phase_scope.score_director_mut());
                last_step_score = score;
                if phase_scope.update_best_solution() {
                    debug!(
                        event = "new_best",
                        step = phase_scope.step_count(),
                        score = %score,
                    );
                }
            }

            phase_scope.increment_step_count();
            self.acceptor.step_ended(last_step_score);

            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let moves_evaluated = phase_scope.stats().moves_evaluated;
                let elapsed_secs = now.duration_since(last_progress_time).as_secs_f64();
                let speed = ((moves_evaluated - last_progress_moves) as f64 / elapsed_secs) as u64;
                let best = phase_scope
                    .solver_scope()
                    .best_score()
                    .unwrap_or(last_step_score);
                debug!(
                    event = "progress",
                    steps = phase_scope.step_count(),
                    speed = speed,
                    score = %best,
                );
                last_progress_time = now;
                last_progress_moves = moves_evaluated;
            }
        }

        self.acceptor.phase_ended();

        let best = phase_scope
            .solver_scope()
            .best_score()
            .unwrap_or(last_step_score);
        info!(
            event = "phase_end",
            phase = phase_name,
            phase_index = phase_index,
            duration_ms = phase_scope.elapsed().as_millis() as u64,
            steps = phase_scope.step_count(),
            moves_evaluated = phase_scope.stats().moves_evaluated,
            speed = phase_scope.stats().moves_per_second(),
            score = %best,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
