//! Incremental score director.

use std::collections::btree_map;
use std::collections::hash_map::{self, HashMap};
use std::collections::BTreeMap;

use chrono::{IsoWeek, NaiveDate};
use dutyroster_core::{PenaltyScore, PersonIdx, RosterError, Schedule, Slot, SlotSnapshot};
use smallvec::SmallVec;

use super::change::{ChangeList, SlotChange};
use crate::constraints::{week_collisions, RosterConstraints};

/// Owns the working schedule and its incrementally maintained score.
///
/// Caches, per person, the dates they occupy (with slot multiplicity, so a
/// person sitting in both slots of one shift still counts the shift once)
/// and the number of shifts they hold in each ISO week.
#[derive(Debug, Clone)]
pub struct ScoreDirector {
    schedule: Schedule,
    constraints: RosterConstraints,
    person_dates: Vec<BTreeMap<NaiveDate, u8>>,
    week_load: HashMap<(PersonIdx, IsoWeek), u32>,
    score: PenaltyScore,
    calculation_count: u64,
}

impl ScoreDirector {
    pub fn new(schedule: Schedule, constraints: RosterConstraints) -> Self {
        let mut director = Self {
            person_dates: vec![BTreeMap::new(); schedule.person_count()],
            schedule,
            constraints,
            week_load: HashMap::new(),
            score: PenaltyScore::ZERO,
            calculation_count: 0,
        };
        director.rebuild();
        director
    }

    fn rebuild(&mut self) {
        for dates in &mut self.person_dates {
            dates.clear();
        }
        self.week_load.clear();

        let occupied: Vec<(PersonIdx, NaiveDate, IsoWeek)> = self
            .schedule
            .shifts()
            .iter()
            .flat_map(|s| s.slots().into_iter().flatten().map(move |p| (p, s.date(), s.week())))
            .collect();
        for (person, date, week) in occupied {
            self.occupy(person, date, week);
        }

        self.score = self.constraints.score(&self.schedule);
        self.calculation_count += 1;
    }

    fn occupy(&mut self, person: PersonIdx, date: NaiveDate, week: IsoWeek) {
        let count = self.person_dates[person].entry(date).or_insert(0);
        *count += 1;
        if *count == 1 {
            *self.week_load.entry((person, week)).or_insert(0) += 1;
        }
    }

    fn vacate(&mut self, person: PersonIdx, date: NaiveDate, week: IsoWeek) {
        let btree_map::Entry::Occupied(mut slot_count) = self.person_dates[person].entry(date)
        else {
            return;
        };
        *slot_count.get_mut() -= 1;
        if *slot_count.get() > 0 {
            return;
        }
        slot_count.remove();

        if let hash_map::Entry::Occupied(mut shifts) = self.week_load.entry((person, week)) {
            *shifts.get_mut() -= 1;
            if *shifts.get() == 0 {
                shifts.remove();
            }
        }
    }

    fn person_terms(&self, person: PersonIdx, week: IsoWeek) -> PenaltyScore {
        let dates = &self.person_dates[person];
        let in_week = self.week_load.get(&(person, week)).copied().unwrap_or(0);
        self.constraints
            .person_score(self.schedule.person(person), dates.len(), dates.keys().copied())
            + PenaltyScore::of_hard(week_collisions(in_week))
    }

    fn local_score(&self, shift: usize, touched: &[PersonIdx]) -> PenaltyScore {
        let shift = self.schedule.shift(shift);
        let mut total = self.constraints.shift_score(shift, self.schedule.people());
        for &person in touched {
            total += self.person_terms(person, shift.week());
        }
        total
    }

    /// Sets a slot, updates the score, and returns the previous occupant.
    pub fn assign(
        &mut self,
        shift: usize,
        slot: Slot,
        person: Option<PersonIdx>,
    ) -> Option<PersonIdx> {
        let current = self.schedule.shift(shift).slot(slot);
        if current == person {
            return current;
        }

        let touched: SmallVec<[PersonIdx; 2]> = current.into_iter().chain(person).collect();
        let before = self.local_score(shift, &touched);

        let (date, week) = {
            let s = self.schedule.shift(shift);
            (s.date(), s.week())
        };
        let old = self.schedule.assign(shift, slot, person);
        if let Some(p) = old {
            self.vacate(p, date, week);
        }
        if let Some(p) = person {
            self.occupy(p, date, week);
        }

        let after = self.local_score(shift, &touched);
        self.score += after - before;
        old
    }

    /// Applies changes in order and returns the changes that revert them.
    pub fn apply(&mut self, changes: &[SlotChange]) -> ChangeList {
        let mut undo: ChangeList = changes
            .iter()
            .map(|c| SlotChange::new(c.shift, c.slot, self.assign(c.shift, c.slot, c.person)))
            .collect();
        undo.reverse();
        undo
    }

    /// Scores the schedule as it would be after `changes`, leaving it unchanged.
    pub fn evaluate(&mut self, changes: &[SlotChange]) -> PenaltyScore {
        let undo = self.apply(changes);
        let score = self.score;
        self.apply(&undo);
        self.calculation_count += 1;
        score
    }

    /// Current score of the working schedule.
    #[inline]
    pub fn score(&self) -> PenaltyScore {
        self.score
    }

    /// Recomputes the score from scratch.
    ///
    /// Returns the same value as [`score`](Self::score); a mismatch is a bug
    /// in the incremental bookkeeping.
    pub fn calculate_score(&mut self) -> PenaltyScore {
        self.calculation_count += 1;
        self.constraints.score(&self.schedule)
    }

    pub fn working_solution(&self) -> &Schedule {
        &self.schedule
    }

    pub fn into_working_solution(self) -> Schedule {
        self.schedule
    }

    pub fn constraints(&self) -> &RosterConstraints {
        &self.constraints
    }

    /// Number of score evaluations so far.
    pub fn calculation_count(&self) -> u64 {
        self.calculation_count
    }

    /// Number of shifts `person` currently holds.
    #[inline]
    pub fn assigned_count(&self, person: PersonIdx) -> usize {
        self.person_dates[person].len()
    }

    /// Returns true if `person` already holds a shift in `week`.
    #[inline]
    pub fn is_booked_in_week(&self, person: PersonIdx, week: IsoWeek) -> bool {
        self.week_load.contains_key(&(person, week))
    }

    /// Dates `person` currently holds, ascending.
    pub fn person_dates(&self, person: PersonIdx) -> impl Iterator<Item = NaiveDate> + '_ {
        self.person_dates[person].keys().copied()
    }

    pub fn snapshot(&self) -> SlotSnapshot {
        self.schedule.snapshot()
    }

    /// Restores slot contents and rebuilds every cache.
    pub fn restore(&mut self, snapshot: &SlotSnapshot) -> Result<(), RosterError> {
        self.schedule.restore(snapshot)?;
        self.rebuild();
        Ok(())
    }
}
