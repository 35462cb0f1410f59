//! Two-pass greedy placement for one subject.
//!
//! Pass 1 prefers spread: at most one session per (day, slot) for the
//! subject, and no day reuse while enough distinct feasible days exist to
//! cover the full demand. Pass 2 re-walks the same candidate list with the
//! spreading constraints lifted. Both passes re-check `can_place` immediately
//! before committing, because earlier commits may have consumed a candidate's
//! teacher, classroom, or cohort cell. Committed sessions are kept even when
//! the subject as a whole falls short — there is no rollback.

use std::collections::HashSet;

use tracing::trace;

use crate::models::{Subject, TimetableEntry};

use super::candidates::Candidate;
use super::grid::SlotGrid;
use super::state::ScheduleState;

/// Terminal placement state for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStatus {
    /// Every required session was committed.
    Satisfied,
    /// `missing` sessions could not be committed.
    Partial { missing: u32 },
}

/// Result of placing one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Sessions committed for the subject.
    pub placed: u32,
    /// Whether demand was met.
    pub status: PlacementStatus,
}

/// Greedily commits sessions for one subject from its sorted candidate list.
#[allow(clippy::too_many_arguments)]
pub fn place_subject(
    state: &mut ScheduleState,
    grid: &SlotGrid,
    subject: &Subject,
    cohort_label: &str,
    cohort: usize,
    required: u32,
    candidates: &[Candidate],
    teacher_names: &[String],
    classrooms: &[String],
) -> PlacementOutcome {
    let mut placed: u32 = 0;
    let mut used_positions: HashSet<(usize, usize)> = HashSet::new();
    let mut used_days: HashSet<usize> = HashSet::new();
    let feasible_days: HashSet<usize> = candidates.iter().map(|c| c.day).collect();

    // Pass 1: spread-preferring.
    for cand in candidates {
        if placed >= required {
            break;
        }
        if used_positions.contains(&(cand.day, cand.slot)) {
            continue;
        }
        // With enough distinct feasible days to cover the whole demand,
        // never reuse a day in this pass.
        if feasible_days.len() >= required as usize && used_days.contains(&cand.day) {
            continue;
        }
        let cell = grid.cell(cand.day, cand.slot);
        if state.can_place(cohort, cand.teacher, cand.classroom, cell) {
            commit_candidate(state, grid, subject, cohort_label, cohort, cand, teacher_names, classrooms);
            used_positions.insert((cand.day, cand.slot));
            used_days.insert(cand.day);
            placed += 1;
        }
    }

    // Pass 2: fallback with spreading lifted.
    if placed < required {
        for cand in candidates {
            if placed >= required {
                break;
            }
            let cell = grid.cell(cand.day, cand.slot);
            if state.can_place(cohort, cand.teacher, cand.classroom, cell) {
                trace!(
                    subject = %subject.name,
                    day = grid.day_label(cand.day),
                    slot = grid.slot_label(cand.slot),
                    "fallback placement"
                );
                commit_candidate(state, grid, subject, cohort_label, cohort, cand, teacher_names, classrooms);
                placed += 1;
            }
        }
    }

    let status = if placed >= required {
        PlacementStatus::Satisfied
    } else {
        PlacementStatus::Partial {
            missing: required - placed,
        }
    };
    PlacementOutcome { placed, status }
}

#[allow(clippy::too_many_arguments)]
fn commit_candidate(
    state: &mut ScheduleState,
    grid: &SlotGrid,
    subject: &Subject,
    cohort_label: &str,
    cohort: usize,
    cand: &Candidate,
    teacher_names: &[String],
    classrooms: &[String],
) {
    let entry = TimetableEntry::new(
        grid.day_label(cand.day),
        grid.slot_label(cand.slot),
        &subject.name,
        &teacher_names[cand.teacher],
        cohort_label,
    )
    .with_classroom(&classrooms[cand.classroom])
    .with_department_codes(subject.department_codes());

    let cell = grid.cell(cand.day, cand.slot);
    state.commit(entry, cohort, cand.teacher, cand.classroom, cand.day, cell);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::availability::AvailabilityIndex;
    use crate::engine::candidates::enumerate_candidates;
    use crate::models::Teacher;

    fn setup(days: &[&str], slots: &[&str], rooms: &[&str]) -> (SlotGrid, Vec<String>, Vec<String>, ScheduleState) {
        let days: Vec<String> = days.iter().map(|s| s.to_string()).collect();
        let slots: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
        let grid = SlotGrid::new(&days, &slots);
        let teachers = vec![Teacher::new("Alice").with_subject("Math")];
        let availability = AvailabilityIndex::build(&teachers, &grid);
        let state = ScheduleState::new(&grid, 1, rooms.len(), 1, availability);
        let names = vec!["Alice".to_string()];
        let rooms: Vec<String> = rooms.iter().map(|s| s.to_string()).collect();
        (grid, names, rooms, state)
    }

    fn run(
        grid: &SlotGrid,
        state: &mut ScheduleState,
        names: &[String],
        rooms: &[String],
        required: u32,
    ) -> PlacementOutcome {
        let subject = Subject::new("Math").with_semester("S1").with_sessions_per_week(required);
        let keys: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        let candidates = enumerate_candidates(state, grid, 0, &[0], &keys, rooms);
        place_subject(state, grid, &subject, "S1", 0, required, &candidates, names, rooms)
    }

    #[test]
    fn test_spreads_across_distinct_days() {
        let (grid, names, rooms, mut state) =
            setup(&["Mon", "Tue", "Wed", "Thu", "Fri"], &["09:00", "10:00"], &["R1"]);
        let outcome = run(&grid, &mut state, &names, &rooms, 3);

        assert_eq!(outcome.placed, 3);
        assert_eq!(outcome.status, PlacementStatus::Satisfied);
        let days: HashSet<&str> = state.entries().iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn test_pass_two_reuses_days_when_needed() {
        // Two days only, three sessions: pass 2 must reuse a day.
        let (grid, names, rooms, mut state) = setup(&["Mon", "Tue"], &["09:00", "10:00"], &["R1"]);
        let outcome = run(&grid, &mut state, &names, &rooms, 3);

        assert_eq!(outcome.placed, 3);
        assert_eq!(outcome.status, PlacementStatus::Satisfied);
        let days: HashSet<&str> = state.entries().iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn test_partial_when_candidates_exhausted() {
        let (grid, names, rooms, mut state) = setup(&["Mon"], &["09:00"], &["R1"]);
        let outcome = run(&grid, &mut state, &names, &rooms, 3);

        assert_eq!(outcome.placed, 1);
        assert_eq!(outcome.status, PlacementStatus::Partial { missing: 2 });
        // Committed sessions are kept despite the shortfall.
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn test_zero_demand_is_satisfied() {
        let (grid, names, rooms, mut state) = setup(&["Mon"], &["09:00"], &["R1"]);
        let outcome = run(&grid, &mut state, &names, &rooms, 0);

        assert_eq!(outcome.placed, 0);
        assert_eq!(outcome.status, PlacementStatus::Satisfied);
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_entry_carries_department_codes() {
        let (grid, names, rooms, mut state) = setup(&["Mon"], &["09:00"], &["R1"]);
        let subject = Subject::new("Math")
            .with_semester("S1")
            .with_sessions_per_week(1)
            .with_department("CS - Computer Science");
        let keys = vec!["alice".to_string()];
        let candidates = enumerate_candidates(&state, &grid, 0, &[0], &keys, &rooms);
        place_subject(&mut state, &grid, &subject, "S1", 0, 1, &candidates, &names, &rooms);

        assert_eq!(state.entries()[0].department_codes, vec!["CS"]);
        assert_eq!(state.entries()[0].classrooms, vec!["R1"]);
    }
}
