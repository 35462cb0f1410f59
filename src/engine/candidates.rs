//! Candidate ranking and enumeration.
//!
//! `rank_slots` orders (day, slot) pairs for a cohort by ascending day load,
//! favoring under-loaded days; `enumerate_candidates` expands ranked pairs
//! into every feasible (day, slot, teacher, classroom) tuple and sorts them
//! into the placement order. That sort is the sole source of determinism in
//! placement: identical inputs always yield an identical candidate sequence.

use super::grid::SlotGrid;
use super::state::ScheduleState;

/// Weight of a cohort's day load in the slot score.
const LOAD_WEIGHT: u32 = 10;

/// One feasible (day, slot, teacher, classroom) tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Cells already committed to the teacher when enumeration ran.
    pub teacher_load: u32,
    /// Day ordinal.
    pub day: usize,
    /// Slot ordinal.
    pub slot: usize,
    /// Teacher index into the input teacher list.
    pub teacher: usize,
    /// Classroom index into the input classroom list.
    pub classroom: usize,
}

/// Orders every (day, slot) pair for a cohort by ascending score
/// (`day load × weight`), breaking ties by day position then slot position.
pub fn rank_slots(state: &ScheduleState, grid: &SlotGrid, cohort: usize) -> Vec<(usize, usize)> {
    let mut ranked: Vec<(u32, usize, usize)> = grid
        .pairs()
        .map(|(day, slot)| (state.cohort_day_load(cohort, day) * LOAD_WEIGHT, day, slot))
        .collect();
    ranked.sort_by_key(|&(score, day, slot)| (score, day, slot));
    ranked.into_iter().map(|(_, day, slot)| (day, slot)).collect()
}

/// Enumerates every feasible candidate for a subject, sorted into placement
/// order.
///
/// Walks ranked (day, slot) pairs; for each, every qualifying teacher who is
/// available and not yet busy there; for each, every classroom where
/// `can_place` holds. The teacher's committed-cell count is snapshotted at
/// enumeration time. The final ordering is ascending (teacher load, day
/// position, slot position, lowercased teacher name, classroom name).
///
/// `teacher_keys` holds the lowercased teacher names, indexed like the input
/// teacher list.
pub fn enumerate_candidates(
    state: &ScheduleState,
    grid: &SlotGrid,
    cohort: usize,
    qualified: &[usize],
    teacher_keys: &[String],
    classrooms: &[String],
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if qualified.is_empty() {
        return candidates;
    }

    for (day, slot) in rank_slots(state, grid, cohort) {
        let cell = grid.cell(day, slot);
        for &teacher in qualified {
            if !state.is_teacher_available(teacher, cell) || state.is_teacher_busy(teacher, cell) {
                continue;
            }
            let teacher_load = state.teacher_slot_load(teacher);
            for classroom in 0..classrooms.len() {
                if state.can_place(cohort, teacher, classroom, cell) {
                    candidates.push(Candidate {
                        teacher_load,
                        day,
                        slot,
                        teacher,
                        classroom,
                    });
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        (a.teacher_load, a.day, a.slot, &teacher_keys[a.teacher], &classrooms[a.classroom]).cmp(&(
            b.teacher_load,
            b.day,
            b.slot,
            &teacher_keys[b.teacher],
            &classrooms[b.classroom],
        ))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::availability::AvailabilityIndex;
    use crate::models::{Teacher, TimetableEntry};

    fn grid() -> SlotGrid {
        SlotGrid::new(
            &["Monday".into(), "Tuesday".into()],
            &["09:00".into(), "10:00".into()],
        )
    }

    fn state_for(teachers: &[Teacher], grid: &SlotGrid, classrooms: usize, cohorts: usize) -> ScheduleState {
        let availability = AvailabilityIndex::build(teachers, grid);
        ScheduleState::new(grid, teachers.len(), classrooms, cohorts, availability)
    }

    fn dummy_entry() -> TimetableEntry {
        TimetableEntry::new("Monday", "09:00", "Math", "Alice", "S1")
    }

    #[test]
    fn test_rank_slots_input_order_when_unloaded() {
        let g = grid();
        let teachers = vec![Teacher::new("Alice")];
        let state = state_for(&teachers, &g, 1, 1);

        let ranked = rank_slots(&state, &g, 0);
        assert_eq!(ranked, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_rank_slots_prefers_underloaded_days() {
        let g = grid();
        let teachers = vec![Teacher::new("Alice")];
        let mut state = state_for(&teachers, &g, 1, 1);
        // Load Monday for the cohort.
        state.commit(dummy_entry(), 0, 0, 0, 0, g.cell(0, 0));

        let ranked = rank_slots(&state, &g, 0);
        assert_eq!(ranked, vec![(1, 0), (1, 1), (0, 0), (0, 1)]);
    }

    #[test]
    fn test_enumerate_empty_when_no_qualified_teachers() {
        let g = grid();
        let teachers = vec![Teacher::new("Alice")];
        let state = state_for(&teachers, &g, 1, 1);

        let keys = vec!["alice".to_string()];
        let rooms = vec!["R1".to_string()];
        assert!(enumerate_candidates(&state, &g, 0, &[], &keys, &rooms).is_empty());
    }

    #[test]
    fn test_enumerate_orders_by_teacher_load_then_name() {
        let g = grid();
        let teachers = vec![Teacher::new("Zoe"), Teacher::new("Bob")];
        let mut state = state_for(&teachers, &g, 1, 2);
        // Zoe already carries one session (for another cohort).
        state.commit(dummy_entry(), 1, 0, 0, 0, g.cell(0, 0));

        let keys = vec!["zoe".to_string(), "bob".to_string()];
        let rooms = vec!["R1".to_string()];
        let candidates = enumerate_candidates(&state, &g, 0, &[0, 1], &keys, &rooms);

        // Bob (load 0) sorts before Zoe (load 1) everywhere.
        assert_eq!(candidates[0].teacher, 1);
        assert_eq!(candidates[0].teacher_load, 0);
        let first_zoe = candidates.iter().position(|c| c.teacher == 0);
        let last_bob = candidates.iter().rposition(|c| c.teacher == 1);
        assert!(last_bob < first_zoe);
    }

    #[test]
    fn test_enumerate_tie_breaks_by_lowercased_name() {
        let g = grid();
        let teachers = vec![Teacher::new("bob"), Teacher::new("Alice")];
        let state = state_for(&teachers, &g, 1, 1);

        let keys = vec!["bob".to_string(), "alice".to_string()];
        let rooms = vec!["R1".to_string()];
        let candidates = enumerate_candidates(&state, &g, 0, &[0, 1], &keys, &rooms);

        // At equal load/day/slot, "alice" < "bob" regardless of input order.
        assert_eq!(candidates[0].teacher, 1);
        assert_eq!(candidates[1].teacher, 0);
    }

    #[test]
    fn test_enumerate_skips_busy_and_unavailable_cells() {
        let g = grid();
        let teachers = vec![Teacher::new("Alice").with_availability("Monday", vec!["09:00".into()])];
        let mut state = state_for(&teachers, &g, 2, 1);
        // Occupy classroom 0 at Monday 09:00.
        state.commit(dummy_entry(), 0, 0, 0, 0, g.cell(0, 0));

        let keys = vec!["alice".to_string()];
        let rooms = vec!["R1".to_string(), "R2".to_string()];
        let candidates = enumerate_candidates(&state, &g, 0, &[0], &keys, &rooms);

        // Alice is busy at her only available cell, and the cohort is too.
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_enumerate_classroom_tie_break() {
        let g = SlotGrid::new(&["Monday".into()], &["09:00".into()]);
        let teachers = vec![Teacher::new("Alice")];
        let state = state_for(&teachers, &g, 2, 1);

        let keys = vec!["alice".to_string()];
        let rooms = vec!["R2".to_string(), "R1".to_string()];
        let candidates = enumerate_candidates(&state, &g, 0, &[0], &keys, &rooms);

        assert_eq!(candidates.len(), 2);
        // Lexicographic classroom order: R1 before R2.
        assert_eq!(candidates[0].classroom, 1);
        assert_eq!(candidates[1].classroom, 0);
    }
}
