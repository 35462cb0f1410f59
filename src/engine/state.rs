//! Per-invocation schedule state.
//!
//! Flat boolean busy grids for teachers, classrooms, and cohorts, plus
//! per-cohort per-day load counters and the committed entry list. Grids are
//! sized once at invocation start against the full day × slot cross product,
//! so every check is constant-time. State is created fresh per generation
//! call and never shared across invocations.

use crate::models::TimetableEntry;

use super::availability::AvailabilityIndex;
use super::grid::SlotGrid;

/// Mutable placement state for one generation run.
#[derive(Debug)]
pub struct ScheduleState {
    cell_count: usize,
    day_count: usize,
    teacher_busy: Vec<bool>,
    classroom_busy: Vec<bool>,
    cohort_busy: Vec<bool>,
    cohort_load: Vec<u32>,
    availability: AvailabilityIndex,
    entries: Vec<TimetableEntry>,
}

impl ScheduleState {
    /// Creates empty grids for the known entity counts.
    pub fn new(
        grid: &SlotGrid,
        teacher_count: usize,
        classroom_count: usize,
        cohort_count: usize,
        availability: AvailabilityIndex,
    ) -> Self {
        let cell_count = grid.cell_count();
        Self {
            cell_count,
            day_count: grid.day_count(),
            teacher_busy: vec![false; teacher_count * cell_count],
            classroom_busy: vec![false; classroom_count * cell_count],
            cohort_busy: vec![false; cohort_count * cell_count],
            cohort_load: vec![0; cohort_count * grid.day_count()],
            availability,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn is_teacher_busy(&self, teacher: usize, cell: usize) -> bool {
        self.teacher_busy[teacher * self.cell_count + cell]
    }

    #[inline]
    pub fn is_classroom_busy(&self, classroom: usize, cell: usize) -> bool {
        self.classroom_busy[classroom * self.cell_count + cell]
    }

    #[inline]
    pub fn is_cohort_busy(&self, cohort: usize, cell: usize) -> bool {
        self.cohort_busy[cohort * self.cell_count + cell]
    }

    #[inline]
    pub fn is_teacher_available(&self, teacher: usize, cell: usize) -> bool {
        self.availability.is_available(teacher, cell)
    }

    /// Committed sessions for a cohort on a day.
    #[inline]
    pub fn cohort_day_load(&self, cohort: usize, day: usize) -> u32 {
        self.cohort_load[cohort * self.day_count + day]
    }

    /// Total cells already committed to a teacher across the whole grid.
    pub fn teacher_slot_load(&self, teacher: usize) -> u32 {
        let base = teacher * self.cell_count;
        self.teacher_busy[base..base + self.cell_count]
            .iter()
            .filter(|&&busy| busy)
            .count() as u32
    }

    /// Whether a session can be committed at the cell: the teacher, the
    /// classroom, and the cohort must all be free, and the teacher must be
    /// available there.
    pub fn can_place(&self, cohort: usize, teacher: usize, classroom: usize, cell: usize) -> bool {
        !self.is_teacher_busy(teacher, cell)
            && !self.is_classroom_busy(classroom, cell)
            && !self.is_cohort_busy(cohort, cell)
            && self.is_teacher_available(teacher, cell)
    }

    /// Commits a session: marks all three grids busy at the cell, bumps the
    /// cohort day load, and appends the entry.
    pub fn commit(
        &mut self,
        entry: TimetableEntry,
        cohort: usize,
        teacher: usize,
        classroom: usize,
        day: usize,
        cell: usize,
    ) {
        self.teacher_busy[teacher * self.cell_count + cell] = true;
        self.classroom_busy[classroom * self.cell_count + cell] = true;
        self.cohort_busy[cohort * self.cell_count + cell] = true;
        self.cohort_load[cohort * self.day_count + day] += 1;
        self.entries.push(entry);
    }

    /// Committed entries so far, in commit order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Consumes the state, returning the committed entries.
    pub fn into_entries(self) -> Vec<TimetableEntry> {
        self.entries
    }
}
