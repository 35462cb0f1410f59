//! Precomputed teacher availability index.
//!
//! Answers whether a teacher may be booked at a given cell. Built once per
//! invocation from the teachers' day → slots mappings; open availability
//! (empty mapping) short-circuits to `true`. Availability labels that do not
//! appear in the grid are ignored.

use crate::models::Teacher;

use super::grid::SlotGrid;

/// Per-teacher day × slot eligibility bitmap.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex {
    open: Vec<bool>,
    cells: Vec<bool>,
    cell_count: usize,
}

impl AvailabilityIndex {
    /// Builds the index for the given teachers over the grid.
    pub fn build(teachers: &[Teacher], grid: &SlotGrid) -> Self {
        let cell_count = grid.cell_count();
        let mut open = vec![false; teachers.len()];
        let mut cells = vec![false; teachers.len() * cell_count];

        for (t, teacher) in teachers.iter().enumerate() {
            if teacher.has_open_availability() {
                open[t] = true;
                continue;
            }
            for (day_label, slots) in &teacher.availability {
                let Some(day) = grid.day_position(day_label) else {
                    continue;
                };
                for slot_label in slots {
                    if let Some(slot) = grid.slot_position(slot_label) {
                        cells[t * cell_count + grid.cell(day, slot)] = true;
                    }
                }
            }
        }

        Self {
            open,
            cells,
            cell_count,
        }
    }

    /// Whether the teacher may be booked at the given cell.
    #[inline]
    pub fn is_available(&self, teacher: usize, cell: usize) -> bool {
        self.open[teacher] || self.cells[teacher * self.cell_count + cell]
    }
}
