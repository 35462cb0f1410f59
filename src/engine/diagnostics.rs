//! Shortfall diagnostics.
//!
//! Runs only when a subject's demand could not be met. Explains why each
//! cell was unusable and suggests up to five alternative positions where a
//! qualifying teacher and a classroom are simultaneously free — whether or
//! not those positions were actually usable during placement (they may help
//! a human rearrange the week).

use std::collections::HashSet;

use crate::models::{Conflict, ShortfallPhase};

use super::grid::SlotGrid;
use super::state::ScheduleState;

/// Maximum number of alternative-slot suggestions per shortfall.
const SUGGESTION_CAP: usize = 5;

/// Builds the placement-phase shortfall conflict for a subject.
#[allow(clippy::too_many_arguments)]
pub fn shortfall_conflict(
    state: &ScheduleState,
    grid: &SlotGrid,
    subject_name: &str,
    cohort_label: &str,
    cohort: usize,
    qualified: &[usize],
    classroom_count: usize,
    missing: u32,
) -> Conflict {
    let reasons = build_reasons(state, grid, cohort, qualified, classroom_count);
    let suggestions = build_suggestions(state, grid, cohort, qualified, classroom_count);

    Conflict::shortfall(cohort_label, subject_name, missing, ShortfallPhase::Placement)
        .with_reasons(reasons)
        .with_suggestions(suggestions)
}

/// Per-cell explanations, deduplicated in first-seen order.
fn build_reasons(
    state: &ScheduleState,
    grid: &SlotGrid,
    cohort: usize,
    qualified: &[usize],
    classroom_count: usize,
) -> Vec<String> {
    if qualified.is_empty() {
        return vec!["No teacher associated with subject".to_string()];
    }

    let mut seen = HashSet::new();
    let mut reasons = Vec::new();
    let mut push = |reasons: &mut Vec<String>, reason: String| {
        if seen.insert(reason.clone()) {
            reasons.push(reason);
        }
    };

    for (day, slot) in grid.pairs() {
        let cell = grid.cell(day, slot);
        let day_label = grid.day_label(day);
        let slot_label = grid.slot_label(slot);

        let any_teacher_free = qualified
            .iter()
            .any(|&t| state.is_teacher_available(t, cell) && !state.is_teacher_busy(t, cell));
        let any_classroom_free = (0..classroom_count).any(|c| !state.is_classroom_busy(c, cell));

        if !any_teacher_free {
            push(&mut reasons, format!("No available teacher at {day_label} {slot_label}"));
        }
        if !any_classroom_free {
            push(&mut reasons, format!("No available classroom at {day_label} {slot_label}"));
        }
        if state.is_cohort_busy(cohort, cell) {
            push(&mut reasons, format!("Semester busy at {day_label} {slot_label}"));
        }
    }

    reasons
}

/// "Day @ Slot" positions where a qualifying teacher and a classroom are
/// both free and the cohort is not, capped and scanned in input order.
fn build_suggestions(
    state: &ScheduleState,
    grid: &SlotGrid,
    cohort: usize,
    qualified: &[usize],
    classroom_count: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    'scan: for (day, slot) in grid.pairs() {
        let cell = grid.cell(day, slot);
        if state.is_cohort_busy(cohort, cell) {
            continue;
        }
        let teacher_free = qualified
            .iter()
            .any(|&t| state.is_teacher_available(t, cell) && !state.is_teacher_busy(t, cell));
        let classroom_free = (0..classroom_count).any(|c| !state.is_classroom_busy(c, cell));
        if teacher_free && classroom_free {
            suggestions.push(format!("{} @ {}", grid.day_label(day), grid.slot_label(slot)));
        }
        if suggestions.len() >= SUGGESTION_CAP {
            break 'scan;
        }
    }
    suggestions
}
