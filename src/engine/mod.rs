//! Deterministic greedy timetable generation.
//!
//! The pipeline is staged: a [`SlotGrid`](grid::SlotGrid) fixes day/slot
//! ordinals, an [`AvailabilityIndex`](availability::AvailabilityIndex)
//! resolves teacher availability to cells, a
//! [`ScheduleState`](state::ScheduleState) tracks busy grids and committed
//! entries, candidate enumeration orders feasible placements, and the
//! two-pass placer commits them. [`TimetableGenerator`] is the public entry
//! point.

pub(crate) mod availability;
pub(crate) mod candidates;
pub(crate) mod diagnostics;
pub(crate) mod grid;
pub(crate) mod placer;
pub(crate) mod state;

mod generator;

pub use generator::{Defaults, GenerateRequest, TimetableGenerator};
