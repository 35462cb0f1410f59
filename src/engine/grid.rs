//! Day × time-slot ordinal frame.
//!
//! Days and slots are opaque ordered atoms; their relative order is exactly
//! the input sequence order and drives every tie-break. The grid maps labels
//! to ordinals once at invocation start so the busy grids can be flat
//! fixed-size arrays with constant-time lookups.

use std::collections::HashMap;

/// Ordinal frame over the input day and slot sequences.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    days: Vec<String>,
    slots: Vec<String>,
    day_pos: HashMap<String, usize>,
    slot_pos: HashMap<String, usize>,
}

impl SlotGrid {
    /// Builds the frame from the input sequences.
    pub fn new(days: &[String], slots: &[String]) -> Self {
        let day_pos = days
            .iter()
            .enumerate()
            .map(|(i, d)| (d.clone(), i))
            .collect();
        let slot_pos = slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self {
            days: days.to_vec(),
            slots: slots.to_vec(),
            day_pos,
            slot_pos,
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Total cells in the day × slot cross product.
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Flattened cell index for a (day, slot) ordinal pair.
    #[inline]
    pub fn cell(&self, day: usize, slot: usize) -> usize {
        day * self.slots.len() + slot
    }

    pub fn day_label(&self, day: usize) -> &str {
        &self.days[day]
    }

    pub fn slot_label(&self, slot: usize) -> &str {
        &self.slots[slot]
    }

    /// Ordinal of a day label, if it is part of the frame.
    pub fn day_position(&self, label: &str) -> Option<usize> {
        self.day_pos.get(label).copied()
    }

    /// Ordinal of a slot label, if it is part of the frame.
    pub fn slot_position(&self, label: &str) -> Option<usize> {
        self.slot_pos.get(label).copied()
    }

    /// All (day, slot) ordinal pairs in input order, day-major.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.days.len()).flat_map(move |d| (0..self.slots.len()).map(move |s| (d, s)))
    }
}
