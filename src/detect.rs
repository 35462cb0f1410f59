//! Conflict detection over committed or externally edited entries.
//!
//! [`detect_conflicts`] is the single engine for the three uniqueness
//! invariants: at any (day, slot), a teacher, a classroom, and a cohort may
//! each appear in at most one entry. It accepts *any* entry list — including
//! one edited outside the generator — and never fails; an empty list yields
//! an empty conflict list.
//!
//! Session demand and availability are not checked here; those are placement
//! concerns.

use std::collections::HashMap;

use crate::models::{Conflict, TimetableEntry};

/// Scans an entry list for teacher, classroom, and cohort double-bookings.
///
/// Entries are grouped by (day, slot) in first-seen order; within a group,
/// one conflict is emitted per offending key, listing every implicated
/// subject. Multi-classroom entries are flattened so each room is checked
/// individually.
///
/// Re-entrant and pure: calling it twice on the same list yields the same
/// result both times.
pub fn detect_conflicts(entries: &[TimetableEntry]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for ((day, slot), group) in grouped(entries.iter().map(|e| ((e.day.as_str(), e.time_slot.as_str()), e))) {
        for (teacher, hits) in grouped(group.iter().map(|e| (e.teacher.as_str(), *e))) {
            if hits.len() > 1 {
                conflicts.push(Conflict::teacher_collision(teacher, day, slot, subjects_of(&hits)));
            }
        }
        for (classroom, hits) in grouped(
            group
                .iter()
                .flat_map(|e| e.classrooms.iter().map(move |c| (c.as_str(), *e))),
        ) {
            if hits.len() > 1 {
                conflicts.push(Conflict::classroom_collision(classroom, day, slot, subjects_of(&hits)));
            }
        }
        for (semester, hits) in grouped(group.iter().map(|e| (e.semester.as_str(), *e))) {
            if hits.len() > 1 {
                conflicts.push(Conflict::cohort_collision(semester, day, slot, subjects_of(&hits)));
            }
        }
    }

    conflicts
}

/// Groups items by key, preserving first-seen key order and per-key item
/// order. Ordinary maps would make conflict order nondeterministic.
fn grouped<K, V>(items: impl Iterator<Item = (K, V)>) -> Vec<(K, Vec<V>)>
where
    K: Copy + Eq + std::hash::Hash,
{
    let mut order: Vec<K> = Vec::new();
    let mut buckets: HashMap<K, Vec<V>> = HashMap::new();
    for (key, value) in items {
        let bucket = buckets.entry(key).or_default();
        if bucket.is_empty() {
            order.push(key);
        }
        bucket.push(value);
    }
    order
        .into_iter()
        .filter_map(|key| buckets.remove(&key).map(|values| (key, values)))
        .collect()
}

fn subjects_of(entries: &[&TimetableEntry]) -> Vec<String> {
    entries.iter().map(|e| e.subject.clone()).collect()
}
