//! In-memory session store.
//!
//! Keeps one generated [`Timetable`] plus the input memory it was built
//! from under a random session id, so a caller can re-validate externally
//! edited entries or tweak remembered inputs without resending everything.
//! Sessions can be aged out with an optional idle expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detect::detect_conflicts;
use crate::models::{Subject, Teacher, Timetable, TimetableEntry};

/// Remembered inputs for a session, so follow-up requests can omit
/// unchanged parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMemory {
    pub teachers: Vec<Teacher>,
    pub subjects: Vec<Subject>,
    pub classrooms: Vec<String>,
    pub days: Vec<String>,
    pub time_slots: Vec<String>,
    pub semesters: Vec<String>,
}

/// A partial update to [`SessionMemory`]: only the present fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teachers: Option<Vec<Teacher>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subjects: Option<Vec<Subject>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classrooms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub days: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_slots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub semesters: Option<Vec<String>>,
}

/// One stored session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub timetable: Timetable,
    pub memory: SessionMemory,
    last_touched: Instant,
}

impl SessionRecord {
    /// Time since the session was last read or written.
    pub fn idle_for(&self) -> Duration {
        self.last_touched.elapsed()
    }
}

/// Keyed store of generation sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, SessionRecord>,
    max_idle: Option<Duration>,
}

impl SessionStore {
    /// Creates a store whose sessions never expire.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose sessions expire after idling `max_idle`.
    pub fn with_max_idle(max_idle: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            max_idle: Some(max_idle),
        }
    }

    /// Stores a session under a fresh random id and returns the id.
    pub fn insert(&mut self, timetable: Timetable, memory: SessionMemory) -> String {
        let mut rng = rand::rng();
        let id = loop {
            let candidate = format!("{:016x}", rng.random::<u64>());
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        self.insert_with_id(&id, timetable, memory);
        id
    }

    /// Stores a session under a caller-chosen id, replacing any previous
    /// session with the same id.
    pub fn insert_with_id(
        &mut self,
        id: impl Into<String>,
        timetable: Timetable,
        memory: SessionMemory,
    ) {
        self.sessions.insert(
            id.into(),
            SessionRecord {
                timetable,
                memory,
                last_touched: Instant::now(),
            },
        );
    }

    /// Looks up a session and refreshes its idle clock.
    pub fn get(&mut self, id: &str) -> Option<&SessionRecord> {
        let record = self.sessions.get_mut(id)?;
        record.last_touched = Instant::now();
        Some(record)
    }

    /// Replaces a session's entries with an externally edited list and
    /// re-detects collisions over it. Returns the re-validated timetable.
    pub fn replace_timetable(
        &mut self,
        id: &str,
        entries: Vec<TimetableEntry>,
    ) -> Option<&Timetable> {
        let record = self.sessions.get_mut(id)?;
        let conflicts = detect_conflicts(&entries);
        record.timetable = Timetable { entries, conflicts };
        record.last_touched = Instant::now();
        Some(&record.timetable)
    }

    /// Applies a partial memory update. Absent patch fields keep their
    /// current value.
    pub fn patch_memory(&mut self, id: &str, patch: MemoryPatch) -> Option<&SessionMemory> {
        let record = self.sessions.get_mut(id)?;
        let memory = &mut record.memory;
        if let Some(teachers) = patch.teachers {
            memory.teachers = teachers;
        }
        if let Some(subjects) = patch.subjects {
            memory.subjects = subjects;
        }
        if let Some(classrooms) = patch.classrooms {
            memory.classrooms = classrooms;
        }
        if let Some(days) = patch.days {
            memory.days = days;
        }
        if let Some(time_slots) = patch.time_slots {
            memory.time_slots = time_slots;
        }
        if let Some(semesters) = patch.semesters {
            memory.semesters = semesters;
        }
        record.last_touched = Instant::now();
        Some(&record.memory)
    }

    /// Removes a session.
    pub fn remove(&mut self, id: &str) -> Option<SessionRecord> {
        self.sessions.remove(id)
    }

    /// Drops every session idle longer than the store's expiry, returning
    /// how many were dropped. A no-op without an expiry.
    pub fn purge_expired(&mut self) -> usize {
        let Some(max_idle) = self.max_idle else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|_, record| record.idle_for() <= max_idle);
        let purged = before - self.sessions.len();
        if purged > 0 {
            debug!(purged, remaining = self.sessions.len(), "expired sessions purged");
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
