//! Teacher model.
//!
//! A teacher is identified by name, declares the subjects they can teach,
//! and optionally restricts when they may be booked via a day → slots
//! availability mapping. An empty mapping means open availability.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SubjectKey;

/// A teacher who can be assigned to sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher name.
    pub name: String,
    /// Names of subjects this teacher may teach (matched case-insensitively).
    pub subjects: Vec<String>,
    /// Day → allowed time slots. Empty = available at every day/slot.
    pub availability: HashMap<String, Vec<String>>,
}

impl Teacher {
    /// Creates a new teacher with open availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: Vec::new(),
            availability: HashMap::new(),
        }
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Sets the full list of teachable subjects.
    pub fn with_subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Restricts availability on a day to the given slots.
    pub fn with_availability(mut self, day: impl Into<String>, slots: Vec<String>) -> Self {
        self.availability.insert(day.into(), slots);
        self
    }

    /// Whether this teacher has no availability restrictions.
    pub fn has_open_availability(&self) -> bool {
        self.availability.is_empty()
    }

    /// Whether this teacher may be booked at the given day and slot.
    ///
    /// Open availability returns `true` unconditionally; otherwise the day
    /// must be present in the mapping and the slot listed under it.
    pub fn is_available(&self, day: &str, slot: &str) -> bool {
        if self.availability.is_empty() {
            return true;
        }
        self.availability
            .get(day)
            .is_some_and(|slots| slots.iter().any(|s| s == slot))
    }

    /// Whether this teacher can teach the subject behind the given key.
    pub fn teaches(&self, key: &SubjectKey) -> bool {
        self.subjects.iter().any(|s| SubjectKey::new(s) == *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("Dr. Smith")
            .with_subject("Mathematics")
            .with_subject("Physics")
            .with_availability("Monday", vec!["09:00".into(), "10:00".into()]);

        assert_eq!(t.name, "Dr. Smith");
        assert_eq!(t.subjects.len(), 2);
        assert!(!t.has_open_availability());
    }

    #[test]
    fn test_open_availability() {
        let t = Teacher::new("Dr. Smith");
        assert!(t.has_open_availability());
        assert!(t.is_available("Monday", "09:00"));
        assert!(t.is_available("Anything", "Whenever"));
    }

    #[test]
    fn test_restricted_availability() {
        let t = Teacher::new("Dr. Smith")
            .with_availability("Monday", vec!["09:00".into()]);

        assert!(t.is_available("Monday", "09:00"));
        assert!(!t.is_available("Monday", "10:00"));
        assert!(!t.is_available("Tuesday", "09:00"));
    }

    #[test]
    fn test_teaches_case_insensitive() {
        let t = Teacher::new("Dr. Smith").with_subject("  Mathematics ");
        assert!(t.teaches(&SubjectKey::new("mathematics")));
        assert!(t.teaches(&SubjectKey::new("MATHEMATICS  ")));
        assert!(!t.teaches(&SubjectKey::new("history")));
    }
}
