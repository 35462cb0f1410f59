//! Conflict records.
//!
//! A conflict is either a collision (a teacher, classroom, or cohort
//! double-booked at one day/slot) or a subject-wide shortfall (fewer sessions
//! placed than required, with diagnostics). Collisions carry a day/slot;
//! shortfalls do not — they describe the subject as a whole.

use serde::{Deserialize, Serialize};

/// Classification of a conflict by the entity it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// A teacher double-booked at one day/slot.
    Teacher,
    /// A classroom double-booked at one day/slot.
    Classroom,
    /// A cohort double-booked at one day/slot, or a subject shortfall.
    Student,
}

/// Which pass of generation reported a shortfall.
///
/// A single true shortfall produces one record per phase; the phase keeps the
/// two distinguishable so reporting layers never double-count missing
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortfallPhase {
    /// Reported by the placer when candidates ran out.
    Placement,
    /// Reported by the post-generation reconciliation recount.
    Validation,
}

/// A detected scheduling conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Offending teacher (teacher collisions only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teacher: Option<String>,
    /// Offending classroom (classroom collisions only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classroom: Option<String>,
    /// Offending cohort (cohort collisions and shortfalls).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub semester: Option<String>,
    /// Day of the collision. `None` for shortfalls.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub day: Option<String>,
    /// Time slot of the collision. `None` for shortfalls.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_slot: Option<String>,
    /// Subjects implicated in this conflict.
    pub subjects: Vec<String>,
    /// Sessions still missing (shortfalls only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub missing_sessions: Option<u32>,
    /// Human-readable reasons the shortfall occurred, first-seen order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub reasons: Vec<String>,
    /// Up to five "Day @ Slot" labels where placement could still fit.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
    /// Reporting phase (shortfalls only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phase: Option<ShortfallPhase>,
}

impl Conflict {
    fn collision(kind: ConflictKind, day: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            kind,
            teacher: None,
            classroom: None,
            semester: None,
            day: Some(day.into()),
            time_slot: Some(slot.into()),
            subjects: Vec::new(),
            missing_sessions: None,
            reasons: Vec::new(),
            suggestions: Vec::new(),
            phase: None,
        }
    }

    /// Creates a teacher double-booking conflict.
    pub fn teacher_collision(
        teacher: impl Into<String>,
        day: impl Into<String>,
        slot: impl Into<String>,
        subjects: Vec<String>,
    ) -> Self {
        let mut c = Self::collision(ConflictKind::Teacher, day, slot);
        c.teacher = Some(teacher.into());
        c.subjects = subjects;
        c
    }

    /// Creates a classroom double-booking conflict.
    pub fn classroom_collision(
        classroom: impl Into<String>,
        day: impl Into<String>,
        slot: impl Into<String>,
        subjects: Vec<String>,
    ) -> Self {
        let mut c = Self::collision(ConflictKind::Classroom, day, slot);
        c.classroom = Some(classroom.into());
        c.subjects = subjects;
        c
    }

    /// Creates a cohort double-booking conflict.
    pub fn cohort_collision(
        semester: impl Into<String>,
        day: impl Into<String>,
        slot: impl Into<String>,
        subjects: Vec<String>,
    ) -> Self {
        let mut c = Self::collision(ConflictKind::Student, day, slot);
        c.semester = Some(semester.into());
        c.subjects = subjects;
        c
    }

    /// Creates a subject shortfall conflict (no day/slot).
    pub fn shortfall(
        semester: impl Into<String>,
        subject: impl Into<String>,
        missing_sessions: u32,
        phase: ShortfallPhase,
    ) -> Self {
        Self {
            kind: ConflictKind::Student,
            teacher: None,
            classroom: None,
            semester: Some(semester.into()),
            day: None,
            time_slot: None,
            subjects: vec![subject.into()],
            missing_sessions: Some(missing_sessions),
            reasons: Vec::new(),
            suggestions: Vec::new(),
            phase: Some(phase),
        }
    }

    /// Attaches shortfall reasons.
    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = reasons;
        self
    }

    /// Attaches alternative-slot suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Whether this conflict is a day/slot collision.
    pub fn is_collision(&self) -> bool {
        self.day.is_some()
    }

    /// Whether this conflict is a subject shortfall.
    pub fn is_shortfall(&self) -> bool {
        self.missing_sessions.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_factories() {
        let c = Conflict::teacher_collision("Dr. Smith", "Monday", "09:00", vec!["Math".into()]);
        assert_eq!(c.kind, ConflictKind::Teacher);
        assert_eq!(c.teacher.as_deref(), Some("Dr. Smith"));
        assert!(c.is_collision());
        assert!(!c.is_shortfall());

        let c = Conflict::classroom_collision("R1", "Monday", "09:00", vec![]);
        assert_eq!(c.kind, ConflictKind::Classroom);
        assert_eq!(c.classroom.as_deref(), Some("R1"));

        let c = Conflict::cohort_collision("Semester 1", "Monday", "09:00", vec![]);
        assert_eq!(c.kind, ConflictKind::Student);
        assert_eq!(c.semester.as_deref(), Some("Semester 1"));
    }

    #[test]
    fn test_shortfall_factory() {
        let c = Conflict::shortfall("General", "Math", 2, ShortfallPhase::Placement)
            .with_reasons(vec!["No available teacher at Monday 09:00".into()])
            .with_suggestions(vec!["Tuesday @ 09:00".into()]);

        assert_eq!(c.kind, ConflictKind::Student);
        assert_eq!(c.missing_sessions, Some(2));
        assert_eq!(c.day, None);
        assert_eq!(c.time_slot, None);
        assert_eq!(c.phase, Some(ShortfallPhase::Placement));
        assert!(c.is_shortfall());
        assert!(!c.is_collision());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let c = Conflict::shortfall("General", "Math", 1, ShortfallPhase::Validation);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "student");
        assert_eq!(json["phase"], "validation");
        // Shortfalls omit day/slot entirely.
        assert!(json.get("day").is_none());
        assert!(json.get("time_slot").is_none());
    }
}
