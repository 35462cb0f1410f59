//! Timetable (solution) model.
//!
//! A timetable is the generation result: an ordered list of committed entries
//! (insertion order = commit order) plus any conflicts. External editors may
//! replace the entry list wholesale; the replacement is re-validated with
//! [`detect_conflicts`](crate::detect::detect_conflicts).

use serde::{Deserialize, Serialize};

use super::Conflict;

/// One committed session: a subject taught by a teacher in classroom(s)
/// at a specific day and time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Day label, as given in the input day sequence.
    pub day: String,
    /// Time-slot label, as given in the input slot sequence.
    pub time_slot: String,
    /// Subject name.
    pub subject: String,
    /// Teacher name.
    pub teacher: String,
    /// Cohort key.
    pub semester: String,
    /// Classroom names (normally a singleton).
    pub classrooms: Vec<String>,
    /// Department codes derived from the subject at commit time.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub department_codes: Vec<String>,
    /// Optional free text carried through external edits.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl TimetableEntry {
    /// Creates a new entry with no classrooms or department codes.
    pub fn new(
        day: impl Into<String>,
        time_slot: impl Into<String>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        semester: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time_slot: time_slot.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            semester: semester.into(),
            classrooms: Vec::new(),
            department_codes: Vec::new(),
            description: None,
        }
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: impl Into<String>) -> Self {
        self.classrooms.push(classroom.into());
        self
    }

    /// Sets the department codes.
    pub fn with_department_codes(mut self, codes: Vec<String>) -> Self {
        self.department_codes = codes;
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A generated timetable: committed entries plus detected conflicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed entries in commit order.
    pub entries: Vec<TimetableEntry>,
    /// Conflicts: collisions first, then placement shortfalls, then
    /// reconciliation shortfalls.
    pub conflicts: Vec<Conflict>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no conflicts were detected.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of committed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries at a given day and slot.
    pub fn entries_at(&self, day: &str, slot: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.day == day && e.time_slot == slot)
            .collect()
    }

    /// Entries taught by a given teacher.
    pub fn entries_for_teacher(&self, teacher: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.teacher == teacher).collect()
    }

    /// Entries belonging to a given cohort.
    pub fn entries_for_semester(&self, semester: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.semester == semester).collect()
    }

    /// Number of committed sessions for a (subject, semester) pair.
    pub fn session_count(&self, subject: &str, semester: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.subject == subject && e.semester == semester)
            .count()
    }

    /// Total sessions assigned to a teacher.
    pub fn teacher_load(&self, teacher: &str) -> usize {
        self.entries_for_teacher(teacher).len()
    }

    /// Collision conflicts (teacher/classroom/cohort double-bookings).
    pub fn collisions(&self) -> Vec<&Conflict> {
        self.conflicts.iter().filter(|c| c.is_collision()).collect()
    }

    /// Shortfall conflicts (unmet session demand).
    pub fn shortfalls(&self) -> Vec<&Conflict> {
        self.conflicts.iter().filter(|c| c.is_shortfall()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortfallPhase;

    fn sample() -> Timetable {
        Timetable {
            entries: vec![
                TimetableEntry::new("Monday", "09:00", "Math", "Alice", "S1")
                    .with_classroom("R1")
                    .with_department_codes(vec!["CS".into()]),
                TimetableEntry::new("Monday", "10:00", "Physics", "Bob", "S1").with_classroom("R1"),
                TimetableEntry::new("Tuesday", "09:00", "Math", "Alice", "S1").with_classroom("R2"),
            ],
            conflicts: Vec::new(),
        }
    }

    #[test]
    fn test_entries_at() {
        let tt = sample();
        assert_eq!(tt.entries_at("Monday", "09:00").len(), 1);
        assert_eq!(tt.entries_at("Monday", "11:00").len(), 0);
    }

    #[test]
    fn test_teacher_and_semester_queries() {
        let tt = sample();
        assert_eq!(tt.entries_for_teacher("Alice").len(), 2);
        assert_eq!(tt.teacher_load("Bob"), 1);
        assert_eq!(tt.entries_for_semester("S1").len(), 3);
    }

    #[test]
    fn test_session_count() {
        let tt = sample();
        assert_eq!(tt.session_count("Math", "S1"), 2);
        assert_eq!(tt.session_count("Math", "S2"), 0);
    }

    #[test]
    fn test_conflict_partitions() {
        let mut tt = sample();
        assert!(tt.is_conflict_free());

        tt.conflicts.push(Conflict::teacher_collision(
            "Alice",
            "Monday",
            "09:00",
            vec!["Math".into(), "Physics".into()],
        ));
        tt.conflicts
            .push(Conflict::shortfall("S1", "Chemistry", 1, ShortfallPhase::Placement));

        assert!(!tt.is_conflict_free());
        assert_eq!(tt.collisions().len(), 1);
        assert_eq!(tt.shortfalls().len(), 1);
    }

    #[test]
    fn test_entry_roundtrip_keeps_description() {
        let e = TimetableEntry::new("Monday", "09:00", "Math", "Alice", "S1")
            .with_description("double period");
        let json = serde_json::to_string(&e).unwrap();
        let back: TimetableEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.description.as_deref(), Some("double period"));
    }
}
