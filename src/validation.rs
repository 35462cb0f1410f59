//! Structural input validation.
//!
//! Checks a [`GenerateRequest`] before generation runs. Detects:
//! - Empty required input sequences
//! - Blank or duplicate teacher/classroom/day/slot labels
//! - Blank subject names
//! - Unresolved optional subject fields with no defaults policy attached
//!
//! Structural errors fail the whole invocation; coverage failures (a
//! well-formed subject that cannot be fully scheduled) never appear here —
//! they become [`Conflict`](crate::models::Conflict) records instead.

use std::collections::HashSet;

use thiserror::Error;

use crate::engine::GenerateRequest;

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural problem in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input sequence is empty.
    #[error("no {0} provided")]
    EmptyInput(&'static str),
    /// A teacher has a blank name.
    #[error("teacher at position {0} has a blank name")]
    BlankTeacherName(usize),
    /// Two teachers share a name.
    #[error("duplicate teacher name: {0}")]
    DuplicateTeacher(String),
    /// A subject has a blank name.
    #[error("subject at position {0} has a blank name")]
    BlankSubjectName(usize),
    /// A classroom label is blank.
    #[error("classroom at position {0} is blank")]
    BlankClassroom(usize),
    /// Two classroom labels are identical.
    #[error("duplicate classroom: {0}")]
    DuplicateClassroom(String),
    /// A day label is blank.
    #[error("day at position {0} is blank")]
    BlankDay(usize),
    /// Two day labels are identical.
    #[error("duplicate day: {0}")]
    DuplicateDay(String),
    /// A time-slot label is blank.
    #[error("time slot at position {0} is blank")]
    BlankTimeSlot(usize),
    /// Two time-slot labels are identical.
    #[error("duplicate time slot: {0}")]
    DuplicateTimeSlot(String),
    /// A subject has no semester and the request carries no defaults policy.
    #[error("subject '{0}' has no semester and the request carries no defaults")]
    UnresolvedSemester(String),
    /// A subject has no session demand and the request carries no defaults
    /// policy.
    #[error("subject '{0}' has no sessions_per_week and the request carries no defaults")]
    UnresolvedSessions(String),
}

/// Validates a generation request.
///
/// Collects every detected issue rather than stopping at the first, so a
/// caller can report all of them at once.
pub fn validate_request(request: &GenerateRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.teachers.is_empty() {
        errors.push(ValidationError::EmptyInput("teachers"));
    }
    if request.subjects.is_empty() {
        errors.push(ValidationError::EmptyInput("subjects"));
    }
    if request.classrooms.is_empty() {
        errors.push(ValidationError::EmptyInput("classrooms"));
    }
    if request.days.is_empty() {
        errors.push(ValidationError::EmptyInput("days"));
    }
    if request.time_slots.is_empty() {
        errors.push(ValidationError::EmptyInput("time slots"));
    }

    let mut teacher_names = HashSet::new();
    for (i, teacher) in request.teachers.iter().enumerate() {
        if teacher.name.trim().is_empty() {
            errors.push(ValidationError::BlankTeacherName(i));
        } else if !teacher_names.insert(teacher.name.as_str()) {
            errors.push(ValidationError::DuplicateTeacher(teacher.name.clone()));
        }
    }

    for (i, subject) in request.subjects.iter().enumerate() {
        if subject.name.trim().is_empty() {
            errors.push(ValidationError::BlankSubjectName(i));
            continue;
        }
        if request.defaults.is_none() {
            if subject.semester.is_none() {
                errors.push(ValidationError::UnresolvedSemester(subject.name.clone()));
            }
            if subject.sessions_per_week.is_none() {
                errors.push(ValidationError::UnresolvedSessions(subject.name.clone()));
            }
        }
    }

    check_labels(
        &request.classrooms,
        &mut errors,
        ValidationError::BlankClassroom,
        ValidationError::DuplicateClassroom,
    );
    check_labels(
        &request.days,
        &mut errors,
        ValidationError::BlankDay,
        ValidationError::DuplicateDay,
    );
    check_labels(
        &request.time_slots,
        &mut errors,
        ValidationError::BlankTimeSlot,
        ValidationError::DuplicateTimeSlot,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks one label sequence for blanks and duplicates.
///
/// Duplicate labels are rejected because busy-grid identity would silently
/// collapse them into one entity.
fn check_labels(
    labels: &[String],
    errors: &mut Vec<ValidationError>,
    blank: fn(usize) -> ValidationError,
    duplicate: fn(String) -> ValidationError,
) {
    let mut seen = HashSet::new();
    for (i, label) in labels.iter().enumerate() {
        if label.trim().is_empty() {
            errors.push(blank(i));
        } else if !seen.insert(label.as_str()) {
            errors.push(duplicate(label.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Defaults;
    use crate::models::{Subject, Teacher};

    fn sample_request() -> GenerateRequest {
        GenerateRequest::new(
            vec![Teacher::new("Alice").with_subject("Math")],
            vec![Subject::new("Math").with_semester("S1").with_sessions_per_week(2)],
            vec!["R1".into()],
            vec!["Monday".into(), "Tuesday".into()],
            vec!["09:00".into(), "10:00".into()],
        )
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn test_empty_sequences() {
        let request = GenerateRequest::new(vec![], vec![], vec![], vec![], vec![]);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptyInput("teachers")));
        assert!(errors.contains(&ValidationError::EmptyInput("time slots")));
    }

    #[test]
    fn test_duplicate_teacher() {
        let mut request = sample_request();
        request.teachers.push(Teacher::new("Alice"));
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateTeacher("Alice".into())));
    }

    #[test]
    fn test_blank_subject_name() {
        let mut request = sample_request();
        request.subjects.push(Subject::new("   "));
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.contains(&ValidationError::BlankSubjectName(1)));
    }

    #[test]
    fn test_duplicate_day_and_slot() {
        let mut request = sample_request();
        request.days.push("Monday".into());
        request.time_slots.push("09:00".into());
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateDay("Monday".into())));
        assert!(errors.contains(&ValidationError::DuplicateTimeSlot("09:00".into())));
    }

    #[test]
    fn test_unresolved_fields_without_defaults() {
        let mut request = sample_request();
        request.subjects.push(Subject::new("History"));
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.contains(&ValidationError::UnresolvedSemester("History".into())));
        assert!(errors.contains(&ValidationError::UnresolvedSessions("History".into())));
    }

    #[test]
    fn test_defaults_resolve_missing_fields() {
        let mut request = sample_request();
        request.subjects.push(Subject::new("History"));
        let request = request.with_defaults(Defaults::default());
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::DuplicateTeacher("Alice".into());
        assert_eq!(e.to_string(), "duplicate teacher name: Alice");
    }
}
