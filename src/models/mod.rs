//! Timetabling domain models.
//!
//! Input descriptors ([`Teacher`], [`Subject`]) and output records
//! ([`TimetableEntry`], [`Timetable`], [`Conflict`]). Days, time slots, and
//! classrooms are plain string atoms: their identity is the label and their
//! order is exactly the order of the input sequences.
//!
//! Input descriptors are read-only to the engine; a fresh [`Timetable`] is
//! produced per generation call.

mod conflict;
mod subject;
mod teacher;
mod timetable;

pub use conflict::{Conflict, ConflictKind, ShortfallPhase};
pub use subject::{Subject, SubjectKey};
pub use teacher::Teacher;
pub use timetable::{Timetable, TimetableEntry};
