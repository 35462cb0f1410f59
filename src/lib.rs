//! Constraint-based school timetable generation.
//!
//! Builds weekly timetables from teachers, subjects, classrooms, days, and
//! time slots: a deterministic greedy placer spreads each subject's sessions
//! across the week while respecting teacher availability and the hard
//! no-double-booking constraints, and every uncovered session is explained
//! instead of silently dropped.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Subject`, `TimetableEntry`,
//!   `Timetable`, `Conflict`
//! - **`engine`**: The generation pipeline — `GenerateRequest`, `Defaults`,
//!   `TimetableGenerator`
//! - **`validation`**: Structural input checks (empty inputs, blank or
//!   duplicate labels, unresolved optional fields)
//! - **`detect`**: Collision detection over any entry list, including
//!   externally edited ones
//! - **`store`**: Keyed in-memory sessions for iterate-and-revalidate
//!   workflows
//!
//! # Example
//!
//! ```
//! use timetabler::engine::{GenerateRequest, TimetableGenerator};
//! use timetabler::models::{Subject, Teacher};
//!
//! let request = GenerateRequest::new(
//!     vec![Teacher::new("Dr. Smith").with_subject("Mathematics")],
//!     vec![Subject::new("Mathematics")
//!         .with_semester("Fall 2025")
//!         .with_sessions_per_week(3)],
//!     vec!["Room 101".to_string()],
//!     vec!["Monday".to_string(), "Tuesday".to_string(), "Wednesday".to_string()],
//!     vec!["09:00".to_string(), "10:00".to_string()],
//! );
//!
//! let timetable = TimetableGenerator::new().generate(&request).unwrap();
//! assert_eq!(timetable.entries.len(), 3);
//! assert!(timetable.is_conflict_free());
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod detect;
pub mod engine;
pub mod models;
pub mod store;
pub mod validation;
