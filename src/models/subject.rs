//! Subject model.
//!
//! A subject is a unit of teaching demand: it names what is taught, which
//! student cohort (semester) attends it, and how many sessions per week it
//! requires. Subjects are matched to teachers by name under a normalized
//! (trimmed, case-insensitive) key.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Separator characters that split a department label into code and title,
/// probed in this order: en dash, em dash, ASCII hyphen.
const DEPT_SEPARATORS: [char; 3] = ['\u{2013}', '\u{2014}', '-'];

/// A subject to be placed on the timetable.
///
/// `semester` and `sessions_per_week` are optional on input; absent values
/// are filled from an explicitly attached [`Defaults`](crate::engine::Defaults)
/// policy, never silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name; the cross-reference key into teacher capability
    /// and into placed entries.
    pub name: String,
    /// Cohort key. `None` = unresolved (requires a defaults policy).
    pub semester: Option<String>,
    /// Free-text department labels from which codes are derived.
    pub departments: Vec<String>,
    /// Weekly session demand. `None` = unresolved (requires a defaults policy).
    pub sessions_per_week: Option<u32>,
}

impl Subject {
    /// Creates a new subject with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            semester: None,
            departments: Vec::new(),
            sessions_per_week: None,
        }
    }

    /// Sets the semester (cohort key).
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    /// Sets the weekly session demand.
    pub fn with_sessions_per_week(mut self, sessions: u32) -> Self {
        self.sessions_per_week = Some(sessions);
        self
    }

    /// Adds a department label.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.departments.push(department.into());
        self
    }

    /// Normalized matching key for this subject's name.
    pub fn key(&self) -> SubjectKey {
        SubjectKey::new(&self.name)
    }

    /// Derives department codes from the raw department labels.
    ///
    /// For each label: trim; if it contains a hyphen-like separator, take the
    /// token before the first one (probing en dash, em dash, then ASCII
    /// hyphen); otherwise take the first whitespace-delimited token. Empty
    /// results are skipped; duplicates are removed preserving first-seen
    /// order.
    pub fn department_codes(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut codes = Vec::new();
        for raw in &self.departments {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let code = match DEPT_SEPARATORS.iter().find(|&&sep| raw.contains(sep)) {
                Some(&sep) => raw.splitn(2, sep).next().unwrap_or("").trim(),
                None => raw.split_whitespace().next().unwrap_or(""),
            };
            if !code.is_empty() && seen.insert(code.to_string()) {
                codes.push(code.to_string());
            }
        }
        codes
    }

    /// Deterministic pastel display color for this subject.
    ///
    /// Hashes the name into a hue (`h = (h * 31 + char) mod 360`) and renders
    /// it as an HSL string for external presentation layers.
    pub fn display_color(&self) -> String {
        let mut h: u32 = 0;
        for ch in self.name.chars() {
            h = (h.wrapping_mul(31) + ch as u32) % 360;
        }
        format!("hsl({h},65%,85%)")
    }
}

/// Normalized subject-name key: trimmed and lowercased.
///
/// Built once per input set and used for all subject↔teacher capability
/// matching, so case and surrounding whitespace never affect placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectKey(String);

impl SubjectKey {
    /// Normalizes a raw subject name.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
