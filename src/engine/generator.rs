//! Timetable generation pipeline.
//!
//! Wires the pieces together: structural validation, defaults resolution,
//! slot ranking, candidate enumeration, greedy placement, shortfall
//! diagnostics, a full collision re-scan, and a reconciliation recount.
//! Generation is fully deterministic: identical inputs always produce an
//! identical timetable and conflict list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detect::detect_conflicts;
use crate::models::{
    Conflict, ShortfallPhase, Subject, SubjectKey, Teacher, Timetable, TimetableEntry,
};
use crate::validation::{validate_request, ValidationError};

use super::availability::AvailabilityIndex;
use super::candidates::enumerate_candidates;
use super::diagnostics::shortfall_conflict;
use super::grid::SlotGrid;
use super::placer::{place_subject, PlacementStatus};
use super::state::ScheduleState;

/// Fallback values for optional subject fields.
///
/// When attached to a request, a subject with no `semester` or no
/// `sessions_per_week` takes the value from here. Without a defaults policy,
/// such subjects are structural validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Semester assigned to subjects that declare none.
    pub semester: String,
    /// Weekly demand assigned to subjects that declare none.
    pub sessions_per_week: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            semester: "General".to_string(),
            sessions_per_week: 2,
        }
    }
}

/// Everything a single generation run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Teaching staff with capabilities and availability.
    pub teachers: Vec<Teacher>,
    /// Subjects to schedule.
    pub subjects: Vec<Subject>,
    /// Classroom labels.
    pub classrooms: Vec<String>,
    /// Day labels, in week order.
    pub days: Vec<String>,
    /// Time-slot labels, in day order.
    pub time_slots: Vec<String>,
    /// Optional fallback policy for unresolved subject fields.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub defaults: Option<Defaults>,
}

impl GenerateRequest {
    /// Creates a request with no defaults policy.
    pub fn new(
        teachers: Vec<Teacher>,
        subjects: Vec<Subject>,
        classrooms: Vec<String>,
        days: Vec<String>,
        time_slots: Vec<String>,
    ) -> Self {
        Self {
            teachers,
            subjects,
            classrooms,
            days,
            time_slots,
            defaults: None,
        }
    }

    /// Attaches a defaults policy.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

/// A subject with its optional fields resolved for one run.
struct SubjectPlan<'a> {
    subject: &'a Subject,
    semester: String,
    required: u32,
    cohort: usize,
}

/// The greedy timetable generator.
///
/// Stateless: every call to [`generate`](Self::generate) starts from an
/// empty schedule, so one generator can serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimetableGenerator;

impl TimetableGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline.
    ///
    /// Structural input problems fail the whole invocation with every
    /// detected [`ValidationError`]; coverage problems (a well-formed
    /// subject that cannot be fully placed) come back as [`Conflict`]
    /// records on the [`Timetable`] instead. The conflict list is ordered:
    /// collisions first, then placement shortfalls, then reconciliation
    /// shortfalls.
    pub fn generate(&self, request: &GenerateRequest) -> Result<Timetable, Vec<ValidationError>> {
        validate_request(request)?;

        let grid = SlotGrid::new(&request.days, &request.time_slots);
        let availability = AvailabilityIndex::build(&request.teachers, &grid);
        let teacher_keys: Vec<String> = request
            .teachers
            .iter()
            .map(|t| t.name.trim().to_lowercase())
            .collect();
        let display_names: Vec<String> =
            request.teachers.iter().map(|t| t.name.clone()).collect();
        let subject_index = index_subjects(&request.teachers);
        let plans = resolve_plans(&request.subjects, request.defaults.as_ref());
        let cohort_count = plans.iter().map(|p| p.cohort + 1).max().unwrap_or(0);

        let mut state = ScheduleState::new(
            &grid,
            request.teachers.len(),
            request.classrooms.len(),
            cohort_count,
            availability,
        );

        let mut placement_shortfalls = Vec::new();
        for plan in &plans {
            let key = plan.subject.key();
            let qualified: &[usize] = subject_index.get(&key).map_or(&[], Vec::as_slice);
            let candidates = enumerate_candidates(
                &state,
                &grid,
                plan.cohort,
                qualified,
                &teacher_keys,
                &request.classrooms,
            );
            let outcome = place_subject(
                &mut state,
                &grid,
                plan.subject,
                &plan.semester,
                plan.cohort,
                plan.required,
                &candidates,
                &display_names,
                &request.classrooms,
            );
            if let PlacementStatus::Partial { missing } = outcome.status {
                debug!(
                    subject = %plan.subject.name,
                    semester = %plan.semester,
                    placed = outcome.placed,
                    missing,
                    "subject underplaced"
                );
                placement_shortfalls.push(shortfall_conflict(
                    &state,
                    &grid,
                    &plan.subject.name,
                    &plan.semester,
                    plan.cohort,
                    qualified,
                    request.classrooms.len(),
                    missing,
                ));
            }
        }

        let entries = state.into_entries();
        let collisions = detect_conflicts(&entries);
        let reconciliation = reconcile(&entries, &plans);

        let mut conflicts = collisions;
        conflicts.extend(placement_shortfalls);
        conflicts.extend(reconciliation);

        debug!(
            entries = entries.len(),
            conflicts = conflicts.len(),
            "generation complete"
        );
        Ok(Timetable { entries, conflicts })
    }
}

/// Maps each normalized subject name to the teachers who can teach it, in
/// teacher input order. Blank capability entries are skipped.
fn index_subjects(teachers: &[Teacher]) -> HashMap<SubjectKey, Vec<usize>> {
    let mut index: HashMap<SubjectKey, Vec<usize>> = HashMap::new();
    for (i, teacher) in teachers.iter().enumerate() {
        for raw in &teacher.subjects {
            let key = SubjectKey::new(raw);
            if key.is_empty() {
                continue;
            }
            let slots = index.entry(key).or_default();
            if slots.last() != Some(&i) {
                slots.push(i);
            }
        }
    }
    index
}

/// Resolves subjects against the defaults policy and assigns cohort ids in
/// first-seen semester order.
///
/// Validation has already rejected unresolvable subjects, so a subject with
/// a missing field and no default simply cannot occur here.
fn resolve_plans<'a>(subjects: &'a [Subject], defaults: Option<&Defaults>) -> Vec<SubjectPlan<'a>> {
    let mut cohort_ids: HashMap<String, usize> = HashMap::new();
    subjects
        .iter()
        .filter_map(|subject| {
            let semester = subject
                .semester
                .clone()
                .or_else(|| defaults.map(|d| d.semester.clone()))?;
            let required = subject
                .sessions_per_week
                .or(defaults.map(|d| d.sessions_per_week))?;
            let next = cohort_ids.len();
            let cohort = *cohort_ids.entry(semester.clone()).or_insert(next);
            Some(SubjectPlan {
                subject,
                semester,
                required,
                cohort,
            })
        })
        .collect()
}

/// Recounts committed sessions per plan and reports remaining shortfalls.
///
/// Runs unconditionally after placement, so a subject underplaced during
/// placement shows up twice: once with [`ShortfallPhase::Placement`] and
/// reasons attached, once here with [`ShortfallPhase::Validation`] and none.
fn reconcile(entries: &[TimetableEntry], plans: &[SubjectPlan<'_>]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for plan in plans {
        let count = entries
            .iter()
            .filter(|e| e.subject == plan.subject.name && e.semester == plan.semester)
            .count() as u32;
        if count < plan.required {
            conflicts.push(Conflict::shortfall(
                &plan.semester,
                &plan.subject.name,
                plan.required - count,
                ShortfallPhase::Validation,
            ));
        }
    }
    conflicts
}
