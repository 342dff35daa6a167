use super::{
    CourseId, InstructorId, ProgramCode, ScheduledSession, Semester, SessionTag, SubjectCode,
    Weekday, YearLevel,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One unplaceable session, recorded instead of raised (error category 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationWarning {
    pub course_id: CourseId,
    pub subject_code: SubjectCode,
    pub session_tag: SessionTag,
    pub reason: String,
}

/// Result of one `generate` call: the placed sessions plus a summary and any
/// unplaceable-session warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub subjects: Vec<ScheduledSession>,
    pub total_subjects: usize,
    pub total_faculty: usize,
    pub faculty_names: Vec<String>,
    pub optimization_score: f64,
    pub warnings: Vec<GenerationWarning>,
    pub generated_at: String,
    pub solve_time_ms: u64,
}

impl GenerationResult {
    pub fn new(
        subjects: Vec<ScheduledSession>,
        warnings: Vec<GenerationWarning>,
        solve_time_ms: u64,
    ) -> Self {
        let distinct_courses: BTreeSet<&CourseId> = subjects.iter().map(|s| &s.course_id).collect();

        let mut faculty_names: BTreeSet<String> = BTreeSet::new();
        for s in &subjects {
            faculty_names.insert(s.instructor_name.clone());
        }
        let faculty_names: Vec<String> = faculty_names.into_iter().collect();

        Self {
            total_subjects: distinct_courses.len(),
            total_faculty: faculty_names.len(),
            faculty_names,
            subjects,
            optimization_score: 0.0,
            warnings,
            generated_at: chrono::Utc::now().to_rfc3339(),
            solve_time_ms,
        }
    }

    pub fn sessions_for_course(&self, course_id: &CourseId) -> Vec<&ScheduledSession> {
        self.subjects
            .iter()
            .filter(|s| &s.course_id == course_id)
            .collect()
    }
}

/// Status of a persisted session row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PersistedStatus {
    ConflictFree,
    Active,
    Conflict,
}

impl PersistedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistedStatus::ConflictFree => "conflict-free",
            PersistedStatus::Active => "active",
            PersistedStatus::Conflict => "conflict",
        }
    }
}

impl TryFrom<String> for PersistedStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "conflict-free" => Ok(PersistedStatus::ConflictFree),
            "active" => Ok(PersistedStatus::Active),
            "conflict" => Ok(PersistedStatus::Conflict),
            other => Err(format!("unrecognized persisted status '{other}'")),
        }
    }
}

impl From<PersistedStatus> for String {
    fn from(value: PersistedStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Bit-exact persisted session record (the `subject_schedule` row shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub id: u64,
    pub subject_code: SubjectCode,
    pub subject_name: String,
    pub faculty_id: InstructorId,
    pub faculty_name: String,
    pub room_name: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub semester: Semester,
    pub academic_year: String,
    pub program: ProgramCode,
    pub year_level: YearLevel,
    pub units: u32,
    pub lec: u32,
    pub lab: u32,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub recommended_faculty: Option<Vec<String>>,
    pub has_conflict: bool,
    pub status: PersistedStatus,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_generated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_status_round_trips() {
        for s in [
            PersistedStatus::ConflictFree,
            PersistedStatus::Active,
            PersistedStatus::Conflict,
        ] {
            let text: String = s.into();
            assert_eq!(PersistedStatus::try_from(text).unwrap(), s);
        }
    }
}
