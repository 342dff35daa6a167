use crate::error::{Result, SchedulerError};
use crate::types::{
    Course, Instructor, PersistedSession, PersistedStatus, ProgramCode, Room, ScheduledSession,
    Semester, SubjectCode, YearLevel,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// One row of the curriculum prospectus: a course offering summarized for
/// display, independent of whether it has been scheduled yet.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProspectusRow {
    pub curriculum_year: String,
    pub program: ProgramCode,
    pub year_level: YearLevel,
    pub semester: Semester,
    pub subject_code: SubjectCode,
    pub subject_name: String,
    pub lec_units: u32,
    pub lab_units: u32,
    pub total_units: u32,
}

/// One `(year_level, semester)` bucket of the prospectus.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProspectusGroup {
    pub year_level: YearLevel,
    pub semester: Semester,
    pub rows: Vec<ProspectusRow>,
}

/// `get_prospectus`'s grouped view: course offerings for one
/// `(academic_year, program)` pair, bucketed by year level then semester.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProspectusView {
    pub academic_year: String,
    pub program: String,
    pub groups: Vec<ProspectusGroup>,
}

/// Result of a `save`: how many previously persisted rows were replaced and
/// how many new rows were inserted in their place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SaveResult {
    pub deleted: usize,
    pub inserted: usize,
}

/// Treats an absent or literal `"all"` program filter as "no filter",
/// per the input query key contract shared by `generate`/`get_prospectus`.
fn program_matches(filter: &str, program: &ProgramCode) -> bool {
    filter.is_empty() || filter.eq_ignore_ascii_case("all") || filter.eq_ignore_ascii_case(&program.0)
}

/// Persistence boundary for the scheduler core. Reads load the immutable
/// input dataset; `save` replaces the persisted session set for the
/// `(curriculum_year, semester)` derived from its first session, in a
/// single transactional unit.
pub trait ScheduleStore {
    fn load_courses(&self) -> Result<Vec<Course>>;
    fn load_instructors(&self) -> Result<Vec<Instructor>>;
    fn load_rooms(&self) -> Result<Vec<Room>>;

    /// Deletes all persisted rows whose `(curriculum_year, semester)` match
    /// the first session's key, then inserts `sessions` in their place.
    /// Empty input is a no-op: there is no key to derive, so nothing is
    /// deleted and nothing is inserted.
    fn save(&self, sessions: &[ScheduledSession]) -> Result<SaveResult>;

    /// Read-through to persisted rows, optionally filtered to one academic year.
    fn list(&self, academic_year: Option<&str>) -> Result<Vec<PersistedSession>>;

    /// Curriculum-course metadata for one `(academic_year, program)` pair,
    /// grouped by year level and semester. `program` of `""` or `"all"`
    /// (case-insensitive) matches every program.
    fn get_prospectus(&self, academic_year: &str, program: &str) -> Result<ProspectusView>;
}

/// Reference `ScheduleStore`: `Mutex`-guarded in-memory vectors. The same
/// shape the CLI's JSON loader produces, except `save` also performs the
/// delete-then-insert replace under one lock acquisition, so a failure
/// midway never leaves a mixed old/new session set.
pub struct InMemoryStore {
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
    rooms: Vec<Room>,
    sessions: Mutex<Vec<PersistedSession>>,
    next_id: Mutex<u64>,
}

impl InMemoryStore {
    pub fn new(courses: Vec<Course>, instructors: Vec<Instructor>, rooms: Vec<Room>) -> Self {
        Self {
            courses,
            instructors,
            rooms,
            sessions: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    fn next_session_id(&self) -> u64 {
        let mut guard = self.next_id.lock().unwrap();
        let id = *guard;
        *guard += 1;
        id
    }
}

impl ScheduleStore for InMemoryStore {
    fn load_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }

    fn load_instructors(&self) -> Result<Vec<Instructor>> {
        Ok(self.instructors.clone())
    }

    fn load_rooms(&self) -> Result<Vec<Room>> {
        Ok(self.rooms.clone())
    }

    fn save(&self, sessions: &[ScheduledSession]) -> Result<SaveResult> {
        let Some(first) = sessions.first() else {
            return Ok(SaveResult { deleted: 0, inserted: 0 });
        };
        let curriculum_year = first.curriculum_year.clone();
        let semester = first.semester;

        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| SchedulerError::StoreFailure(e.to_string()))?;

        let before = guard.len();
        guard.retain(|row| !(row.academic_year == curriculum_year && row.semester == semester));
        let deleted = before - guard.len();

        let now = chrono::Utc::now().to_rfc3339();
        for session in sessions {
            let id = self.next_session_id();
            guard.push(PersistedSession {
                id,
                subject_code: session.subject_code.clone(),
                subject_name: session.subject_name.clone(),
                faculty_id: session.instructor_id.clone(),
                faculty_name: session.instructor_name.clone(),
                room_name: session.room_name.clone(),
                day: session.day,
                start_time: crate::types::format_hhmm(session.start_minutes),
                end_time: crate::types::format_hhmm(session.end_minutes),
                semester: session.semester,
                academic_year: curriculum_year.clone(),
                program: session.program.clone(),
                year_level: session.year_level,
                units: session.units,
                lec: session.lec,
                lab: session.lab,
                tags: None,
                recommended_faculty: None,
                has_conflict: false,
                status: PersistedStatus::ConflictFree,
                is_active: true,
                created_at: now.clone(),
                updated_at: now.clone(),
                last_generated: now.clone(),
            });
        }

        Ok(SaveResult {
            deleted,
            inserted: sessions.len(),
        })
    }

    fn list(&self, academic_year: Option<&str>) -> Result<Vec<PersistedSession>> {
        let rows = self
            .sessions
            .lock()
            .map_err(|e| SchedulerError::StoreFailure(e.to_string()))?
            .clone();

        Ok(match academic_year {
            Some(year) => rows.into_iter().filter(|r| r.academic_year == year).collect(),
            None => rows,
        })
    }

    fn get_prospectus(&self, academic_year: &str, program: &str) -> Result<ProspectusView> {
        let mut buckets: BTreeMap<(YearLevel, Semester), Vec<ProspectusRow>> = BTreeMap::new();

        for c in &self.courses {
            if c.curriculum_year != academic_year {
                continue;
            }
            if !program_matches(program, &c.program) {
                continue;
            }

            buckets.entry((c.year_level, c.semester)).or_default().push(ProspectusRow {
                curriculum_year: c.curriculum_year.clone(),
                program: c.program.clone(),
                year_level: c.year_level,
                semester: c.semester,
                subject_code: c.subject_code.clone(),
                subject_name: c.subject_name.clone(),
                lec_units: c.lec_units,
                lab_units: c.lab_units,
                total_units: c.total_units(),
            });
        }

        let groups = buckets
            .into_iter()
            .map(|((year_level, semester), rows)| ProspectusGroup {
                year_level,
                semester,
                rows,
            })
            .collect();

        Ok(ProspectusView {
            academic_year: academic_year.to_string(),
            program: if program.is_empty() { "all".to_string() } else { program.to_string() },
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, InstructorId, RoomId, SessionTag};
    use std::collections::HashSet;

    fn course() -> Course {
        Course {
            id: CourseId("c1".into()),
            curriculum_year: "2025-2026".into(),
            program: ProgramCode("BSCS".into()),
            year_level: YearLevel::First,
            semester: Semester::First,
            subject_code: SubjectCode("CS101".into()),
            subject_name: "Intro to Programming".into(),
            lec_units: 3,
            lab_units: 0,
            department: Some("BSCS".into()),
            tags: HashSet::new(),
        }
    }

    fn session() -> ScheduledSession {
        ScheduledSession {
            course_id: CourseId("c1".into()),
            curriculum_year: "2025-2026".into(),
            tag: SessionTag::Lecture,
            day: crate::types::Weekday::Monday,
            start_minutes: 420,
            end_minutes: 510,
            instructor_id: InstructorId("f1".into()),
            instructor_name: "Ada Lovelace".into(),
            room_id: RoomId("r1".into()),
            room_name: "Room 1".into(),
            subject_code: SubjectCode("CS101".into()),
            subject_name: "Intro to Programming".into(),
            program: ProgramCode("BSCS".into()),
            year_level: YearLevel::First,
            semester: Semester::First,
            units: 3,
            lec: 3,
            lab: 0,
        }
    }

    #[test]
    fn save_replaces_prior_sessions_for_same_year_and_semester() {
        let store = InMemoryStore::new(vec![course()], vec![], vec![]);
        let first_save = store.save(&[session()]).unwrap();
        assert_eq!(first_save, SaveResult { deleted: 0, inserted: 1 });
        assert_eq!(store.list(None).unwrap().len(), 1);

        let mut second = session();
        second.course_id = CourseId("c2".into());
        second.subject_code = SubjectCode("CS102".into());
        let second_save = store.save(&[second]).unwrap();
        assert_eq!(second_save, SaveResult { deleted: 1, inserted: 1 });

        let rows = store.list(None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject_code.0, "CS102");
    }

    #[test]
    fn list_filters_by_academic_year() {
        let store = InMemoryStore::new(vec![course()], vec![], vec![]);
        store.save(&[session()]).unwrap();

        let mut other_year = session();
        other_year.curriculum_year = "2026-2027".into();
        other_year.subject_code = SubjectCode("CS999".into());
        store.save(&[other_year]).unwrap();

        assert_eq!(store.list(Some("2025-2026")).unwrap().len(), 1);
        assert_eq!(store.list(Some("2026-2027")).unwrap().len(), 1);
        assert_eq!(store.list(None).unwrap().len(), 2);
    }

    #[test]
    fn prospectus_groups_by_year_level_and_semester() {
        let mut second_year_course = course();
        second_year_course.id = CourseId("c2".into());
        second_year_course.year_level = YearLevel::Second;
        second_year_course.subject_code = SubjectCode("CS201".into());

        let store = InMemoryStore::new(vec![course(), second_year_course], vec![], vec![]);
        let view = store.get_prospectus("2025-2026", "all").unwrap();

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].year_level, YearLevel::First);
        assert_eq!(view.groups[1].year_level, YearLevel::Second);
    }

    #[test]
    fn prospectus_filters_by_program() {
        let mut act_course = course();
        act_course.id = CourseId("c2".into());
        act_course.program = ProgramCode("ACT".into());
        act_course.subject_code = SubjectCode("ACT101".into());

        let store = InMemoryStore::new(vec![course(), act_course], vec![], vec![]);
        let view = store.get_prospectus("2025-2026", "BSCS").unwrap();

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].rows.len(), 1);
        assert_eq!(view.groups[0].rows[0].program.0, "BSCS");
    }
}
