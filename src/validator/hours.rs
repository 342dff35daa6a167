use crate::types::{Course, ScheduledSession, SessionTag};
use crate::validator::{Severity, Violation};
use std::collections::HashMap;

const LAB_HOURS_PER_UNIT: f64 = 3.0;
const HOURS_TOLERANCE: f64 = 0.1;

/// Groups sessions by (subject_code, program, year_level) and compares the
/// hours the course's units imply against the hours actually placed.
pub fn check_weekly_hours(courses: &[Course], sessions: &[ScheduledSession]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut actual_hours: HashMap<(String, String, String), f64> = HashMap::new();
    let mut lecture_counts: HashMap<(String, String, String), u32> = HashMap::new();
    for s in sessions {
        let key = (s.subject_code.0.clone(), s.program.0.clone(), s.year_level.to_string());
        *actual_hours.entry(key.clone()).or_insert(0.0) += s.hours();
        if s.tag == SessionTag::Lecture {
            *lecture_counts.entry(key).or_insert(0) += 1;
        }
    }

    for course in courses {
        let key = (
            course.subject_code.0.clone(),
            course.program.0.clone(),
            course.year_level.to_string(),
        );
        let expected = course.lec_units as f64 + course.lab_units as f64 * LAB_HOURS_PER_UNIT;
        let actual = actual_hours.get(&key).copied().unwrap_or(0.0);

        if (expected - actual).abs() > HOURS_TOLERANCE {
            violations.push(Violation {
                constraint: "WeeklyHoursMatchUnits".to_string(),
                message: format!(
                    "'{}' expected {:.1}h/week but placed {:.1}h/week",
                    course.subject_code, expected, actual
                ),
                severity: Severity::Error,
            });
        }

        if course.lec_units >= 2 {
            let lecture_sessions = lecture_counts.get(&key).copied().unwrap_or(0);
            if lecture_sessions != 2 {
                violations.push(Violation {
                    constraint: "LectureSessionCount".to_string(),
                    message: format!(
                        "'{}' has {} lecture session(s), expected 2",
                        course.subject_code, lecture_sessions
                    ),
                    severity: Severity::Warning,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, InstructorId, ProgramCode, RoomId, Semester, SubjectCode, Weekday, YearLevel};
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

    fn session(start: u32, end: u32, day: Weekday) -> ScheduledSession {
        ScheduledSession {
            course_id: CourseId("c1".into()),
            curriculum_year: "2025-2026".into(),
            tag: SessionTag::Lecture,
            day,
            start_minutes: start,
            end_minutes: end,
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
    fn matching_hours_produce_no_violation() {
        let sessions = vec![
            session(420, 510, Weekday::Monday),
            session(420, 510, Weekday::Wednesday),
        ];
        assert!(check_weekly_hours(&[course()], &sessions).is_empty());
    }

    #[test]
    fn missing_session_flags_hours_and_count_violations() {
        let sessions = vec![session(420, 510, Weekday::Monday)];
        let violations = check_weekly_hours(&[course()], &sessions);
        assert_eq!(violations.len(), 2);
    }
}
