use crate::error::Result;
use crate::types::{Course, CourseId, Instructor, InstructorId, Room, RoomId, ScheduleInput};
use std::collections::HashSet;

/// Validation result with collected errors
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validate all input data before a generation run.
pub fn validate_input(input: &ScheduleInput) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    check_duplicate_course_ids(&input.courses, &mut result);
    check_duplicate_instructor_ids(&input.instructors, &mut result);
    check_duplicate_room_ids(&input.rooms, &mut result);

    let approved_instructors = input.instructors.iter().any(|i| i.is_schedulable());
    if !input.instructors.is_empty() && !approved_instructors {
        result.add_warning("No APPROVED instructors are present; no course can be scheduled".to_string());
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn check_duplicate_course_ids(courses: &[Course], result: &mut ValidationResult) {
    let mut seen: HashSet<&CourseId> = HashSet::new();
    for course in courses {
        if !seen.insert(&course.id) {
            result.add_error(format!("Duplicate course ID: '{}'", course.id));
        }
    }
}

fn check_duplicate_instructor_ids(instructors: &[Instructor], result: &mut ValidationResult) {
    let mut seen: HashSet<&InstructorId> = HashSet::new();
    for instructor in instructors {
        if !seen.insert(&instructor.id) {
            result.add_error(format!("Duplicate instructor ID: '{}'", instructor.id));
        }
    }
}

fn check_duplicate_room_ids(rooms: &[Room], result: &mut ValidationResult) {
    let mut seen: HashSet<&RoomId> = HashSet::new();
    for room in rooms {
        if !seen.insert(&room.id) {
            result.add_error(format!("Duplicate room ID: '{}'", room.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProgramCode, SchedulerConfig, Semester, SubjectCode, YearLevel};
    use std::collections::HashSet as Set;

    fn course(id: &str) -> Course {
        Course {
            id: CourseId(id.into()),
            curriculum_year: "2025-2026".into(),
            program: ProgramCode("BSCS".into()),
            year_level: YearLevel::First,
            semester: Semester::First,
            subject_code: SubjectCode("CS101".into()),
            subject_name: "Intro to Programming".into(),
            lec_units: 3,
            lab_units: 0,
            department: Some("BSCS".into()),
            tags: Set::new(),
        }
    }

    #[test]
    fn flags_duplicate_course_ids() {
        let input = ScheduleInput {
            courses: vec![course("c1"), course("c1")],
            instructors: vec![],
            rooms: vec![],
            config: SchedulerConfig::default(),
        };
        assert!(validate_input(&input).is_err());
    }
}
