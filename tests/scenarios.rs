//! End-to-end coverage of the scenarios catalogued alongside the testable
//! invariants: each test drives `generate_schedule`/`ScheduleStore` the way
//! a caller would, rather than poking at one module in isolation.

use curriculum_scheduler::scheduler::generate_schedule;
use curriculum_scheduler::store::{InMemoryStore, ScheduleStore};
use curriculum_scheduler::types::{
    Course, CourseId, Instructor, InstructorId, ProgramCode, Role, Room, RoomId, ScheduleInput,
    ScheduledSession, SchedulerConfig, SessionTag, Semester, Status, SubjectCode, Weekday,
    YearLevel,
};
use curriculum_scheduler::validator::check_cohort_overlaps;
use std::collections::HashSet;

fn course(code: &str, lec_units: u32, lab_units: u32, program: &str, department: Option<&str>, tags: &[&str]) -> Course {
    Course {
        id: CourseId(format!("c-{code}")),
        curriculum_year: "2025-2026".into(),
        program: ProgramCode(program.into()),
        year_level: YearLevel::First,
        semester: Semester::First,
        subject_code: SubjectCode(code.into()),
        subject_name: code.into(),
        lec_units,
        lab_units,
        department: department.map(String::from),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn instructor(id: &str, specializations: &[&str], available_days: &[Weekday]) -> Instructor {
    Instructor {
        id: InstructorId(id.into()),
        first_name: "F".into(),
        last_name: id.into(),
        role: Role::Faculty,
        designation: "Regular Full-time".into(),
        department: "BSCS".into(),
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        previous_subjects: HashSet::new(),
        years_of_experience: 10,
        preferred_window: None,
        available_days: available_days.iter().copied().collect(),
        status: Status::Approved,
    }
}

fn room(id: &str, name: &str) -> Room {
    Room {
        id: RoomId(id.into()),
        name: name.into(),
    }
}

#[test]
fn s1_trivial_lecture_course_lands_on_mon_wed_morning() {
    let input = ScheduleInput {
        courses: vec![course("CS101", 3, 0, "BSCS", Some("BSCS"), &["Programming"])],
        instructors: vec![instructor("F1", &["Programming"], &[])],
        rooms: vec![room("R1", "Room 1")],
        config: SchedulerConfig::default(),
    };

    let result = generate_schedule(&input, true).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.subjects.len(), 2);
    assert_eq!(result.optimization_score, 100.0);

    let days: HashSet<Weekday> = result.subjects.iter().map(|s| s.day).collect();
    assert_eq!(days, HashSet::from([Weekday::Monday, Weekday::Wednesday]));
    for s in &result.subjects {
        assert_eq!(s.start_minutes, 7 * 60);
        assert_eq!(s.end_minutes, 8 * 60 + 30);
        assert_eq!(s.room_id.0, "R1");
        assert_eq!(s.instructor_id.0, "F1");
        assert_eq!(s.tag, SessionTag::Lecture);
    }
}

#[test]
fn s2_lab_only_course_uses_lab_room_on_tue_thu() {
    let input = ScheduleInput {
        courses: vec![
            course("CS101", 3, 0, "BSCS", Some("BSCS"), &["Programming"]),
            course("CS102L", 0, 1, "BSCS", Some("BSCS"), &["Programming"]),
        ],
        instructors: vec![instructor("F1", &["Programming"], &[])],
        rooms: vec![room("R1", "Room 1"), room("LAB1", "Computer Lab 1")],
        config: SchedulerConfig::default(),
    };

    let result = generate_schedule(&input, true).unwrap();
    assert!(result.warnings.is_empty());

    let lab_sessions: Vec<&ScheduledSession> = result
        .subjects
        .iter()
        .filter(|s| s.tag == SessionTag::Laboratory)
        .collect();
    assert_eq!(lab_sessions.len(), 2);

    let lab_days: HashSet<Weekday> = lab_sessions.iter().map(|s| s.day).collect();
    assert_eq!(lab_days, HashSet::from([Weekday::Tuesday, Weekday::Thursday]));
    for s in &lab_sessions {
        assert_eq!(s.room_id.0, "LAB1");
        assert_eq!(s.end_minutes - s.start_minutes, 90);
    }

    assert!(
        result
            .subjects
            .iter()
            .filter(|s| s.tag == SessionTag::Laboratory)
            .all(|s| s.room_id.0 != "R1"),
        "lecture room must never host a lab session"
    );
}

#[test]
fn s3_restricted_availability_shifts_placement_to_tue_thu() {
    let input = ScheduleInput {
        courses: vec![course("CS101", 3, 0, "BSCS", Some("BSCS"), &["Programming"])],
        instructors: vec![instructor("F1", &["Programming"], &[Weekday::Tuesday, Weekday::Thursday])],
        rooms: vec![room("R1", "Room 1")],
        config: SchedulerConfig::default(),
    };

    let result = generate_schedule(&input, true).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.subjects.len(), 2);

    let days: HashSet<Weekday> = result.subjects.iter().map(|s| s.day).collect();
    assert_eq!(days, HashSet::from([Weekday::Tuesday, Weekday::Thursday]));
}

#[test]
fn s4_cap_disqualification_leaves_second_course_unplaced() {
    let mut config = SchedulerConfig::default();
    config.global_max_units = 3;

    let input = ScheduleInput {
        courses: vec![
            course("CS101", 3, 0, "BSCS", Some("BSCS"), &["Programming"]),
            course("CS102", 3, 0, "BSCS", Some("BSCS"), &["Programming"]),
        ],
        instructors: vec![instructor("F1", &["Programming"], &[])],
        rooms: vec![room("R1", "Room 1")],
        config,
    };

    let result = generate_schedule(&input, true).unwrap();

    let placed_courses: HashSet<&str> = result.subjects.iter().map(|s| s.subject_code.0.as_str()).collect();
    assert_eq!(placed_courses, HashSet::from(["CS101"]));

    assert_eq!(result.warnings.len(), 1, "the course's lecture rule commits all-or-nothing");
    assert_eq!(result.warnings[0].course_id.0, "c-CS102");
}

#[test]
fn s5_cohort_conflict_resolves_without_overlap() {
    let input = ScheduleInput {
        courses: vec![
            course("CS101", 3, 0, "BSCS", Some("BSCS"), &["Programming"]),
            course("CS102", 3, 0, "BSCS", Some("BSCS"), &["Math"]),
        ],
        instructors: vec![
            instructor("F1", &["Programming"], &[]),
            instructor("F2", &["Math"], &[]),
        ],
        rooms: vec![room("R1", "Room 1"), room("R2", "Room 2")],
        config: SchedulerConfig::default(),
    };

    let result = generate_schedule(&input, true).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.subjects.len(), 4);
    assert!(
        check_cohort_overlaps(&result.subjects).is_empty(),
        "the engine must push the second course off the first course's slot"
    );

    let cs101_start = result
        .subjects
        .iter()
        .find(|s| s.subject_code.0 == "CS101")
        .unwrap()
        .start_minutes;
    let cs102_start = result
        .subjects
        .iter()
        .find(|s| s.subject_code.0 == "CS102")
        .unwrap()
        .start_minutes;
    assert_ne!(cs101_start, cs102_start, "the loser must not land on the same slot");
}

fn session(subject: &str, curriculum_year: &str, semester: Semester) -> ScheduledSession {
    ScheduledSession {
        course_id: CourseId(format!("c-{subject}")),
        curriculum_year: curriculum_year.into(),
        tag: SessionTag::Lecture,
        day: Weekday::Monday,
        start_minutes: 7 * 60,
        end_minutes: 8 * 60 + 30,
        instructor_id: InstructorId("f1".into()),
        instructor_name: "Ada Lovelace".into(),
        room_id: RoomId("r1".into()),
        room_name: "Room 1".into(),
        subject_code: SubjectCode(subject.into()),
        subject_name: subject.into(),
        program: ProgramCode("BSCS".into()),
        year_level: YearLevel::First,
        semester,
        units: 3,
        lec: 3,
        lab: 0,
    }
}

#[test]
fn s6_save_replaces_prior_set_for_same_year_and_semester() {
    let store = InMemoryStore::new(Vec::new(), Vec::new(), Vec::new());

    let sessions_a = vec![session("CS101", "2025-2026", Semester::First), session("CS102", "2025-2026", Semester::First)];
    let result_a = store.save(&sessions_a).unwrap();
    assert_eq!(result_a.deleted, 0);
    assert_eq!(result_a.inserted, 2);

    let sessions_b = vec![session("CS201", "2025-2026", Semester::First)];
    let result_b = store.save(&sessions_b).unwrap();
    assert_eq!(result_b.deleted, 2);
    assert_eq!(result_b.inserted, 1);

    let rows = store.list(None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].subject_code.0, "CS201");
}
