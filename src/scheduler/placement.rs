use crate::scheduler::availability::{CohortKey, SubjectKey, Tracker};
use crate::scheduler::scorer::{rank_candidates, FacultyCandidate};
use crate::types::{
    laboratory_day_pairs, lecture_day_pairs, ninety_minute_slots, one_hour_slots, Course,
    GenerationWarning, Instructor, Room, ScheduledSession, SchedulerConfig, SessionRule,
    SessionTag, Weekday,
};
use std::collections::HashMap;

/// Days searched for a single-session rule, in order.
const SINGLE_SESSION_DAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Attempts to place every session a course's `SessionRule`s demand. Commits
/// either all sessions of a rule or none of them, in course input order with
/// rules already sorted lecture-before-lab by the caller.
pub fn place_course(
    course: &Course,
    rules: &[SessionRule],
    instructors: &[Instructor],
    rooms: &[Room],
    tracker: &mut Tracker,
    config: &SchedulerConfig,
) -> (Vec<ScheduledSession>, Vec<GenerationWarning>) {
    let mut placed = Vec::new();
    let mut warnings = Vec::new();
    let mut workload_counted = false;

    // Ranked once per course, before any of its rules commit, so that
    // placing the lecture never disqualifies the same instructor from the
    // lab by pushing the live tracker workload to the course's own cap.
    let candidates = rank_candidates(course, instructors, &workload_snapshot(tracker, instructors), config);

    for rule in rules {
        match place_rule(course, rule, &candidates, rooms, tracker, config, &mut workload_counted) {
            Some(mut sessions) => placed.append(&mut sessions),
            None => warnings.push(GenerationWarning {
                course_id: course.id.clone(),
                subject_code: course.subject_code.clone(),
                session_tag: rule.tag,
                reason: format!(
                    "no (faculty, day, slot, room) combination satisfies all constraints for {} {}",
                    course.subject_code, rule.tag
                ),
            }),
        }
    }

    (placed, warnings)
}

fn place_rule(
    course: &Course,
    rule: &SessionRule,
    candidates: &[FacultyCandidate],
    rooms: &[Room],
    tracker: &mut Tracker,
    config: &SchedulerConfig,
    workload_counted: &mut bool,
) -> Option<Vec<ScheduledSession>> {
    match rule.sessions_per_week {
        2 => place_pair(course, rule, candidates, rooms, tracker, config, workload_counted),
        1 => place_single(course, rule, candidates, rooms, tracker, config, workload_counted)
            .map(|s| vec![s]),
        n => {
            let mut sessions = Vec::with_capacity(n as usize);
            for _ in 0..n {
                let session = place_single(course, rule, candidates, rooms, tracker, config, workload_counted)?;
                sessions.push(session);
            }
            Some(sessions)
        }
    }
}

fn candidate_rooms<'a>(rule: &SessionRule, rooms: &'a [Room]) -> Vec<&'a Room> {
    let matching: Vec<&Room> = rooms
        .iter()
        .filter(|r| match rule.tag {
            SessionTag::Laboratory => r.is_lab(),
            SessionTag::Lecture => !r.is_lab(),
        })
        .collect();
    if matching.is_empty() {
        rooms.iter().collect()
    } else {
        matching
    }
}

fn slot_table(rule: &SessionRule, config: &SchedulerConfig) -> Vec<crate::types::TimeSlot> {
    if rule.hours_per_session >= 1.5 {
        ninety_minute_slots(config)
    } else {
        one_hour_slots(config)
    }
}

fn day_pairs(rule: &SessionRule) -> Vec<(Weekday, Weekday)> {
    match rule.tag {
        SessionTag::Laboratory => laboratory_day_pairs(),
        SessionTag::Lecture => lecture_day_pairs(),
    }
}

fn place_pair(
    course: &Course,
    rule: &SessionRule,
    candidates: &[FacultyCandidate],
    rooms: &[Room],
    tracker: &mut Tracker,
    config: &SchedulerConfig,
    workload_counted: &mut bool,
) -> Option<Vec<ScheduledSession>> {
    let cohort: CohortKey = course.cohort_key();
    let subject: SubjectKey = (course.subject_code.clone(), course.semester);
    let slots = slot_table(rule, config);
    let pairs: Vec<(Weekday, Weekday)> = day_pairs(rule)
        .into_iter()
        .filter(|(d1, d2)| tracker.subject_days_free(&subject, &[*d1, *d2]))
        .collect();
    let room_pool = candidate_rooms(rule, rooms);

    for candidate in candidates {
        if !candidate.has_room(course.total_units()) && !*workload_counted {
            continue;
        }

        for (d1, d2) in &pairs {
            let days = [*d1, *d2];
            if !days.iter().all(|d| candidate.instructor.available_on(*d)) {
                continue;
            }

            for slot in &slots {
                if !slot.is_valid(config) {
                    continue;
                }
                if !tracker.cohort_free(&cohort, &days, *slot) {
                    continue;
                }
                if !tracker.faculty_free(candidate.instructor, &days, *slot, course.semester, config) {
                    continue;
                }

                for room in &room_pool {
                    if tracker.room_free(&room.id, &days, *slot, course.semester) {
                        tracker.commit(
                            &candidate.instructor.id,
                            &room.id,
                            &cohort,
                            &subject,
                            &days,
                            *slot,
                            course.semester,
                            course.total_units(),
                            !*workload_counted,
                        );
                        *workload_counted = true;

                        return Some(
                            days.iter()
                                .map(|day| build_session(course, rule, *day, *slot, candidate.instructor, room))
                                .collect(),
                        );
                    }
                }
            }
        }
    }

    None
}

fn place_single(
    course: &Course,
    rule: &SessionRule,
    candidates: &[FacultyCandidate],
    rooms: &[Room],
    tracker: &mut Tracker,
    config: &SchedulerConfig,
    workload_counted: &mut bool,
) -> Option<ScheduledSession> {
    let cohort: CohortKey = course.cohort_key();
    let subject: SubjectKey = (course.subject_code.clone(), course.semester);
    let slots = slot_table(rule, config);
    let room_pool = candidate_rooms(rule, rooms);

    for candidate in candidates {
        if !candidate.has_room(course.total_units()) && !*workload_counted {
            continue;
        }

        for day in SINGLE_SESSION_DAYS {
            if !tracker.subject_days_free(&subject, &[day]) {
                continue;
            }
            if !candidate.instructor.available_on(day) {
                continue;
            }

            for slot in &slots {
                if !slot.is_valid(config) {
                    continue;
                }
                if !tracker.cohort_free(&cohort, &[day], *slot) {
                    continue;
                }
                if !tracker.faculty_free(candidate.instructor, &[day], *slot, course.semester, config) {
                    continue;
                }

                for room in &room_pool {
                    if tracker.room_free(&room.id, &[day], *slot, course.semester) {
                        tracker.commit(
                            &candidate.instructor.id,
                            &room.id,
                            &cohort,
                            &subject,
                            &[day],
                            *slot,
                            course.semester,
                            course.total_units(),
                            !*workload_counted,
                        );
                        *workload_counted = true;

                        return Some(build_session(course, rule, day, *slot, candidate.instructor, room));
                    }
                }
            }
        }
    }

    None
}

fn build_session(
    course: &Course,
    rule: &SessionRule,
    day: Weekday,
    slot: crate::types::TimeSlot,
    instructor: &Instructor,
    room: &Room,
) -> ScheduledSession {
    ScheduledSession {
        course_id: course.id.clone(),
        curriculum_year: course.curriculum_year.clone(),
        tag: rule.tag,
        day,
        start_minutes: slot.start,
        end_minutes: slot.end,
        instructor_id: instructor.id.clone(),
        instructor_name: instructor.full_name(),
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        subject_code: course.subject_code.clone(),
        subject_name: course.subject_name.clone(),
        program: course.program.clone(),
        year_level: course.year_level,
        semester: course.semester,
        units: course.total_units(),
        lec: course.lec_units,
        lab: course.lab_units,
    }
}

fn workload_snapshot(
    tracker: &Tracker,
    instructors: &[Instructor],
) -> HashMap<crate::types::InstructorId, u32> {
    instructors
        .iter()
        .map(|i| (i.id.clone(), tracker.workload_of(&i.id)))
        .collect()
}
