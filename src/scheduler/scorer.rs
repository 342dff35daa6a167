use crate::types::{Course, Instructor};

const DISQUALIFIED_SCORE: f64 = -1000.0;
const PREVIOUS_SUBJECT_BONUS: f64 = 50.0;
const REGULAR_DESIGNATION_BONUS: f64 = 10.0;
const EXPERIENCE_CAP_YEARS: f64 = 20.0;
const CANDIDATE_LIMIT: usize = 5;

/// A faculty candidate ranked against one course, carrying the numbers the
/// ranking and cap checks were derived from.
#[derive(Debug, Clone)]
pub struct FacultyCandidate<'a> {
    pub instructor: &'a Instructor,
    pub score: f64,
    pub tag_match_percentage: f64,
    pub current_workload: u32,
    pub cap: u32,
}

impl<'a> FacultyCandidate<'a> {
    pub fn has_room(&self, additional_units: u32) -> bool {
        self.current_workload + additional_units <= self.cap
    }
}

fn tag_match_percentage(course: &Course, instructor: &Instructor) -> f64 {
    if course.tags.is_empty() {
        return 0.0;
    }
    let course_tags_lower: std::collections::HashSet<String> =
        course.tags.iter().map(|t| t.to_lowercase()).collect();
    let spec_lower: std::collections::HashSet<String> = instructor
        .specializations
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let overlap = course_tags_lower.intersection(&spec_lower).count();
    100.0 * overlap as f64 / course.tags.len() as f64
}

fn matches_previous_subject(course: &Course, instructor: &Instructor) -> bool {
    let code = course.subject_code.0.to_lowercase();
    let name = course.subject_name.to_lowercase();
    instructor.previous_subjects.iter().any(|s| {
        let s = s.to_lowercase();
        s == code || s == name
    })
}

/// Scores and ranks candidate instructors for a course per the faculty
/// scorer: tag overlap, previous-subject familiarity, experience, and
/// regular-staff preference, with disqualification once an instructor's
/// workload would reach their cap.
pub fn rank_candidates<'a>(
    course: &Course,
    instructors: &'a [Instructor],
    workload: &std::collections::HashMap<crate::types::InstructorId, u32>,
    config: &crate::types::SchedulerConfig,
) -> Vec<FacultyCandidate<'a>> {
    let mut candidates: Vec<FacultyCandidate<'a>> = instructors
        .iter()
        .filter(|i| i.is_schedulable())
        .map(|instructor| {
            let tag_match = tag_match_percentage(course, instructor);
            let current_workload = workload.get(&instructor.id).copied().unwrap_or(0);
            let cap = instructor.cap(config);

            let mut score = tag_match;
            if matches_previous_subject(course, instructor) {
                score += PREVIOUS_SUBJECT_BONUS;
            }
            score += (instructor.years_of_experience as f64).min(EXPERIENCE_CAP_YEARS);
            if instructor.is_regular() {
                score += REGULAR_DESIGNATION_BONUS;
            }
            if current_workload >= cap {
                score = DISQUALIFIED_SCORE;
            }

            FacultyCandidate {
                instructor,
                score,
                tag_match_percentage: tag_match,
                current_workload,
                cap,
            }
        })
        .filter(|c| c.score > 0.0 && c.tag_match_percentage > 0.0)
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap()
            .then_with(|| b.tag_match_percentage.partial_cmp(&a.tag_match_percentage).unwrap())
            .then_with(|| b.instructor.years_of_experience.cmp(&a.instructor.years_of_experience))
            .then_with(|| a.instructor.last_name.cmp(&b.instructor.last_name))
    });

    candidates.truncate(CANDIDATE_LIMIT);
    candidates
}
