mod availability;
mod placement;
mod rules;
mod scorer;

pub use availability::Tracker;
pub use placement::place_course;
pub use rules::build_session_rules;
pub use scorer::{rank_candidates, FacultyCandidate};

use crate::error::{Result, SchedulerError};
use crate::store::ScheduleStore;
use crate::types::{GenerationResult, GenerationWarning, ScheduleInput, SchedulerConfig, Semester, ScheduledSession};
use crate::validator::validate;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::warn;

/// Runs one full generation pass: session-rule expansion, faculty ranking,
/// greedy placement, and the post-placement validation scoring.
pub fn generate_schedule(input: &ScheduleInput, quiet: bool) -> Result<GenerationResult> {
    let start_time = Instant::now();

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(input.courses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    let mut tracker = Tracker::new();
    let mut sessions: Vec<ScheduledSession> = Vec::new();
    let mut warnings: Vec<GenerationWarning> = Vec::new();

    progress.set_message("Placing sessions...");
    for course in &input.courses {
        let rules = build_session_rules(course.lec_units, course.lab_units, course.department.as_deref());
        let (placed, course_warnings) = place_course(
            course,
            &rules,
            &input.instructors,
            &input.rooms,
            &mut tracker,
            &input.config,
        );

        for w in &course_warnings {
            warn!(course_id = %w.course_id, subject = %w.subject_code, tag = %w.session_tag, "{}", w.reason);
        }

        sessions.extend(placed);
        warnings.extend(course_warnings);
        progress.inc(1);
    }

    progress.set_message("Validating placements...");
    let report = validate(&input.courses, &sessions);

    progress.finish_with_message("Schedule generated");

    let elapsed = start_time.elapsed();
    let mut result = GenerationResult::new(sessions, warnings, elapsed.as_millis() as u64);
    result.optimization_score = report.optimization_score;

    Ok(result)
}

/// The `generate(curriculum_year, semester, program?)` external operation:
/// loads courses through the store, filters them down to the requested
/// `(curriculum_year, semester, program)` key, and runs `generate_schedule`
/// over just that subset. Rejects a missing required parameter or a filter
/// that matches no course before any placement work begins.
pub fn generate(
    store: &dyn ScheduleStore,
    curriculum_year: &str,
    semester: &str,
    program: Option<&str>,
    config: &SchedulerConfig,
    quiet: bool,
) -> Result<GenerationResult> {
    if curriculum_year.trim().is_empty() {
        return Err(SchedulerError::MissingParameter {
            field: "curriculum_year".to_string(),
        }
        .into());
    }
    if semester.trim().is_empty() {
        return Err(SchedulerError::MissingParameter {
            field: "semester".to_string(),
        }
        .into());
    }

    let semester_key =
        Semester::try_from(semester.to_string()).map_err(|e| anyhow::anyhow!(e))?;
    let program_filter = program.filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("all"));

    let courses: Vec<_> = store
        .load_courses()?
        .into_iter()
        .filter(|c| c.curriculum_year == curriculum_year && c.semester == semester_key)
        .filter(|c| program_filter.map_or(true, |p| p.eq_ignore_ascii_case(&c.program.0)))
        .collect();

    if courses.is_empty() {
        return Err(SchedulerError::EmptyDataset {
            curriculum_year: curriculum_year.to_string(),
            semester: semester.to_string(),
            program: program.unwrap_or("all").to_string(),
        }
        .into());
    }

    let input = ScheduleInput {
        courses,
        instructors: store.load_instructors()?,
        rooms: store.load_rooms()?,
        config: config.clone(),
    };

    generate_schedule(&input, quiet)
}
