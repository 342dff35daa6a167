mod conflicts;
mod hours;

pub use conflicts::*;
pub use hours::*;

use crate::types::{Course, ScheduledSession};

/// A constraint violation found during the validation pass.
#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Result of the post-placement validation pass.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub optimization_score: f64,
}

/// Runs the hours-mismatch and cohort-overlap checks and derives the final
/// optimization score: `max(0, 100 - 5 * total_errors)`.
pub fn validate(courses: &[Course], sessions: &[ScheduledSession]) -> ValidationReport {
    let mut violations = check_weekly_hours(courses, sessions);
    violations.extend(check_cohort_overlaps(sessions));

    let total_errors = violations.iter().filter(|v| v.severity == Severity::Error).count();
    let total_warnings = violations.iter().filter(|v| v.severity == Severity::Warning).count();
    let optimization_score = (100.0 - 5.0 * total_errors as f64).max(0.0);

    ValidationReport {
        violations,
        total_errors,
        total_warnings,
        optimization_score,
    }
}
