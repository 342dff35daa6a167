use crate::types::ScheduledSession;
use crate::validator::{Severity, Violation};

/// Pairwise-compares sessions sharing a (program, year level, semester) on
/// the same day for time overlap. Each overlap is an ERROR; placement
/// invariant 3 (§3) should make this list empty in practice, so a non-empty
/// result here indicates a placement-engine defect rather than a normal
/// scheduling outcome.
pub fn check_cohort_overlaps(sessions: &[ScheduledSession]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.cohort_key() != b.cohort_key() || a.day != b.day {
                continue;
            }
            if a.time_slot().overlaps(&b.time_slot()) {
                violations.push(Violation {
                    constraint: "NoCohortOverlap".to_string(),
                    message: format!(
                        "Cohort {:?} double-booked on {} between '{}' and '{}'",
                        a.cohort_key(),
                        a.day,
                        a.subject_code,
                        b.subject_code
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}
