use crate::types::{GenerationResult, SubjectCode};
use crate::validator::ValidationReport;
use std::collections::HashMap;

/// Generate a markdown report of a generation result
pub fn generate_markdown_report(result: &GenerationResult, validation: &ValidationReport) -> String {
    let mut lines = vec![
        "# Schedule Report".to_string(),
        String::new(),
        format!("Generated: {}", result.generated_at),
        format!("Solve time: {}ms", result.solve_time_ms),
        String::new(),
    ];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total Subjects | {} |", result.total_subjects));
    lines.push(format!("| Total Faculty | {} |", result.total_faculty));
    lines.push(format!("| Unplaceable Sessions | {} |", result.warnings.len()));
    lines.push(format!("| Optimization Score | {:.1}/100 |", result.optimization_score));
    lines.push(String::new());

    if validation.total_errors == 0 {
        lines.push("## Validation: PASSED\n".to_string());
    } else {
        lines.push("## Validation: FAILED\n".to_string());
        for v in &validation.violations {
            lines.push(format!("- **{}**: {}", v.constraint, v.message));
        }
        lines.push(String::new());
    }

    if !result.warnings.is_empty() {
        lines.push("## Unplaceable Sessions\n".to_string());
        lines.push("| Subject | Session | Reason |".to_string());
        lines.push("|---------|---------|--------|".to_string());
        for w in &result.warnings {
            lines.push(format!("| {} | {} | {} |", w.subject_code, w.session_tag, w.reason));
        }
        lines.push(String::new());
    }

    lines.push("## Placed Sessions\n".to_string());

    let mut by_subject: HashMap<&SubjectCode, Vec<&crate::types::ScheduledSession>> = HashMap::new();
    for session in &result.subjects {
        by_subject.entry(&session.subject_code).or_default().push(session);
    }

    let mut subject_codes: Vec<_> = by_subject.keys().collect();
    subject_codes.sort_by_key(|c| c.0.clone());

    for code in subject_codes {
        let sessions = &by_subject[code];
        let subject_name = &sessions[0].subject_name;

        lines.push(format!("### {} — {}\n", code, subject_name));
        lines.push("| Tag | Day | Time | Room | Instructor |".to_string());
        lines.push("|-----|-----|------|------|------------|".to_string());

        for s in sessions.iter() {
            lines.push(format!(
                "| {} | {} | {}–{} | {} | {} |",
                s.tag,
                s.day,
                crate::types::format_hhmm(s.start_minutes),
                crate::types::format_hhmm(s.end_minutes),
                s.room_name,
                s.instructor_name
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
