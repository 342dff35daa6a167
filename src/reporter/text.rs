use crate::types::{GenerationResult, SubjectCode};
use crate::validator::ValidationReport;
use colored::Colorize;
use std::collections::HashMap;

/// Generate a plain text report (with colors for terminal)
pub fn generate_text_report(result: &GenerationResult, validation: &ValidationReport) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push("               SCHEDULE REPORT".to_string());
    lines.push("═".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", result.generated_at));
    lines.push(format!("Solve Time: {}ms", result.solve_time_ms));
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Subjects:      {}", result.total_subjects));
    lines.push(format!("  Faculty:       {}", result.total_faculty));
    lines.push(format!("  Unplaceable:   {}", result.warnings.len()));
    lines.push(format!("  Score:         {:.1}/100", result.optimization_score));
    lines.push(String::new());

    lines.push("─".repeat(40));
    if validation.total_errors == 0 {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for v in &validation.violations {
            lines.push(format!("  ! {}: {}", v.constraint, v.message));
        }
    }
    lines.push("─".repeat(40));
    lines.push(String::new());

    let mut by_subject: HashMap<&SubjectCode, Vec<&crate::types::ScheduledSession>> = HashMap::new();
    for session in &result.subjects {
        by_subject.entry(&session.subject_code).or_default().push(session);
    }

    lines.push("PLACED SESSIONS".to_string());
    lines.push("─".repeat(40));

    for (code, sessions) in &by_subject {
        let name = &sessions[0].subject_name;
        lines.push(format!("\n{} ({} sessions)", name.bold(), sessions.len()));

        for s in sessions.iter() {
            lines.push(format!(
                "  {} | {} {}–{} | {} | {}",
                code,
                s.day,
                crate::types::format_hhmm(s.start_minutes),
                crate::types::format_hhmm(s.end_minutes),
                s.room_name,
                s.instructor_name
            ));
        }
    }

    lines.push(String::new());
    lines.push("═".repeat(60));

    lines.join("\n")
}

/// Print a quick summary to stdout
pub fn print_summary(result: &GenerationResult, validation: &ValidationReport) {
    println!();
    if validation.total_errors == 0 {
        println!("{}", "✓ Schedule generated successfully".green().bold());
    } else {
        println!("{}", "✗ Schedule has validation errors".red().bold());
    }
    println!();
    println!("  Subjects:    {}", result.total_subjects);
    println!("  Faculty:     {}", result.total_faculty);
    println!("  Unplaceable: {}", result.warnings.len());
    println!("  Score:       {:.1}/100", result.optimization_score);
    println!("  Time:        {}ms", result.solve_time_ms);
    println!();
}
