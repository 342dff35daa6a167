mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::types::{GenerationResult, InstructorId, ScheduleInput};
use crate::validator::ValidationReport;
use std::fs;
use std::path::Path;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generate all reports and write to output directory
pub fn generate_reports(
    result: &GenerationResult,
    validation: &ValidationReport,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(result)?;
                fs::write(output_dir.join("schedule.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(result, validation);
                fs::write(output_dir.join("schedule.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(result, validation);
                fs::write(output_dir.join("schedule.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Generate one instructor's weekly schedule as a markdown fragment.
pub fn generate_instructor_schedule(
    result: &GenerationResult,
    input: &ScheduleInput,
    instructor_id: &InstructorId,
) -> Option<String> {
    let instructor = input.instructors.iter().find(|i| &i.id == instructor_id)?;

    let mut lines = vec![
        format!("# Schedule for {} ({})", instructor.full_name(), instructor.id),
        String::new(),
    ];

    let sessions: Vec<_> = result
        .subjects
        .iter()
        .filter(|s| &s.instructor_id == instructor_id)
        .collect();

    if sessions.is_empty() {
        lines.push("No sessions assigned.".to_string());
    } else {
        lines.push(format!("## Teaching {} session(s)\n", sessions.len()));
        for session in sessions {
            lines.push(format!(
                "- **{}** ({}): {} {}–{} - Room {}",
                session.subject_name,
                session.subject_code,
                session.day,
                crate::types::format_hhmm(session.start_minutes),
                crate::types::format_hhmm(session.end_minutes),
                session.room_name
            ));
        }
    }

    Some(lines.join("\n"))
}
