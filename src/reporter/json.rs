use crate::error::Result;
use crate::types::GenerationResult;

/// Generate JSON report of the schedule
pub fn generate_json_report(result: &GenerationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Summary statistics as JSON
#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub total_subjects: usize,
    pub total_faculty: usize,
    pub warning_count: usize,
    pub solve_time_ms: u64,
    pub score: f64,
}

pub fn generate_json_summary(result: &GenerationResult) -> Result<String> {
    let summary = JsonSummary {
        total_subjects: result.total_subjects,
        total_faculty: result.total_faculty,
        warning_count: result.warnings.len(),
        solve_time_ms: result.solve_time_ms,
        score: result.optimization_score,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
