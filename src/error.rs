use thiserror::Error;

/// Domain-specific errors for the scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    // Input/parse errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse config '{file}': {message}")]
    ConfigParse { file: String, message: String },

    // Category 1: required query parameter absent.
    #[error("Missing required parameter: {field}")]
    MissingParameter { field: String },

    // Category 2: no courses found for the requested (curriculum_year, semester, program).
    #[error(
        "No courses found for curriculum_year='{curriculum_year}', semester='{semester}', program='{program}'"
    )]
    EmptyDataset {
        curriculum_year: String,
        semester: String,
        program: String,
    },

    // Data validation errors surfaced while loading input.
    #[error("Duplicate ID found: {id_type} '{id}'")]
    DuplicateId { id_type: String, id: String },

    #[error("Course '{course_id}' references unknown room '{room_id}'")]
    UnknownRoom { course_id: String, room_id: String },

    // Category 5: persistence fault, no partial write.
    #[error("Persistence operation failed: {0}")]
    StoreFailure(String),
}

/// Use anyhow::Result at application boundaries, matching the caller-visible
/// rejection semantics of error categories 1 and 2.
pub type Result<T> = anyhow::Result<T>;
