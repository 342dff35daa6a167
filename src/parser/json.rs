use crate::error::{Result, SchedulerError};
use crate::types::{Course, Instructor, Room, SchedulerConfig, ScheduleInput};
use std::fs;
use std::path::Path;

/// Load all input data (courses, instructors, rooms, config) from a
/// directory, for CLI/demo use. Mirrors the shape `InMemoryStore` holds,
/// except data is read fresh from disk each call.
pub fn load_input_from_dir(dir: &Path) -> Result<ScheduleInput> {
    let courses = load_courses(&dir.join("courses.json"))?;
    let instructors = load_instructors(&dir.join("instructors.json"))?;
    let rooms = load_rooms(&dir.join("rooms.json"))?;
    let config = load_config_or_default(&dir.join("config.toml"));

    Ok(ScheduleInput {
        courses,
        instructors,
        rooms,
        config,
    })
}

/// Load courses from JSON file
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    load_json_file(path)
}

/// Load instructors from JSON file
pub fn load_instructors(path: &Path) -> Result<Vec<Instructor>> {
    load_json_file(path)
}

/// Load rooms from JSON file
pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    load_json_file(path)
}

/// Load config from TOML file, or use defaults
pub fn load_config_or_default(path: &Path) -> SchedulerConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => SchedulerConfig::default(),
        }
    } else {
        SchedulerConfig::default()
    }
}

/// Generic JSON file loader
fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SchedulerError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}
