use super::TimeSlot;
use serde::{Deserialize, Serialize};

/// Tunable limits that govern every invariant in the placement engine: the
/// working-hours window, the lunch block, the minimum rest gap between an
/// instructor's back-to-back sessions, and the per-role unit caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_working_start")]
    pub working_start_minutes: u32,
    #[serde(default = "default_working_end")]
    pub working_end_minutes: u32,
    #[serde(default = "default_lunch_start")]
    pub lunch_start_minutes: u32,
    #[serde(default = "default_lunch_end")]
    pub lunch_end_minutes: u32,
    #[serde(default = "default_min_rest")]
    pub min_rest_minutes: u32,
    #[serde(default = "default_global_max_units")]
    pub global_max_units: u32,
    #[serde(default = "default_campus_admin_max_units")]
    pub campus_admin_max_units: u32,
}

fn default_working_start() -> u32 {
    7 * 60
}
fn default_working_end() -> u32 {
    20 * 60
}
fn default_lunch_start() -> u32 {
    12 * 60
}
fn default_lunch_end() -> u32 {
    13 * 60
}
fn default_min_rest() -> u32 {
    30
}
fn default_global_max_units() -> u32 {
    18
}
fn default_campus_admin_max_units() -> u32 {
    6
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            working_start_minutes: default_working_start(),
            working_end_minutes: default_working_end(),
            lunch_start_minutes: default_lunch_start(),
            lunch_end_minutes: default_lunch_end(),
            min_rest_minutes: default_min_rest(),
            global_max_units: default_global_max_units(),
            campus_admin_max_units: default_campus_admin_max_units(),
        }
    }
}

impl SchedulerConfig {
    pub fn lunch_slot(&self) -> TimeSlot {
        TimeSlot::new(self.lunch_start_minutes, self.lunch_end_minutes)
    }

    /// The unit cap for an instructor carrying the given role.
    pub fn cap_for(&self, role: super::Role) -> u32 {
        match role {
            super::Role::CampusAdmin => self.campus_admin_max_units,
            _ => self.global_max_units,
        }
    }
}

/// All input data bundled together for one generation run.
#[derive(Debug)]
pub struct ScheduleInput {
    pub courses: Vec<super::Course>,
    pub instructors: Vec<super::Instructor>,
    pub rooms: Vec<super::Room>,
    pub config: SchedulerConfig,
}
