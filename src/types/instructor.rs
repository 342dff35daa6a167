use super::{parse_hhmm, InstructorId, TimeSlot, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Instructor role, fixed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Faculty,
    DepartmentHead,
    Registrar,
    CampusAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Faculty => "FACULTY",
            Role::DepartmentHead => "DEPARTMENT_HEAD",
            Role::Registrar => "REGISTRAR",
            Role::CampusAdmin => "CAMPUS_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "FACULTY" => Ok(Role::Faculty),
            "DEPARTMENT_HEAD" => Ok(Role::DepartmentHead),
            "REGISTRAR" => Ok(Role::Registrar),
            "CAMPUS_ADMIN" => Ok(Role::CampusAdmin),
            other => Err(format!("unrecognized role '{other}'")),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

/// Account status; only `Approved` instructors are schedulable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    Pending,
    Verified,
    Approved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Verified => "VERIFIED",
            Status::Approved => "APPROVED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Status {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "PENDING" => Ok(Status::Pending),
            "VERIFIED" => Ok(Status::Verified),
            "APPROVED" => Ok(Status::Approved),
            other => Err(format!("unrecognized status '{other}'")),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_str().to_string()
    }
}

/// Represents an instructor with their qualifications, specializations and
/// scheduling constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub designation: String,
    pub department: String,
    #[serde(default)]
    pub specializations: HashSet<String>,
    #[serde(default)]
    pub previous_subjects: HashSet<String>,
    #[serde(default)]
    pub years_of_experience: u8,
    /// Parsed from either `["start:HH:MM", "end:HH:MM"]` or a string like
    /// `"8:00 AM - 5:00 PM"`. Absent means fully available.
    #[serde(default, deserialize_with = "deserialize_preferred_window")]
    pub preferred_window: Option<TimeSlot>,
    #[serde(default)]
    pub available_days: HashSet<Weekday>,
    pub status: Status,
}

impl Instructor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Substring match on designation, per the spec's "regular" marker for
    /// permanent staff.
    pub fn is_regular(&self) -> bool {
        self.designation.to_lowercase().contains("regular")
    }

    pub fn is_schedulable(&self) -> bool {
        self.status == Status::Approved
    }

    /// An instructor with no declared available days is fully available.
    pub fn available_on(&self, day: Weekday) -> bool {
        self.available_days.is_empty() || self.available_days.contains(&day)
    }

    /// An instructor with no declared preferred window accepts any slot.
    pub fn accepts_window(&self, slot: &TimeSlot) -> bool {
        match &self.preferred_window {
            Some(window) => slot.contained_in(window),
            None => true,
        }
    }

    pub fn cap(&self, config: &super::SchedulerConfig) -> u32 {
        config.cap_for(self.role)
    }
}

/// "8:00 AM" / "5:00 PM" -> minutes-of-day.
fn parse_12h(s: &str) -> Option<u32> {
    let s = s.trim();
    let (time_part, period) = s.rsplit_once(' ')?;
    let (h, m) = time_part.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    let period = period.trim().to_uppercase();
    let h24 = match (h % 12, period.as_str()) {
        (0, "AM") => 0,
        (h, "AM") => h,
        (0, "PM") => 12,
        (h, "PM") => h + 12,
        _ => return None,
    };
    Some(h24 * 60 + m)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPreferredWindow {
    Pair(Vec<String>),
    Text(String),
}

fn deserialize_preferred_window<'de, D>(deserializer: D) -> Result<Option<TimeSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw: Option<RawPreferredWindow> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawPreferredWindow::Pair(parts)) => {
            if parts.is_empty() {
                return Ok(None);
            }
            if parts.len() != 2 {
                return Err(D::Error::custom(
                    "preferred_window pair must have exactly 2 entries",
                ));
            }
            let mut start = None;
            let mut end = None;
            for part in &parts {
                let (label, hhmm) = part
                    .split_once(':')
                    .ok_or_else(|| D::Error::custom("preferred_window entry missing ':'"))?;
                let minutes = parse_hhmm(hhmm)
                    .ok_or_else(|| D::Error::custom("invalid HH:MM in preferred_window"))?;
                match label.trim().to_lowercase().as_str() {
                    "start" => start = Some(minutes),
                    "end" => end = Some(minutes),
                    other => {
                        return Err(D::Error::custom(format!(
                            "unexpected preferred_window label '{other}'"
                        )))
                    }
                }
            }
            match (start, end) {
                (Some(s), Some(e)) => Ok(Some(TimeSlot::new(s, e))),
                _ => Err(D::Error::custom(
                    "preferred_window pair must declare both start and end",
                )),
            }
        }
        Some(RawPreferredWindow::Text(text)) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            let (start_str, end_str) = text
                .split_once(" - ")
                .ok_or_else(|| D::Error::custom("preferred_window text missing ' - ' separator"))?;
            let start = parse_12h(start_str)
                .ok_or_else(|| D::Error::custom("invalid start time in preferred_window text"))?;
            let end = parse_12h(end_str)
                .ok_or_else(|| D::Error::custom("invalid end time in preferred_window text"))?;
            Ok(Some(TimeSlot::new(start, end)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_designation_matches_substring_case_insensitively() {
        let instructor = sample_instructor("Regular Full-time");
        assert!(instructor.is_regular());
        let instructor = sample_instructor("REGULAR");
        assert!(instructor.is_regular());
        let instructor = sample_instructor("Part-time");
        assert!(!instructor.is_regular());
    }

    #[test]
    fn no_declared_days_means_fully_available() {
        let instructor = sample_instructor("Part-time");
        assert!(instructor.available_on(Weekday::Sunday));
    }

    #[test]
    fn parses_pair_encoding() {
        let json = r#"
        {
            "id": "f1", "first_name": "A", "last_name": "B", "role": "FACULTY",
            "designation": "Regular", "department": "BSCS", "status": "APPROVED",
            "preferred_window": ["start:08:00", "end:17:00"]
        }"#;
        let instructor: Instructor = serde_json::from_str(json).unwrap();
        let window = instructor.preferred_window.unwrap();
        assert_eq!(window.start, 8 * 60);
        assert_eq!(window.end, 17 * 60);
    }

    #[test]
    fn parses_text_encoding() {
        let json = r#"
        {
            "id": "f1", "first_name": "A", "last_name": "B", "role": "FACULTY",
            "designation": "Regular", "department": "BSCS", "status": "APPROVED",
            "preferred_window": "8:00 AM - 5:00 PM"
        }"#;
        let instructor: Instructor = serde_json::from_str(json).unwrap();
        let window = instructor.preferred_window.unwrap();
        assert_eq!(window.start, 8 * 60);
        assert_eq!(window.end, 17 * 60);
    }

    #[test]
    fn absent_preferred_window_is_none() {
        let json = r#"
        {
            "id": "f1", "first_name": "A", "last_name": "B", "role": "FACULTY",
            "designation": "Regular", "department": "BSCS", "status": "APPROVED"
        }"#;
        let instructor: Instructor = serde_json::from_str(json).unwrap();
        assert!(instructor.preferred_window.is_none());
    }

    fn sample_instructor(designation: &str) -> Instructor {
        Instructor {
            id: InstructorId("f1".into()),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: Role::Faculty,
            designation: designation.into(),
            department: "BSCS".into(),
            specializations: HashSet::new(),
            previous_subjects: HashSet::new(),
            years_of_experience: 5,
            preferred_window: None,
            available_days: HashSet::new(),
            status: Status::Approved,
        }
    }
}
