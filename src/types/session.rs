use super::{
    CourseId, InstructorId, ProgramCode, RoomId, Semester, SubjectCode, TimeSlot, Weekday,
    YearLevel,
};
use serde::{Deserialize, Serialize};

/// Lecture or laboratory component of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SessionTag {
    Lecture,
    Laboratory,
}

impl SessionTag {
    /// Lecture sorts before Laboratory (priority 1 < 2).
    pub fn priority(&self) -> u8 {
        match self {
            SessionTag::Lecture => 1,
            SessionTag::Laboratory => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionTag::Lecture => "Lecture",
            SessionTag::Laboratory => "Laboratory",
        }
    }
}

impl std::fmt::Display for SessionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for SessionTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Lecture" => Ok(SessionTag::Lecture),
            "Laboratory" => Ok(SessionTag::Laboratory),
            other => Err(format!("unrecognized session tag '{other}'")),
        }
    }
}

impl From<SessionTag> for String {
    fn from(value: SessionTag) -> Self {
        value.as_str().to_string()
    }
}

/// A derived description of how many weekly sessions of what length a
/// course's lecture or laboratory component requires.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRule {
    pub tag: SessionTag,
    pub hours_per_session: f64,
    pub sessions_per_week: u32,
}

impl SessionRule {
    pub fn new(tag: SessionTag, hours_per_session: f64, sessions_per_week: u32) -> Self {
        Self {
            tag,
            hours_per_session,
            sessions_per_week,
        }
    }

    pub fn total_hours_needed(&self) -> f64 {
        self.hours_per_session * self.sessions_per_week as f64
    }

    pub fn priority(&self) -> u8 {
        self.tag.priority()
    }

    pub fn minutes_per_session(&self) -> u32 {
        (self.hours_per_session * 60.0).round() as u32
    }
}

/// One placed weekly class meeting: a (day, time, room, instructor) tuple
/// for a single session of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSession {
    pub course_id: CourseId,
    pub curriculum_year: String,
    pub tag: SessionTag,
    pub day: Weekday,
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub instructor_id: InstructorId,
    pub instructor_name: String,
    pub room_id: RoomId,
    pub room_name: String,
    pub subject_code: SubjectCode,
    pub subject_name: String,
    pub program: ProgramCode,
    pub year_level: YearLevel,
    pub semester: Semester,
    pub units: u32,
    pub lec: u32,
    pub lab: u32,
}

impl ScheduledSession {
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_minutes, self.end_minutes)
    }

    pub fn cohort_key(&self) -> (ProgramCode, YearLevel, Semester) {
        (self.program.clone(), self.year_level, self.semester)
    }

    pub fn hours(&self) -> f64 {
        self.time_slot().hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lecture_has_lower_priority_value_than_lab() {
        assert!(SessionTag::Lecture.priority() < SessionTag::Laboratory.priority());
    }

    #[test]
    fn total_hours_multiplies_sessions_by_length() {
        let rule = SessionRule::new(SessionTag::Lecture, 1.5, 2);
        assert_eq!(rule.total_hours_needed(), 3.0);
        assert_eq!(rule.minutes_per_session(), 90);
    }
}
