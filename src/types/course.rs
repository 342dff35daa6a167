use super::{CourseId, ProgramCode, SubjectCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Year level a cohort belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YearLevel {
    First,
    Second,
    Third,
    Fourth,
}

impl YearLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearLevel::First => "1st Year",
            YearLevel::Second => "2nd Year",
            YearLevel::Third => "3rd Year",
            YearLevel::Fourth => "4th Year",
        }
    }
}

impl fmt::Display for YearLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for YearLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "1st Year" => Ok(YearLevel::First),
            "2nd Year" => Ok(YearLevel::Second),
            "3rd Year" => Ok(YearLevel::Third),
            "4th Year" => Ok(YearLevel::Fourth),
            other => Err(format!("unrecognized year level '{other}'")),
        }
    }
}

impl From<YearLevel> for String {
    fn from(value: YearLevel) -> Self {
        value.as_str().to_string()
    }
}

/// Semester/period a course is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Semester {
    First,
    Second,
    Summer,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "1st Semester",
            Semester::Second => "2nd Semester",
            Semester::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Semester {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "1st Semester" => Ok(Semester::First),
            "2nd Semester" => Ok(Semester::Second),
            "Summer" => Ok(Semester::Summer),
            other => Err(format!("unrecognized semester '{other}'")),
        }
    }
}

impl From<Semester> for String {
    fn from(value: Semester) -> Self {
        value.as_str().to_string()
    }
}

/// A curriculum course offering for a given program/year/semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub curriculum_year: String,
    pub program: ProgramCode,
    pub year_level: YearLevel,
    pub semester: Semester,
    pub subject_code: SubjectCode,
    pub subject_name: String,
    pub lec_units: u32,
    pub lab_units: u32,
    /// Offering department; drives the BSCS/ACT lab-hour expansion rule.
    #[serde(default)]
    pub department: Option<String>,
    /// Domain keywords used by the faculty scorer's tag-match calculation.
    #[serde(default)]
    pub tags: HashSet<String>,
}

impl Course {
    pub fn total_units(&self) -> u32 {
        self.lec_units + self.lab_units
    }

    /// The cohort key this course's sessions must not overlap within.
    pub fn cohort_key(&self) -> (ProgramCode, YearLevel, Semester) {
        (self.program.clone(), self.year_level, self.semester)
    }
}
