use crate::types::{
    Instructor, InstructorId, ProgramCode, RoomId, SchedulerConfig, Semester, SubjectCode,
    TimeSlot, Weekday, YearLevel,
};
use std::collections::HashMap;

pub type CohortKey = (ProgramCode, YearLevel, Semester);
pub type SubjectKey = (SubjectCode, Semester);

/// The shared mutable tracking tables a placement run reads and updates.
/// Owned exclusively by one `Scheduler` run; never shared across runs.
#[derive(Default)]
pub struct Tracker {
    faculty_bookings: HashMap<InstructorId, Vec<(Semester, Weekday, TimeSlot)>>,
    room_bookings: HashMap<RoomId, Vec<(Semester, Weekday, TimeSlot)>>,
    cohort_bookings: HashMap<CohortKey, Vec<(Weekday, TimeSlot)>>,
    faculty_workload: HashMap<InstructorId, u32>,
    subject_days_used: HashMap<SubjectKey, Vec<Weekday>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_free(&self, room: &RoomId, days: &[Weekday], slot: TimeSlot, semester: Semester) -> bool {
        let Some(bookings) = self.room_bookings.get(room) else {
            return true;
        };
        !bookings.iter().any(|(sem, day, booked)| {
            *sem == semester && days.contains(day) && slot.overlaps(booked)
        })
    }

    pub fn faculty_free(
        &self,
        instructor: &Instructor,
        days: &[Weekday],
        slot: TimeSlot,
        semester: Semester,
        config: &SchedulerConfig,
    ) -> bool {
        if !days.iter().all(|d| instructor.available_on(*d)) {
            return false;
        }
        if !instructor.accepts_window(&slot) {
            return false;
        }

        let Some(bookings) = self.faculty_bookings.get(&instructor.id) else {
            return true;
        };

        bookings.iter().all(|(sem, day, booked)| {
            if *sem != semester || !days.contains(day) {
                return true;
            }
            if slot.overlaps(booked) {
                return false;
            }
            let gap = if booked.end <= slot.start {
                slot.start - booked.end
            } else {
                booked.start - slot.end
            };
            gap >= config.min_rest_minutes
        })
    }

    pub fn cohort_free(&self, key: &CohortKey, days: &[Weekday], slot: TimeSlot) -> bool {
        let Some(bookings) = self.cohort_bookings.get(key) else {
            return true;
        };
        !bookings
            .iter()
            .any(|(day, booked)| days.contains(day) && slot.overlaps(booked))
    }

    pub fn subject_days_free(&self, key: &SubjectKey, days: &[Weekday]) -> bool {
        match self.subject_days_used.get(key) {
            Some(used) => !days.iter().any(|d| used.contains(d)),
            None => true,
        }
    }

    pub fn workload_of(&self, instructor: &InstructorId) -> u32 {
        self.faculty_workload.get(instructor).copied().unwrap_or(0)
    }

    /// Books `slot` on every day in `days` into all four tracking tables.
    pub fn commit(
        &mut self,
        instructor: &InstructorId,
        room: &RoomId,
        cohort: &CohortKey,
        subject: &SubjectKey,
        days: &[Weekday],
        slot: TimeSlot,
        semester: Semester,
        units: u32,
        count_workload: bool,
    ) {
        for day in days {
            self.faculty_bookings
                .entry(instructor.clone())
                .or_default()
                .push((semester, *day, slot));
            self.room_bookings
                .entry(room.clone())
                .or_default()
                .push((semester, *day, slot));
            self.cohort_bookings
                .entry(cohort.clone())
                .or_default()
                .push((*day, slot));
        }

        self.subject_days_used
            .entry(subject.clone())
            .or_default()
            .extend(days.iter().copied());

        if count_workload {
            *self.faculty_workload.entry(instructor.clone()).or_insert(0) += units;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, Status};
    use std::collections::HashSet;

    fn instructor() -> Instructor {
        Instructor {
            id: InstructorId("f1".into()),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: Role::Faculty,
            designation: "Regular".into(),
            department: "BSCS".into(),
            specializations: HashSet::new(),
            previous_subjects: HashSet::new(),
            years_of_experience: 5,
            preferred_window: None,
            available_days: HashSet::new(),
            status: Status::Approved,
        }
    }

    #[test]
    fn faculty_free_rejects_overlap_and_close_gaps() {
        let mut tracker = Tracker::new();
        let config = SchedulerConfig::default();
        let instr = instructor();
        let cohort: CohortKey = (ProgramCode("BSCS".into()), YearLevel::First, Semester::First);
        let subject: SubjectKey = (SubjectCode("CS101".into()), Semester::First);

        tracker.commit(
            &instr.id,
            &RoomId("r1".into()),
            &cohort,
            &subject,
            &[Weekday::Monday],
            TimeSlot::new(8 * 60, 9 * 60 + 30),
            Semester::First,
            3,
            true,
        );

        assert!(!tracker.faculty_free(
            &instr,
            &[Weekday::Monday],
            TimeSlot::new(9 * 60, 10 * 60),
            Semester::First,
            &config
        ));

        assert!(!tracker.faculty_free(
            &instr,
            &[Weekday::Monday],
            TimeSlot::new(9 * 60 + 30, 10 * 60 + 30),
            Semester::First,
            &config
        ));

        assert!(tracker.faculty_free(
            &instr,
            &[Weekday::Monday],
            TimeSlot::new(10 * 60, 11 * 60),
            Semester::First,
            &config
        ));
    }

    #[test]
    fn subject_days_free_blocks_reused_days() {
        let mut tracker = Tracker::new();
        let subject: SubjectKey = (SubjectCode("CS101".into()), Semester::First);
        tracker.subject_days_used.insert(subject.clone(), vec![Weekday::Monday]);
        assert!(!tracker.subject_days_free(&subject, &[Weekday::Monday, Weekday::Wednesday]));
        assert!(tracker.subject_days_free(&subject, &[Weekday::Tuesday, Weekday::Thursday]));
    }
}
