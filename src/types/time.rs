use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week. Ord follows the Monday-first convention the canonical
/// day-pair tables are built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A half-open time interval `[start, end)`, in minutes-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of the slot in hours.
    pub fn hours(&self) -> f64 {
        (self.end.saturating_sub(self.start)) as f64 / 60.0
    }

    /// Two intervals `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `self` is fully contained in `other`.
    pub fn contained_in(&self, other: &TimeSlot) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Valid iff start >= working open, end <= working close, end > start,
    /// and the slot does not intersect the lunch block.
    pub fn is_valid(&self, config: &super::SchedulerConfig) -> bool {
        self.start >= config.working_start_minutes
            && self.end <= config.working_end_minutes
            && self.end > self.start
            && !self.overlaps(&config.lunch_slot())
    }
}

/// Parse `"HH:MM"` into minutes-of-day.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    Some(h * 60 + m)
}

/// Render minutes-of-day as zero-padded `"HH:MM"`.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render minutes-of-day as `"h:mm AM/PM"`, matching the preferred-window
/// string encoding accepted on input (see [`super::PreferredWindow`]).
pub fn format_12h(minutes: u32) -> String {
    let h24 = minutes / 60;
    let m = minutes % 60;
    let period = if h24 < 12 { "AM" } else { "PM" };
    let h12 = match h24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, m, period)
}

/// Canonical 1-hour slots: 07:00-08:00 ... 11:00-12:00, 13:00-14:00 ... 19:00-20:00.
pub fn one_hour_slots(config: &super::SchedulerConfig) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut start = config.working_start_minutes;
    while start + 60 <= config.working_end_minutes {
        let slot = TimeSlot::new(start, start + 60);
        if slot.is_valid(config) {
            slots.push(slot);
        }
        start += 60;
    }
    slots
}

/// Canonical 1.5-hour slots at a half-hour cadence: every `[start, start+90]`
/// that is valid (roughly 20 slots across the working day).
pub fn ninety_minute_slots(config: &super::SchedulerConfig) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut start = config.working_start_minutes;
    while start + 90 <= config.working_end_minutes {
        let slot = TimeSlot::new(start, start + 90);
        if slot.is_valid(config) {
            slots.push(slot);
        }
        start += 30;
    }
    slots
}

/// Canonical lecture day-pairs, searched in this order.
pub fn lecture_day_pairs() -> Vec<(Weekday, Weekday)> {
    use Weekday::*;
    vec![
        (Monday, Wednesday),
        (Tuesday, Thursday),
        (Monday, Friday),
        (Wednesday, Friday),
        (Tuesday, Friday),
    ]
}

/// Canonical laboratory day-pairs, searched in this order.
pub fn laboratory_day_pairs() -> Vec<(Weekday, Weekday)> {
    use Weekday::*;
    vec![
        (Tuesday, Thursday),
        (Wednesday, Friday),
        (Monday, Friday),
        (Monday, Wednesday),
        (Tuesday, Friday),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SchedulerConfig;

    #[test]
    fn hhmm_roundtrips() {
        assert_eq!(parse_hhmm("07:00"), Some(420));
        assert_eq!(format_hhmm(420), "07:00");
        assert_eq!(parse_hhmm("20:00"), Some(1200));
    }

    #[test]
    fn format_12h_matches_expected_strings() {
        assert_eq!(format_12h(0), "12:00 AM");
        assert_eq!(format_12h(8 * 60), "8:00 AM");
        assert_eq!(format_12h(12 * 60), "12:00 PM");
        assert_eq!(format_12h(17 * 60), "5:00 PM");
    }

    #[test]
    fn overlap_is_half_open() {
        let a = TimeSlot::new(420, 480);
        let b = TimeSlot::new(480, 540);
        assert!(!a.overlaps(&b), "back-to-back slots must not overlap");
        let c = TimeSlot::new(450, 510);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn one_hour_slots_exclude_lunch() {
        let config = SchedulerConfig::default();
        let slots = one_hour_slots(&config);
        assert!(slots.iter().all(|s| !s.overlaps(&config.lunch_slot())));
        assert_eq!(slots.len(), 12);
    }

    #[test]
    fn ninety_minute_slots_never_exceed_close() {
        let config = SchedulerConfig::default();
        let slots = ninety_minute_slots(&config);
        assert!(slots.iter().all(|s| s.end <= config.working_end_minutes));
        assert!(!slots.is_empty());
    }

    #[test]
    fn day_pairs_are_disjoint_within_each_pair() {
        for (d1, d2) in lecture_day_pairs().into_iter().chain(laboratory_day_pairs()) {
            assert_ne!(d1, d2);
        }
    }
}
