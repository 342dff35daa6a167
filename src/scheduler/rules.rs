use crate::types::{SessionRule, SessionTag};

const BSCS_ACT_LAB_HOURS_PER_UNIT: f64 = 3.0;
const PLAIN_LAB_HOURS_PER_UNIT: f64 = 1.0;

/// Expands a course's lecture/lab unit counts into the ordered list of
/// weekly sessions it demands, sorted by priority (lectures before labs).
pub fn build_session_rules(lec_units: u32, lab_units: u32, department: Option<&str>) -> Vec<SessionRule> {
    let mut rules = Vec::new();

    if lec_units > 0 {
        rules.push(lecture_rule(lec_units));
    }

    if lab_units > 0 {
        rules.push(lab_rule(lab_units, department));
    }

    rules.sort_by_key(|r| r.priority());
    rules
}

fn lecture_rule(lec_units: u32) -> SessionRule {
    match lec_units {
        3 => SessionRule::new(SessionTag::Lecture, 1.5, 2),
        2 => SessionRule::new(SessionTag::Lecture, 1.0, 2),
        1 => SessionRule::new(SessionTag::Lecture, 1.0, 1),
        n => SessionRule::new(SessionTag::Lecture, 1.0, n),
    }
}

fn lab_rule(lab_units: u32, department: Option<&str>) -> SessionRule {
    let expands_3x = department
        .map(|d| {
            let d = d.to_uppercase();
            d == "BSCS" || d == "ACT"
        })
        .unwrap_or(false);

    if expands_3x {
        let weekly_hours = lab_units as f64 * BSCS_ACT_LAB_HOURS_PER_UNIT;
        SessionRule::new(SessionTag::Laboratory, 1.5, (weekly_hours / 1.5).round() as u32)
    } else {
        let weekly_hours = lab_units as f64 * PLAIN_LAB_HOURS_PER_UNIT;
        SessionRule::new(SessionTag::Laboratory, 1.0, weekly_hours.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_lecture_units_become_two_sessions_of_ninety_minutes() {
        let rules = build_session_rules(3, 0, None);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].hours_per_session, 1.5);
        assert_eq!(rules[0].sessions_per_week, 2);
    }

    #[test]
    fn one_lecture_unit_becomes_a_single_one_hour_session() {
        let rules = build_session_rules(1, 0, None);
        assert_eq!(rules[0].sessions_per_week, 1);
        assert_eq!(rules[0].hours_per_session, 1.0);
    }

    #[test]
    fn bscs_lab_unit_expands_to_two_ninety_minute_sessions() {
        let rules = build_session_rules(0, 1, Some("BSCS"));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].tag, SessionTag::Laboratory);
        assert_eq!(rules[0].hours_per_session, 1.5);
        assert_eq!(rules[0].sessions_per_week, 2);
        assert_eq!(rules[0].total_hours_needed(), 3.0);
    }

    #[test]
    fn plain_department_lab_unit_is_a_single_hour() {
        let rules = build_session_rules(0, 1, Some("BSIT"));
        assert_eq!(rules[0].hours_per_session, 1.0);
        assert_eq!(rules[0].sessions_per_week, 1);
    }

    #[test]
    fn zero_units_emit_no_rule() {
        assert!(build_session_rules(0, 0, None).is_empty());
    }

    #[test]
    fn lectures_sort_before_labs() {
        let rules = build_session_rules(3, 1, Some("BSCS"));
        assert_eq!(rules[0].tag, SessionTag::Lecture);
        assert_eq!(rules[1].tag, SessionTag::Laboratory);
    }
}
