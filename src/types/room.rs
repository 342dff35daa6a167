use super::RoomId;
use serde::{Deserialize, Serialize};

/// Represents a physical room. A room is classified as a laboratory room iff
/// its name (case-insensitive) contains the substring "lab"; otherwise it is
/// a lecture room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

impl Room {
    pub fn is_lab(&self) -> bool {
        self.name.to_lowercase().contains("lab")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_case_insensitive_substring() {
        let room = Room {
            id: RoomId("r1".into()),
            name: "Computer LAB 3".into(),
        };
        assert!(room.is_lab());

        let room = Room {
            id: RoomId("r2".into()),
            name: "Room 204".into(),
        };
        assert!(!room.is_lab());
    }
}
