use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Parse the report's "I/O Type" column ('IN' | 'OUT', uppercase).
    pub fn from_report_str(s: &str) -> Option<Self> {
        match s.trim() {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_report_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Direction::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Direction::Out)
    }
}
