//! Eisenhower quadrants and heuristic tags.

use serde::{Deserialize, Serialize};

/// Eisenhower-matrix quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Do now
    #[serde(rename = "Important+Urgent")]
    ImportantUrgent,
    /// Schedule
    #[serde(rename = "Important+NotUrgent")]
    ImportantNotUrgent,
    /// Squeeze in or hand off
    #[serde(rename = "NotImportant+Urgent")]
    NotImportantUrgent,
    /// Question whether it is needed at all
    #[serde(rename = "NotImportant+NotUrgent")]
    NotImportantNotUrgent,
}

impl Quadrant {
    /// Build a quadrant from its two axes.
    pub fn from_flags(important: bool, urgent: bool) -> Self {
        match (important, urgent) {
            (true, true) => Quadrant::ImportantUrgent,
            (true, false) => Quadrant::ImportantNotUrgent,
            (false, true) => Quadrant::NotImportantUrgent,
            (false, false) => Quadrant::NotImportantNotUrgent,
        }
    }

    /// Whether this quadrant is on the important side.
    pub fn is_important(&self) -> bool {
        matches!(self, Quadrant::ImportantUrgent | Quadrant::ImportantNotUrgent)
    }

    /// Whether this quadrant is on the urgent side.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Quadrant::ImportantUrgent | Quadrant::NotImportantUrgent)
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::ImportantUrgent => "Important+Urgent",
            Quadrant::ImportantNotUrgent => "Important+NotUrgent",
            Quadrant::NotImportantUrgent => "NotImportant+Urgent",
            Quadrant::NotImportantNotUrgent => "NotImportant+NotUrgent",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic tag attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Very short and worth it
    QuickWin,
    /// Short with high impact
    #[serde(rename = "HighROI")]
    HighRoi,
    /// Long with very high impact
    BigBet,
}

impl Tag {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::QuickWin => "QuickWin",
            Tag::HighRoi => "HighROI",
            Tag::BigBet => "BigBet",
        }
    }

    /// Whether the tag marks a task that builds momentum.
    pub fn is_momentum(&self) -> bool {
        matches!(self, Tag::QuickWin | Tag::HighRoi)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_from_flags() {
        assert_eq!(Quadrant::from_flags(true, true), Quadrant::ImportantUrgent);
        assert_eq!(Quadrant::from_flags(true, false), Quadrant::ImportantNotUrgent);
        assert_eq!(Quadrant::from_flags(false, true), Quadrant::NotImportantUrgent);
        assert_eq!(Quadrant::from_flags(false, false), Quadrant::NotImportantNotUrgent);
    }

    #[test]
    fn test_quadrant_axes_round_trip() {
        for important in [true, false] {
            for urgent in [true, false] {
                let q = Quadrant::from_flags(important, urgent);
                assert_eq!(q.is_important(), important);
                assert_eq!(q.is_urgent(), urgent);
            }
        }
    }

    #[test]
    fn test_labels_serialize_as_display() {
        let json = serde_json::to_string(&Quadrant::NotImportantUrgent).unwrap();
        assert_eq!(json, "\"NotImportant+Urgent\"");
        let json = serde_json::to_string(&Tag::HighRoi).unwrap();
        assert_eq!(json, "\"HighROI\"");
    }

    #[test]
    fn test_momentum_tags() {
        assert!(Tag::QuickWin.is_momentum());
        assert!(Tag::HighRoi.is_momentum());
        assert!(!Tag::BigBet.is_momentum());
    }
}
