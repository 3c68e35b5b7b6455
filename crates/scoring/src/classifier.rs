//! Quadrant and tag classification.

use prio_core::{Date, Quadrant, Tag};

use crate::urgency::days_between;

/// Impact at or above which a task counts as important.
pub const IMPORTANT_IMPACT: f64 = 3.0;

/// Days remaining at or below which a task counts as urgent.
pub const URGENT_DAYS: i64 = 3;

/// Classifies a task by importance, urgency and size.
pub trait Classifier: Send + Sync {
    /// Eisenhower quadrant for a task.
    fn quadrant(&self, impact: f64, deadline: Option<Date>, today: Date) -> Quadrant;

    /// Heuristic tag, `None` when no rule matches.
    fn tag(&self, time_est: f64, impact: f64, deadline: Option<Date>, today: Date) -> Option<Tag>;
}

/// Eisenhower-matrix classifier with QuickWin/HighROI/BigBet tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct EisenhowerClassifier;

impl EisenhowerClassifier {
    fn is_urgent(deadline: Option<Date>, today: Date) -> bool {
        deadline.is_some_and(|d| days_between(d, today) <= URGENT_DAYS)
    }
}

impl Classifier for EisenhowerClassifier {
    fn quadrant(&self, impact: f64, deadline: Option<Date>, today: Date) -> Quadrant {
        let important = impact >= IMPORTANT_IMPACT;
        let urgent = Self::is_urgent(deadline, today);
        Quadrant::from_flags(important, urgent)
    }

    // Rule order matters: a short important task is a QuickWin, not HighROI.
    fn tag(&self, time_est: f64, impact: f64, deadline: Option<Date>, today: Date) -> Option<Tag> {
        let urgent = Self::is_urgent(deadline, today);

        if time_est <= 0.5 && (impact >= 2.0 || urgent) {
            Some(Tag::QuickWin)
        } else if time_est <= 2.0 && impact >= 3.0 {
            Some(Tag::HighRoi)
        } else if time_est >= 4.0 && impact >= 4.0 {
            Some(Tag::BigBet)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> Date {
        Date::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn in_days(n: i64) -> Option<Date> {
        Some(today() + Duration::days(n))
    }

    #[test]
    fn test_quadrants() {
        let c = EisenhowerClassifier;
        assert_eq!(c.quadrant(3.0, in_days(3), today()), Quadrant::ImportantUrgent);
        assert_eq!(c.quadrant(4.0, in_days(4), today()), Quadrant::ImportantNotUrgent);
        assert_eq!(c.quadrant(4.0, None, today()), Quadrant::ImportantNotUrgent);
        assert_eq!(c.quadrant(2.9, in_days(-2), today()), Quadrant::NotImportantUrgent);
        assert_eq!(c.quadrant(0.0, None, today()), Quadrant::NotImportantNotUrgent);
    }

    #[test]
    fn test_important_is_monotonic_in_impact() {
        let c = EisenhowerClassifier;
        let mut was_important = false;
        for step in 0..=50 {
            let impact = step as f64 * 0.1;
            let important = c.quadrant(impact, None, today()).is_important();
            assert!(important || !was_important, "impact = {}", impact);
            assert_eq!(important, impact >= 3.0);
            was_important = important;
        }
    }

    #[test]
    fn test_quick_win_beats_high_roi() {
        let c = EisenhowerClassifier;
        assert_eq!(c.tag(0.4, 3.5, None, today()), Some(Tag::QuickWin));
    }

    #[test]
    fn test_quick_win_via_urgency() {
        let c = EisenhowerClassifier;
        assert_eq!(c.tag(0.5, 1.0, in_days(2), today()), Some(Tag::QuickWin));
        assert_eq!(c.tag(0.5, 1.0, in_days(4), today()), None);
    }

    #[test]
    fn test_high_roi_and_big_bet() {
        let c = EisenhowerClassifier;
        assert_eq!(c.tag(2.0, 3.0, None, today()), Some(Tag::HighRoi));
        assert_eq!(c.tag(4.0, 4.0, None, today()), Some(Tag::BigBet));
        assert_eq!(c.tag(4.0, 3.9, None, today()), None);
        assert_eq!(c.tag(3.0, 5.0, None, today()), None);
    }

    #[test]
    fn test_default_time_estimate_gets_no_tag_for_low_impact() {
        let c = EisenhowerClassifier;
        assert_eq!(c.tag(1.0, 2.5, in_days(1), today()), None);
    }
}
