//! Deadline-driven urgency.

use prio_core::Date;

/// Signed whole days from `today` to `deadline` (negative when overdue).
pub fn days_between(deadline: Date, today: Date) -> i64 {
    (deadline - today).num_days()
}

/// Turns a deadline into an urgency multiplier.
pub trait UrgencyPolicy: Send + Sync {
    /// Multiplier applied to the importance core.
    fn urgency_multiplier(&self, deadline: Option<Date>, today: Date) -> f64;

    /// Days left until the deadline, `None` without a deadline.
    fn days_to_deadline(&self, deadline: Option<Date>, today: Date) -> Option<i64> {
        deadline.map(|d| days_between(d, today))
    }
}

/// Step function over days remaining.
///
/// | days left | multiplier |
/// |-----------|------------|
/// | ≤ 1       | 1.60       |
/// | ≤ 3       | 1.40       |
/// | ≤ 7       | 1.20       |
/// | ≤ 14      | 1.10       |
/// | later     | 1.05       |
///
/// Overdue tasks fall into the first row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUrgencyPolicy;

impl UrgencyPolicy for DefaultUrgencyPolicy {
    fn urgency_multiplier(&self, deadline: Option<Date>, today: Date) -> f64 {
        let Some(deadline) = deadline else {
            return 1.00;
        };

        match days_between(deadline, today) {
            d if d <= 1 => 1.60,
            d if d <= 3 => 1.40,
            d if d <= 7 => 1.20,
            d if d <= 14 => 1.10,
            _ => 1.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> Date {
        Date::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn in_days(n: i64) -> Option<Date> {
        Some(today() + Duration::days(n))
    }

    #[test]
    fn test_no_deadline() {
        let policy = DefaultUrgencyPolicy;
        assert_eq!(policy.urgency_multiplier(None, today()), 1.00);
        assert_eq!(policy.days_to_deadline(None, today()), None);
    }

    #[test]
    fn test_thresholds() {
        let policy = DefaultUrgencyPolicy;
        let cases = [
            (0, 1.60),
            (1, 1.60),
            (2, 1.40),
            (3, 1.40),
            (4, 1.20),
            (7, 1.20),
            (8, 1.10),
            (14, 1.10),
            (15, 1.05),
            (365, 1.05),
        ];
        for (days, expected) in cases {
            assert_eq!(
                policy.urgency_multiplier(in_days(days), today()),
                expected,
                "days = {}",
                days
            );
        }
    }

    #[test]
    fn test_overdue_shares_top_tier() {
        let policy = DefaultUrgencyPolicy;
        assert_eq!(policy.urgency_multiplier(in_days(-1), today()), 1.60);
        assert_eq!(policy.urgency_multiplier(in_days(-400), today()), 1.60);
    }

    #[test]
    fn test_days_to_deadline_is_signed() {
        let policy = DefaultUrgencyPolicy;
        assert_eq!(policy.days_to_deadline(in_days(5), today()), Some(5));
        assert_eq!(policy.days_to_deadline(in_days(-3), today()), Some(-3));
        assert_eq!(policy.days_to_deadline(in_days(0), today()), Some(0));
    }
}
