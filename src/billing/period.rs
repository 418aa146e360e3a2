use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Window of purchase dates that belong to one invoice. Inclusive at day
/// granularity: `start` is 00:00:00.000 of its first day and `end` is
/// 23:59:59.999 of its last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BillingPeriod {
    pub fn spanning(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            start: first_day.and_hms_opt(0, 0, 0).unwrap(),
            end: last_day.and_hms_milli_opt(23, 59, 59, 999).unwrap(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    pub fn num_days(&self) -> i64 {
        (self.last_day() - self.first_day()).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        let period = BillingPeriod::spanning(date(2025, 9, 11), date(2025, 10, 10));
        assert!(period.contains(date(2025, 9, 11)));
        assert!(period.contains(date(2025, 10, 10)));
        assert!(!period.contains(date(2025, 9, 10)));
        assert!(!period.contains(date(2025, 10, 11)));
    }

    #[test]
    fn spans_full_days() {
        let period = BillingPeriod::spanning(date(2025, 9, 11), date(2025, 10, 10));
        assert_eq!(period.start, date(2025, 9, 11).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            period.end,
            date(2025, 10, 10).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
        assert_eq!(period.num_days(), 30);
    }
}
